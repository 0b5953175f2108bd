use choreo_core::*;

fn tooltip() -> TooltipRule {
    let show = Window::new("show", 0.45, 0.5).unwrap();
    let hide = Window::new("hide", 0.58, 0.62).unwrap();
    let label = TargetId::new("#tip .tooltip-label");
    let timeline = ScrubTimeline::new(vec![
        Track {
            target: label.clone(),
            property: Property::Opacity,
            span: Window::new("label", 0.0, 1.0).unwrap(),
            from: Value::Unitless(0.0),
            to: Value::Unitless(1.0),
            easing: Easing::Linear,
        },
        Track {
            target: label,
            property: Property::TranslateY,
            span: Window::new("label", 0.5, 1.0).unwrap(),
            from: Value::Px(24.0),
            to: Value::Px(0.0),
            easing: Easing::Linear,
        },
    ]);
    TooltipRule::new("#tip", show, Some(hide), timeline).unwrap()
}

#[test]
fn cold_start_inside_window_sets_exact_partial_head() {
    for p in [0.45_f64, 0.46, 0.4725, 0.49, 0.5] {
        let expected = ((p - 0.45) / (0.5 - 0.45)).clamp(0.0, 1.0);
        assert_eq!(tooltip().scrub(p).head(), expected, "p={p}");
    }
}

#[test]
fn phases_follow_progress_in_both_directions() {
    let tip = tooltip();
    let phase = |p: f64| tip.scrub(p).phase();
    assert_eq!(phase(0.3), TooltipPhase::Hidden);
    assert_eq!(phase(0.47), TooltipPhase::Transitioning);
    assert_eq!(phase(0.55), TooltipPhase::Visible);
    assert_eq!(phase(0.6), TooltipPhase::Transitioning);
    assert_eq!(phase(0.7), TooltipPhase::Hidden);
    // scrub straight back into the visible range
    assert_eq!(phase(0.52), TooltipPhase::Visible);
    assert_eq!(phase(0.1), TooltipPhase::Hidden);
}

#[test]
fn head_is_independent_of_history() {
    let tip = tooltip();
    let direct = tip.scrub(0.48);

    let mut last = ScrubTimeline::default();
    for p in [0.9, 0.1, 0.6, 0.55, 0.2, 0.48] {
        last = tip.scrub(p);
    }
    assert_eq!(direct.head(), last.head());
    assert_eq!(direct.sample(), last.sample());
    // the rule's own timeline is never moved
    assert_eq!(tip.timeline.head(), 0.0);
}

#[test]
fn timeline_tracks_respect_their_spans() {
    let mut tl = tooltip().timeline;
    tl.seek(0.0);
    let start = tl.sample();
    assert_eq!(start[0].2, Value::Unitless(0.0));
    assert_eq!(start[1].2, Value::Px(24.0));

    tl.seek(0.5);
    let mid = tl.sample();
    assert_eq!(mid[0].2, Value::Unitless(0.5));
    assert_eq!(mid[1].2, Value::Px(24.0));

    tl.seek(1.0);
    let end = tl.sample();
    assert_eq!(end[0].2, Value::Unitless(1.0));
    assert_eq!(end[1].2, Value::Px(0.0));
}

#[test]
fn seek_clamps_head() {
    let mut tl = tooltip().timeline;
    tl.seek(3.0);
    assert_eq!(tl.head(), 1.0);
    tl.seek(-1.0);
    assert_eq!(tl.head(), 0.0);
}

#[test]
fn hide_window_must_not_overlap_show() {
    let show = Window::new("show", 0.4, 0.5).unwrap();
    let hide = Window::new("hide", 0.45, 0.6).unwrap();
    let err = TooltipRule::new("#bad", show, Some(hide), ScrubTimeline::default()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::TooltipHideOverlapsShow {
            name: "#bad".into()
        }
    );
}
