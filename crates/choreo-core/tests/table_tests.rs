use choreo_core::*;

fn mask_rule() -> PropertyRule {
    let w = Window::new("mask", 0.2, 0.28).unwrap();
    PropertyRule::new(
        "mask",
        TargetId::new("#mask"),
        Property::ClipCircle,
        vec![Segment::linear(w, Value::Percent(0.0), Value::Percent(100.0))],
    )
    .unwrap()
}

#[test]
fn mask_radius_follows_progress_sequence() {
    let rule = mask_rule();
    let progress = [0.0, 0.1, 0.2, 0.24, 0.28, 0.5];
    let expected = [0.0, 0.0, 0.0, 50.0, 100.0, 100.0];
    for (p, want) in progress.iter().zip(expected) {
        assert_eq!(rule.evaluate(*p), Value::Percent(want), "progress {p}");
    }
}

#[test]
fn mask_radius_css_is_a_centred_circle() {
    let css = mask_rule().evaluate(0.24).to_css(Property::ClipCircle);
    assert_eq!(css, "circle(50% at 50% 50%)");
}

#[test]
fn color_ramp_endpoints_and_midpoint() {
    let ramp = ColorRamp::WHITE_TO_BLACK;
    assert_eq!(ramp.at(0.0), Rgb::WHITE);
    assert_eq!(ramp.at(1.0), Rgb::BLACK);
    assert_eq!(ramp.at(0.5), Rgb::new(128, 128, 128));
}

#[test]
fn color_ramp_matches_rounded_formula() {
    let ramp = ColorRamp::WHITE_TO_BLACK;
    for i in 0..=200 {
        let t = i as f64 / 200.0;
        let channel = (255.0 * (1.0 - t)).round() as u8;
        assert_eq!(ramp.at(t), Rgb::new(channel, channel, channel), "t={t}");
    }
}

#[test]
fn color_rule_at_window_boundaries() {
    let w = Window::new("bg", 0.25, 0.75).unwrap();
    let rule = PropertyRule::new(
        "bg",
        TargetId::new("#section"),
        Property::BackgroundColor,
        vec![Segment::linear(w, Value::Color(Rgb::WHITE), Value::Color(Rgb::BLACK))],
    )
    .unwrap();
    assert_eq!(rule.evaluate(0.25), Value::Color(Rgb::WHITE));
    assert_eq!(rule.evaluate(0.5), Value::Color(Rgb::new(128, 128, 128)));
    assert_eq!(rule.evaluate(0.75), Value::Color(Rgb::BLACK));
    assert_eq!(
        rule.evaluate(0.5).to_css(Property::BackgroundColor),
        "rgb(128, 128, 128)"
    );
}

fn assert_px(value: Value, want: f64) {
    match value {
        Value::Px(v) => assert!((v - want).abs() < 1e-9, "got {v}, want {want}"),
        other => panic!("expected px, got {other:?}"),
    }
}

fn offset_rule() -> PropertyRule {
    // deliberately given out of order
    PropertyRule::new(
        "offset",
        TargetId::new("#header"),
        Property::TranslateX,
        vec![
            Segment::linear(
                Window::new("out", 0.5, 0.6).unwrap(),
                Value::Px(0.0),
                Value::Px(-100.0),
            ),
            Segment::linear(
                Window::new("in", 0.1, 0.2).unwrap(),
                Value::Px(100.0),
                Value::Px(0.0),
            ),
        ],
    )
    .unwrap()
}

#[test]
fn rule_branches_in_window_order() {
    let rule = offset_rule();
    assert_eq!(rule.segments()[0].window.start(), 0.1);
    assert_eq!(rule.evaluate(0.0), Value::Px(100.0)); // before first
    assert_px(rule.evaluate(0.15), 50.0); // inside first
    assert_eq!(rule.evaluate(0.3), Value::Px(0.0)); // gap holds first `to`
    assert_px(rule.evaluate(0.55), -50.0); // inside second
    assert_eq!(rule.evaluate(1.0), Value::Px(-100.0)); // after last
}

#[test]
fn touching_segments_hand_over_at_the_boundary() {
    let rule = PropertyRule::new(
        "fade",
        TargetId::new("#h"),
        Property::Opacity,
        vec![
            Segment::linear(
                Window::new("in", 0.0, 0.5).unwrap(),
                Value::Unitless(0.0),
                Value::Unitless(1.0),
            ),
            Segment::linear(
                Window::new("out", 0.5, 1.0).unwrap(),
                Value::Unitless(1.0),
                Value::Unitless(0.0),
            ),
        ],
    )
    .unwrap();
    assert_eq!(rule.evaluate(0.5), Value::Unitless(1.0));
    assert_eq!(rule.evaluate(0.75), Value::Unitless(0.5));
}

#[test]
fn overlapping_segments_are_rejected() {
    let err = PropertyRule::new(
        "clash",
        TargetId::new("#h"),
        Property::TranslateX,
        vec![
            Segment::linear(
                Window::new("a", 0.1, 0.3).unwrap(),
                Value::Px(0.0),
                Value::Px(10.0),
            ),
            Segment::linear(
                Window::new("b", 0.2, 0.4).unwrap(),
                Value::Px(10.0),
                Value::Px(20.0),
            ),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConfigError::OverlappingSegments {
            name: "clash".into(),
            at: 0.2
        }
    );
}

#[test]
fn empty_and_mixed_rules_are_rejected() {
    let empty = PropertyRule::new("empty", TargetId::new("#h"), Property::Opacity, vec![]);
    assert!(matches!(empty, Err(ConfigError::EmptyRule { .. })));

    let mixed = PropertyRule::new(
        "mixed",
        TargetId::new("#h"),
        Property::Color,
        vec![Segment::linear(
            Window::new("w", 0.0, 1.0).unwrap(),
            Value::Color(Rgb::WHITE),
            Value::Unitless(0.0),
        )],
    );
    assert!(matches!(mixed, Err(ConfigError::MixedValueKinds { .. })));
}

#[test]
fn eased_segments_keep_exact_endpoints() {
    let w = Window::new("w", 0.0, 1.0).unwrap();
    let rule = PropertyRule::new(
        "rise",
        TargetId::new("#h"),
        Property::TranslateY,
        vec![Segment::eased(w, Value::Px(40.0), Value::Px(0.0), Easing::PowerOut(2))],
    )
    .unwrap();
    assert_eq!(rule.evaluate(0.0), Value::Px(40.0));
    assert_eq!(rule.evaluate(1.0), Value::Px(0.0));
    match rule.evaluate(0.5) {
        // ease-out is ahead of linear at the midpoint
        Value::Px(v) => assert!(v < 20.0 && v > 0.0),
        other => panic!("unexpected {other:?}"),
    }
}
