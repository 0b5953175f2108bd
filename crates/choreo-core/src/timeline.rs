use crate::easing::Easing;
use crate::error::ConfigError;
use crate::table::{interpolate, Property, TargetId, Value};
use crate::window::Window;
use smallvec::SmallVec;

/// One tween inside a scrubbed timeline. `span` is expressed in timeline
/// head units, not scroll progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub target: TargetId,
    pub property: Property,
    pub span: Window,
    pub from: Value,
    pub to: Value,
    pub easing: Easing,
}

/// A reversible timeline whose play head is set directly, never advanced by
/// elapsed time. Seeking to the same head always yields the same output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrubTimeline {
    tracks: Vec<Track>,
    head: f64,
}

impl ScrubTimeline {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, head: 0.0 }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn head(&self) -> f64 {
        self.head
    }

    pub fn seek(&mut self, head: f64) {
        self.head = head.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn phase(&self) -> TooltipPhase {
        TooltipPhase::from_head(self.head)
    }

    pub fn sample(&self) -> SmallVec<[(TargetId, Property, Value); 4]> {
        self.tracks
            .iter()
            .map(|track| {
                let t = track.easing.apply(track.span.progress(self.head));
                (
                    track.target.clone(),
                    track.property,
                    interpolate(track.from, track.to, t),
                )
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPhase {
    Hidden,
    Transitioning,
    Visible,
}

impl TooltipPhase {
    pub fn from_head(head: f64) -> Self {
        if head <= 0.0 {
            TooltipPhase::Hidden
        } else if head >= 1.0 {
            TooltipPhase::Visible
        } else {
            TooltipPhase::Transitioning
        }
    }
}

/// Visibility rule for one tooltip: the head rises across `show` and, if
/// present, falls back across `hide`.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRule {
    pub name: String,
    pub show: Window,
    pub hide: Option<Window>,
    pub timeline: ScrubTimeline,
}

impl TooltipRule {
    pub fn new(
        name: impl Into<String>,
        show: Window,
        hide: Option<Window>,
        timeline: ScrubTimeline,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if let Some(hide) = hide {
            if hide.start() < show.end() {
                return Err(ConfigError::TooltipHideOverlapsShow { name });
            }
        }
        Ok(Self {
            name,
            show,
            hide,
            timeline,
        })
    }

    /// Head for the current progress; inside `show` this is exactly
    /// `(p - lo) / (hi - lo)`.
    #[inline]
    pub fn head_at(&self, progress: f64) -> f64 {
        let rise = self.show.progress(progress);
        match &self.hide {
            Some(hide) => rise * (1.0 - hide.progress(progress)),
            None => rise,
        }
    }

    /// The timeline seeked to the head for `progress`. The rule's own
    /// timeline stays at rest, so the result depends on `progress` alone.
    pub fn scrub(&self, progress: f64) -> ScrubTimeline {
        let mut timeline = self.timeline.clone();
        timeline.seek(self.head_at(progress));
        timeline
    }
}

/// Current state of one tooltip, as reported in a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub name: String,
    pub head: f64,
    pub phase: TooltipPhase,
}
