use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    /// Full turns across the whole pinned range.
    pub turns: f32,
    /// Deltas at or below this magnitude are not forwarded to the renderer.
    pub epsilon: f32,
}

/// Closed-form spin angle (radians) for raw progress. Not windowed.
#[inline]
pub fn spin_angle(progress: f64, config: &RotationConfig) -> f32 {
    config.turns * TAU * progress as f32
}

/// Angle most recently forwarded to the renderer.
///
/// Passed into [`RotationState::step`] and returned updated, so the delta
/// computation carries no hidden state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub applied: f32,
}

impl RotationState {
    /// Returns the new state and the delta to apply, if any.
    ///
    /// Forwarded deltas always move `applied` to the closed-form angle, so
    /// their sum telescopes to `spin_angle(progress)` regardless of how many
    /// updates were delivered.
    pub fn step(self, progress: f64, config: &RotationConfig) -> (RotationState, Option<f32>) {
        let target = spin_angle(progress, config);
        let delta = target - self.applied;
        if delta.abs() <= config.epsilon {
            return (self, None);
        }
        (RotationState { applied: target }, Some(delta))
    }
}
