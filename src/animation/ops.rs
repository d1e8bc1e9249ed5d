//! Small timing helpers shared by scenes and decorations.

use std::f64::consts::TAU;

/// First frame at which staggered item `index` starts animating.
pub fn stagger_start(base: u64, step: u64, index: usize) -> u64 {
    base.saturating_add(step.saturating_mul(index as u64))
}

/// Continuous sine oscillation with the given period in frames.
pub fn oscillate(frame: f64, period_frames: f64, amplitude: f64, phase: f64) -> f64 {
    if period_frames <= 0.0 || !period_frames.is_finite() {
        return 0.0;
    }
    amplitude * (TAU * frame / period_frames + phase).sin()
}

/// `true` during the last `length` frames of every `period`-frame cycle.
pub fn blink(frame: u64, period: u64, length: u64) -> bool {
    if period == 0 || length == 0 {
        return false;
    }
    frame % period >= period.saturating_sub(length)
}

/// Twinkle brightness in `[0.3, 1.0]`.
pub fn twinkle(frame: f64, period_frames: f64, phase: f64) -> f64 {
    0.65 + oscillate(frame, period_frames, 0.35, phase)
}

/// Bounce height that is always `>= 0` (absolute sine), used for hopping emoji.
pub fn hop(frame: f64, period_frames: f64, height: f64) -> f64 {
    oscillate(frame, period_frames * 2.0, height, 0.0).abs()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
