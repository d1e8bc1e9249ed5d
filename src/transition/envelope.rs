use crate::{
    animation::{
        ease::Ease,
        interp::{InterpOpts, interpolate, interpolate_with},
    },
    foundation::core::{Transform2D, Vec2},
    render::tree::ClipInset,
    transition::kind::TransitionKind,
};

const FADE_SLIDE_IN_PX: f64 = 30.0;
const FADE_SLIDE_OUT_PX: f64 = 15.0;
const ZOOM_IN_FROM: f64 = 0.94;
const ZOOM_OUT_TO: f64 = 1.04;
const SLIDE_LEFT_IN_PX: f64 = 80.0;
const SLIDE_LEFT_OUT_PX: f64 = 60.0;
const SLIDE_UP_IN_PX: f64 = 60.0;
const SLIDE_UP_OUT_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Lengths of the enter and exit windows of every scene.
pub struct TransitionTiming {
    pub enter_frames: u64,
    pub exit_frames: u64,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            enter_frames: 14,
            exit_frames: 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Where a scene is within its own envelope.
pub enum Phase {
    /// `[0, enter)`.
    Entering,
    /// Between the two windows.
    Steady,
    /// `[duration - exit, duration)`.
    Exiting,
}

/// Phase of `local` within a scene of `duration` frames. Entering wins when the windows overlap.
pub fn phase(local: u64, duration: u64, timing: TransitionTiming) -> Phase {
    if local < timing.enter_frames {
        Phase::Entering
    } else if local >= duration.saturating_sub(timing.exit_frames) {
        Phase::Exiting
    } else {
        Phase::Steady
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Opacity, transform and clip applied to a whole scene at one frame.
pub struct Envelope {
    pub opacity: f64,
    pub transform: Transform2D,
    pub clip: ClipInset,
}

/// Envelope of a scene of `duration` frames at scene-local frame `local`.
///
/// `pivot` is the scale origin for [`TransitionKind::Zoom`] (normally the stage center).
pub fn envelope(
    kind: TransitionKind,
    local: u64,
    duration: u64,
    timing: TransitionTiming,
    pivot: Vec2,
) -> Envelope {
    let f = local as f64;
    let dur = duration as f64;
    let enter = timing.enter_frames as f64;
    let exit_start = dur - timing.exit_frames as f64;

    let fade_in = interpolate(f, [0.0, enter], [0.0, 1.0]);
    let fade_out = interpolate(f, [exit_start, dur], [1.0, 0.0]);
    let opacity = fade_in.min(fade_out);

    let p_in = interpolate_with(f, [0.0, enter], [0.0, 1.0], InterpOpts::eased(Ease::OutCubic));
    let p_out = interpolate_with(
        f,
        [exit_start, dur],
        [0.0, 1.0],
        InterpOpts::eased(Ease::InCubic),
    );

    let mut transform = Transform2D::default();
    let mut clip = ClipInset::default();
    match kind {
        TransitionKind::FadeSlide => {
            transform.translate = Vec2::new(
                0.0,
                (1.0 - p_in) * FADE_SLIDE_IN_PX - p_out * FADE_SLIDE_OUT_PX,
            );
        }
        TransitionKind::Zoom => {
            let s = ZOOM_IN_FROM + (1.0 - ZOOM_IN_FROM) * p_in + (ZOOM_OUT_TO - 1.0) * p_out;
            transform = Transform2D::uniform_scale(s, pivot);
        }
        TransitionKind::SlideLeft => {
            transform.translate = Vec2::new(
                (1.0 - p_in) * SLIDE_LEFT_IN_PX - p_out * SLIDE_LEFT_OUT_PX,
                0.0,
            );
        }
        TransitionKind::SlideUp => {
            transform.translate = Vec2::new(
                0.0,
                (1.0 - p_in) * SLIDE_UP_IN_PX - p_out * SLIDE_UP_OUT_PX,
            );
        }
        TransitionKind::Wipe => {
            clip.right = (1.0 - p_in) * 100.0;
            clip.left = p_out * 100.0;
        }
    }

    Envelope {
        opacity,
        transform,
        clip,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/envelope.rs"]
mod tests;
