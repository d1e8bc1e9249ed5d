use crate::animation::ease::Ease;

/// Behavior of [`interpolate_with`] outside its input window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the linear mapping past the boundary.
    Extend,
}

/// Options for [`interpolate_with`]. The default is linear and clamped on both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpOpts {
    pub ease: Ease,
    pub left: Extrapolate,
    pub right: Extrapolate,
}

impl InterpOpts {
    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    pub fn extend() -> Self {
        Self {
            ease: Ease::Linear,
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
        }
    }
}

/// Linear map of `frame` from `[f0, f1]` to `[v0, v1]`, clamped on both sides.
pub fn interpolate(frame: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    interpolate_with(frame, input, output, InterpOpts::default())
}

/// [`interpolate`] with easing and per-side extrapolation.
///
/// Clamped sides return the output endpoint exactly. A degenerate window (`f0 >= f1`)
/// behaves as a step at `f1`. Easing only shapes the in-window part; extended sides
/// continue linearly.
pub fn interpolate_with(frame: f64, input: [f64; 2], output: [f64; 2], opts: InterpOpts) -> f64 {
    let [f0, f1] = input;
    let [v0, v1] = output;

    if frame.is_nan() {
        return v0;
    }
    if f0 >= f1 {
        return if frame < f1 { v0 } else { v1 };
    }
    if frame <= f0 && opts.left == Extrapolate::Clamp {
        return v0;
    }
    if frame >= f1 && opts.right == Extrapolate::Clamp {
        return v1;
    }

    let t = (frame - f0) / (f1 - f0);
    let shaped = if (0.0..=1.0).contains(&t) {
        opts.ease.apply(t)
    } else {
        t
    };
    v0 + (v1 - v0) * shaped
}

/// Normalized `[0, 1]` progress through the window `[start, start + len]`.
pub fn progress(frame: f64, start: f64, len: f64) -> f64 {
    interpolate(frame, [start, start + len], [0.0, 1.0])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
