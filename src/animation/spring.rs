use crate::foundation::core::Fps;
use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Physical parameters of a damped spring driven by a unit step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
    /// Clamp the response to `[0, 1]` instead of letting it overshoot.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Over-damped; settles without overshoot.
    pub const GENTLE: Self = Self {
        damping: 26.0,
        stiffness: 120.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Slightly under-damped entrance used for cards and list items.
    pub const SNAPPY: Self = Self {
        damping: 14.0,
        stiffness: 160.0,
        mass: 0.8,
        overshoot_clamping: false,
    };

    /// Visibly bouncy; used for badges, check marks and decorations.
    pub const BOUNCY: Self = Self {
        damping: 8.0,
        stiffness: 180.0,
        mass: 0.6,
        overshoot_clamping: false,
    };

    pub fn clamped(self) -> Self {
        Self {
            overshoot_clamping: true,
            ..self
        }
    }

    pub fn validate(&self) -> ExplainerResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(ExplainerError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ExplainerError::animation("spring mass must be finite and > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ExplainerError::animation(
                "spring damping must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Spring value at `frame` frames after the trigger, sampled at continuous time `frame / fps`.
///
/// Returns 0 for `frame <= 0` and converges to 1. Under-damped configs overshoot unless
/// `overshoot_clamping` is set.
pub fn spring(frame: f64, fps: Fps, cfg: SpringConfig) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    let t = frame / fps.as_f64();
    let v = step_response(t, cfg.stiffness, cfg.damping, cfg.mass);
    if cfg.overshoot_clamping {
        v.clamp(0.0, 1.0)
    } else {
        v
    }
}

/// [`spring`] triggered `delay` frames late.
pub fn delayed_spring(frame: f64, delay: f64, fps: Fps, cfg: SpringConfig) -> f64 {
    spring(frame - delay, fps, cfg)
}

fn step_response(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 || !w0.is_finite() {
        // No restoring force: a one second linear ramp.
        return t.min(1.0);
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * ((wd * t).cos() + k * (wd * t).sin())
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
