use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{ExplainerError, ExplainerResult},
    },
    outline::model::ValidationMode,
    render::theme::Palette,
    scenes::common::FooterTiming,
    transition::envelope::TransitionTiming,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything about a render that is not part of the outline itself.
///
/// Every field has a default, so `{}` is a valid configuration: 30 fps on a 960x540
/// canvas, 14/10-frame transitions, anchored footer, dark palette, strict validation.
pub struct CompositionConfig {
    pub fps: Fps,
    pub canvas: Canvas,
    pub transition: TransitionTiming,
    pub footer: FooterTiming,
    pub palette: Palette,
    pub validation: ValidationMode,
}

impl CompositionConfig {
    pub fn from_json_str(s: &str) -> ExplainerResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ExplainerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ExplainerResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ExplainerError::validation("canvas width/height must be > 0"));
        }
        if self.footer.end < self.footer.start {
            return Err(ExplainerError::validation(format!(
                "footer window end ({}) must be >= start ({})",
                self.footer.end, self.footer.start
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/config.rs"]
mod tests;
