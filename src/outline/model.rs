use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{ExplainerError, ExplainerResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete explainer outline as produced by the upstream content generator.
///
/// The outline is read-only input: the engine borrows it and derives every frame from it
/// without mutation, so one outline can back any number of concurrent renders.
pub struct Outline {
    /// Video title.
    pub title: String,
    /// Scenes in playback order.
    pub scenes: Vec<Scene>,
    /// Declared total duration; must equal the sum of scene durations in strict mode.
    pub total_duration_in_frames: i64,
    /// Optional narration audio per scene, index-aligned with `scenes`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio_urls: Vec<Option<String>>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One timed segment of the video.
pub struct Scene {
    /// Scene type; unknown values render with the bullet-list renderer.
    #[serde(rename = "type")]
    pub kind: SceneKind,
    /// Scene heading.
    pub title: String,
    /// Ordered items: bullet points, comparison items or timeline steps.
    #[serde(default)]
    pub content: Vec<String>,
    /// Voice-over script. Never rendered; only used upstream to produce audio.
    #[serde(default)]
    pub narration: String,
    /// Optional illustration reference resolved by the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Scene length in frames (must be > 0).
    pub duration_in_frames: i64,
    /// Declared 0-based position within the outline. Position in `scenes` is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_index: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Declared scene type.
pub enum SceneKind {
    /// Big title card.
    Title,
    /// Bullet list.
    Bullets,
    /// Two-sided comparison.
    Comparison,
    /// Ordered steps.
    Timeline,
    /// Closing recap.
    Summary,
    /// Any other value; rendered as [`RenderKind::Bullets`].
    Unknown(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// The renderer that actually draws a scene.
pub enum RenderKind {
    /// Title renderer.
    Title,
    /// Bullet-list renderer.
    Bullets,
    /// Comparison renderer.
    Comparison,
    /// Timeline renderer.
    Timeline,
    /// Summary renderer.
    Summary,
}

impl RenderKind {
    /// Stable lowercase name, also used as the selector discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Bullets => "bullets",
            Self::Comparison => "comparison",
            Self::Timeline => "timeline",
            Self::Summary => "summary",
        }
    }
}

impl SceneKind {
    /// Renderer used for this kind; unknown kinds fall back to bullets.
    pub fn render_kind(&self) -> RenderKind {
        match self {
            Self::Title => RenderKind::Title,
            Self::Bullets | Self::Unknown(_) => RenderKind::Bullets,
            Self::Comparison => RenderKind::Comparison,
            Self::Timeline => RenderKind::Timeline,
            Self::Summary => RenderKind::Summary,
        }
    }

    /// `true` for values outside the known set.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<String> for SceneKind {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Self::Title,
            "bullets" => Self::Bullets,
            "comparison" => Self::Comparison,
            "timeline" => Self::Timeline,
            "summary" => Self::Summary,
            _ => Self::Unknown(s),
        }
    }
}

impl From<SceneKind> for String {
    fn from(k: SceneKind) -> Self {
        match k {
            SceneKind::Unknown(s) => s,
            other => other.render_kind().as_str().to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How strictly outline consistency checks are enforced.
pub enum ValidationMode {
    /// Reject any inconsistency.
    #[default]
    Strict,
    /// Reject structurally impossible input only; warn and recover from the rest.
    Lenient,
}

impl Scene {
    /// Duration as an unsigned frame count (0 for non-positive values).
    pub fn duration_frames(&self) -> u64 {
        u64::try_from(self.duration_in_frames).unwrap_or(0)
    }

    /// Image reference, treating blank strings as absent.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl Outline {
    /// Parse an outline from JSON text.
    pub fn from_json_str(s: &str) -> ExplainerResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse an outline JSON file.
    pub fn from_path(path: &Path) -> ExplainerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read outline '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Sum of scene durations in frames.
    pub fn scene_frames(&self) -> ExplainerResult<u64> {
        self.scenes
            .iter()
            .try_fold(0u64, |acc, s| acc.checked_add(s.duration_frames()))
            .ok_or_else(|| ExplainerError::validation("scene durations overflow"))
    }

    /// Audio reference bound to scene `position`, treating blank strings as absent.
    pub fn audio_for(&self, position: usize) -> Option<&str> {
        self.audio_urls
            .get(position)
            .and_then(|a| a.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Validate outline invariants.
    ///
    /// Zero scenes, a non-positive total or a non-positive scene duration are always fatal.
    /// In [`ValidationMode::Lenient`] the remaining consistency checks only log warnings.
    pub fn validate(&self, mode: ValidationMode) -> ExplainerResult<()> {
        if self.scenes.is_empty() {
            return Err(ExplainerError::validation("outline must contain at least one scene"));
        }
        if self.total_duration_in_frames <= 0 {
            return Err(ExplainerError::validation(format!(
                "totalDurationInFrames must be > 0 (got {})",
                self.total_duration_in_frames
            )));
        }

        for (i, scene) in self.scenes.iter().enumerate() {
            if scene.duration_in_frames <= 0 {
                return Err(ExplainerError::validation(format!(
                    "scene {i} ('{}') durationInFrames must be > 0 (got {})",
                    scene.title, scene.duration_in_frames
                )));
            }
            if let Some(declared) = scene.scene_index
                && declared as usize != i
            {
                soft_violation(
                    mode,
                    format!("scene {i} ('{}') declares sceneIndex {declared}", scene.title),
                )?;
            }
        }

        let sum = self.scene_frames()?;
        if sum != self.total_duration_in_frames as u64 {
            soft_violation(
                mode,
                format!(
                    "totalDurationInFrames is {} but scene durations sum to {sum}",
                    self.total_duration_in_frames
                ),
            )?;
        }

        if self.audio_urls.len() > self.scenes.len() {
            soft_violation(
                mode,
                format!(
                    "audioUrls has {} entries for {} scenes",
                    self.audio_urls.len(),
                    self.scenes.len()
                ),
            )?;
        }

        Ok(())
    }
}

fn soft_violation(mode: ValidationMode, msg: String) -> ExplainerResult<()> {
    match mode {
        ValidationMode::Strict => Err(ExplainerError::validation(msg)),
        ValidationMode::Lenient => {
            tracing::warn!("{msg}; continuing in lenient mode");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/model.rs"]
mod tests;
