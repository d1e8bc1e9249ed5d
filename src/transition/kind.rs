use crate::{
    foundation::error::{ExplainerError, ExplainerResult},
    outline::model::Scene,
    select::hash::{hash_text, key},
};

/// Enter/exit envelope style wrapping a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Fade with a vertical offset.
    FadeSlide,
    /// Fade with a subtle scale.
    Zoom,
    /// Horizontal slide.
    SlideLeft,
    /// Vertical slide.
    SlideUp,
    /// Animated clip inset.
    Wipe,
}

impl TransitionKind {
    /// Every transition in selector order.
    pub const ALL: [Self; 5] = [
        Self::FadeSlide,
        Self::Zoom,
        Self::SlideLeft,
        Self::SlideUp,
        Self::Wipe,
    ];

    /// Transition of the first scene, which has no predecessor to diverge from.
    pub const FIRST: Self = Self::Zoom;

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeSlide => "fade_slide",
            Self::Zoom => "zoom",
            Self::SlideLeft => "slide_left",
            Self::SlideUp => "slide_up",
            Self::Wipe => "wipe",
        }
    }

    fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }
}

impl std::str::FromStr for TransitionKind {
    type Err = ExplainerError;

    fn from_str(s: &str) -> ExplainerResult<Self> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        match norm.as_str() {
            "fade_slide" | "fadeslide" => Ok(Self::FadeSlide),
            "zoom" => Ok(Self::Zoom),
            "slide_left" | "slideleft" => Ok(Self::SlideLeft),
            "slide_up" | "slideup" => Ok(Self::SlideUp),
            "wipe" => Ok(Self::Wipe),
            "" => Err(ExplainerError::validation("transition kind must be non-empty")),
            other => Err(ExplainerError::validation(format!(
                "unknown transition kind '{other}'"
            ))),
        }
    }
}

/// Picks one transition per scene so that no two consecutive scenes share one.
///
/// Scene `i > 0` hashes `title ⊕ i`; when that equals the predecessor's transition the
/// next kind in [`TransitionKind::ALL`] is used instead.
pub fn assign_transitions(scenes: &[Scene]) -> Vec<TransitionKind> {
    let n = TransitionKind::ALL.len() as u32;
    let mut out: Vec<TransitionKind> = Vec::with_capacity(scenes.len());
    for (i, scene) in scenes.iter().enumerate() {
        let kind = match out.last() {
            None => TransitionKind::FIRST,
            Some(&prev) => {
                let hashed = hash_text(&key(&scene.title, i), n) as usize;
                if hashed == prev.index() {
                    TransitionKind::from_index(hashed + 1)
                } else {
                    TransitionKind::from_index(hashed)
                }
            }
        };
        out.push(kind);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transition/kind.rs"]
mod tests;
