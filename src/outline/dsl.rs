use crate::{
    foundation::error::{ExplainerError, ExplainerResult},
    outline::model::{Outline, Scene, SceneKind, ValidationMode},
};

/// Builder for [`Outline`](crate::Outline).
///
/// Scene indices and the total duration are filled in from the appended scenes, so a built
/// outline always passes strict validation unless a scene duration is invalid.
pub struct OutlineBuilder {
    title: String,
    scenes: Vec<Scene>,
    audio_urls: Vec<Option<String>>,
}

impl OutlineBuilder {
    /// Create a builder for a new outline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            scenes: Vec::new(),
            audio_urls: Vec::new(),
        }
    }

    /// Append a scene without narration audio.
    pub fn scene(self, scene: SceneBuilder) -> Self {
        self.scene_with_audio(scene, None::<String>)
    }

    /// Append a scene and bind an optional audio reference to it.
    pub fn scene_with_audio(
        mut self,
        scene: SceneBuilder,
        audio: Option<impl Into<String>>,
    ) -> Self {
        let index = u32::try_from(self.scenes.len()).unwrap_or(u32::MAX);
        self.scenes.push(scene.into_scene(index));
        self.audio_urls.push(audio.map(Into::into));
        self
    }

    /// Build and strictly validate the final [`Outline`](crate::Outline).
    pub fn build(self) -> ExplainerResult<Outline> {
        let total = self
            .scenes
            .iter()
            .try_fold(0i64, |acc, s| acc.checked_add(s.duration_in_frames))
            .ok_or_else(|| ExplainerError::validation("scene durations overflow"))?;
        let audio_urls = if self.audio_urls.iter().all(Option::is_none) {
            Vec::new()
        } else {
            self.audio_urls
        };
        let outline = Outline {
            title: self.title,
            scenes: self.scenes,
            total_duration_in_frames: total,
            audio_urls,
        };
        outline.validate(ValidationMode::Strict)?;
        Ok(outline)
    }
}

/// Builder for one [`Scene`](crate::Scene).
pub struct SceneBuilder {
    kind: SceneKind,
    title: String,
    content: Vec<String>,
    narration: String,
    image_url: Option<String>,
    duration_in_frames: i64,
}

impl SceneBuilder {
    /// Create a scene of `kind` lasting `duration_in_frames`.
    pub fn new(kind: SceneKind, title: impl Into<String>, duration_in_frames: i64) -> Self {
        Self {
            kind,
            title: title.into(),
            content: Vec::new(),
            narration: String::new(),
            image_url: None,
            duration_in_frames,
        }
    }

    /// Replace the content items.
    pub fn content<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the narration script.
    pub fn narration(mut self, text: impl Into<String>) -> Self {
        self.narration = text.into();
        self
    }

    /// Attach an image reference.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    fn into_scene(self, index: u32) -> Scene {
        Scene {
            kind: self.kind,
            title: self.title,
            content: self.content,
            narration: self.narration,
            image_url: self.image_url,
            duration_in_frames: self.duration_in_frames,
            scene_index: Some(index),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/dsl.rs"]
mod tests;
