//! Frame-range allocation for scenes.
//!
//! Scenes are laid end to end: scene `i` owns `[offset_i, offset_i + duration_i)` and
//! `offset_{i+1} = offset_i + duration_i`, so the ranges tile `[0, total)` exactly. All
//! per-scene choices (layout variant, transition, audio binding) are made here once and
//! never change afterwards.

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange, Fps},
        error::{ExplainerError, ExplainerResult},
    },
    outline::model::{Outline, RenderKind, ValidationMode},
    scenes::variant::SceneVariant,
    transition::kind::{TransitionKind, assign_transitions},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Narration audio bound to a scene's frame range.
///
/// The engine only reports where the cue starts; the host plays the source at its natural
/// length without stretching, truncating or looping it.
pub struct AudioCue {
    /// Opaque reference resolved by the host.
    pub source: String,
    /// Frame range of the owning scene.
    pub range: FrameRange,
    /// Start time in seconds.
    pub start_secs: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A scene's place on the timeline plus its derived choices.
pub struct SceneSlot {
    /// Position in `Outline::scenes`.
    pub position: usize,
    /// Index used for selector spreading and gutter side.
    pub scene_index: u32,
    pub kind: RenderKind,
    pub range: FrameRange,
    pub variant: SceneVariant,
    pub transition: TransitionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioCue>,
}

impl SceneSlot {
    pub fn duration(&self) -> u64 {
        self.range.len_frames()
    }
}

#[derive(Clone, Debug, serde::Serialize)]
/// Contiguous schedule of every scene in an outline.
pub struct Timeline {
    fps: Fps,
    total: u64,
    slots: Vec<SceneSlot>,
}

impl Timeline {
    /// Validate `outline` and lay out its scenes.
    ///
    /// The schedule always follows the scene durations; in lenient mode a mismatching
    /// `totalDurationInFrames` is reported and otherwise ignored.
    #[tracing::instrument(skip(outline), fields(scenes = outline.scenes.len()))]
    pub fn build(outline: &Outline, mode: ValidationMode, fps: Fps) -> ExplainerResult<Self> {
        outline.validate(mode)?;

        let transitions = assign_transitions(&outline.scenes);
        let mut slots = Vec::with_capacity(outline.scenes.len());
        let mut offset = 0u64;

        for (position, (scene, transition)) in outline.scenes.iter().zip(transitions).enumerate() {
            let scene_index = u32::try_from(position)
                .map_err(|_| ExplainerError::validation("too many scenes"))?;
            if scene.kind.is_unknown() {
                tracing::debug!(
                    position,
                    kind = ?scene.kind,
                    "unknown scene type, rendering as bullets"
                );
            }
            let kind = scene.kind.render_kind();
            let end = offset
                .checked_add(scene.duration_frames())
                .ok_or_else(|| ExplainerError::validation("scene durations overflow"))?;
            let range = FrameRange::new(FrameIndex(offset), FrameIndex(end))?;
            let audio = outline.audio_for(position).map(|source| AudioCue {
                source: source.to_owned(),
                range,
                start_secs: fps.frames_to_secs(offset),
            });

            slots.push(SceneSlot {
                position,
                scene_index,
                kind,
                range,
                variant: SceneVariant::select(kind, &scene.title, scene_index),
                transition,
                audio,
            });
            offset = end;
        }

        tracing::debug!(total_frames = offset, "timeline built");
        Ok(Self {
            fps,
            total: offset,
            slots,
        })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Total length in frames (sum of scene durations).
    pub fn total_frames(&self) -> u64 {
        self.total
    }

    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.total),
        }
    }

    pub fn slots(&self) -> &[SceneSlot] {
        &self.slots
    }

    /// The slot whose range contains `frame`, if any.
    pub fn slot_at(&self, frame: FrameIndex) -> Option<&SceneSlot> {
        let i = self.slots.partition_point(|s| s.range.end <= frame);
        self.slots.get(i).filter(|s| s.range.contains(frame))
    }

    /// Every audio cue in playback order.
    pub fn audio_cues(&self) -> impl Iterator<Item = &AudioCue> {
        self.slots.iter().filter_map(|s| s.audio.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timeline.rs"]
mod tests;
