use rayon::prelude::*;

use crate::{
    compose::config::CompositionConfig,
    foundation::{
        core::{Canvas, FrameIndex, FrameRange},
        error::{ExplainerError, ExplainerResult},
    },
    outline::model::{Outline, RenderKind},
    overlay::{OverlayCtx, decorate},
    render::{
        fingerprint::{FrameFingerprint, fingerprint_tree},
        layout::{Side, StageLayout},
        tree::{Shape, VisualNode},
    },
    scenes::{common::SceneCtx, render_scene, variant::SceneVariant},
    schedule::timeline::{SceneSlot, Timeline},
    transition::{
        envelope::{Phase, envelope, phase},
        kind::TransitionKind,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Which scene a frame belongs to and where it is within it.
pub struct ActiveScene {
    pub position: usize,
    pub scene_index: u32,
    pub kind: RenderKind,
    pub variant: SceneVariant,
    pub transition: TransitionKind,
    /// Frames since the scene's first frame.
    pub local_frame: u64,
    pub duration: u64,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Narration playing at a frame.
pub struct ActiveAudio {
    pub source: String,
    /// Frame at which the cue started.
    pub started_at: FrameIndex,
    /// Playback position within the source, in seconds.
    pub offset_secs: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Complete visual state of one frame.
pub struct FrameTree {
    pub frame: FrameIndex,
    pub canvas: Canvas,
    pub scene: ActiveScene,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<ActiveAudio>,
    pub root: VisualNode,
}

impl FrameTree {
    pub fn fingerprint(&self) -> FrameFingerprint {
        fingerprint_tree(&self.root)
    }
}

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Renders frames of one outline.
///
/// Construction validates the outline and fixes every per-scene choice; afterwards each
/// frame is a pure function of its index, so a `Composer` can be shared across threads.
pub struct Composer<'a> {
    outline: &'a Outline,
    config: CompositionConfig,
    timeline: Timeline,
    layout: StageLayout,
}

impl<'a> Composer<'a> {
    pub fn new(outline: &'a Outline, config: CompositionConfig) -> ExplainerResult<Self> {
        config.validate()?;
        let timeline = Timeline::build(outline, config.validation, config.fps)?;
        let layout = StageLayout::new(config.canvas);
        Ok(Self {
            outline,
            config,
            timeline,
            layout,
        })
    }

    pub fn outline(&self) -> &'a Outline {
        self.outline
    }

    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn layout(&self) -> &StageLayout {
        &self.layout
    }

    /// Visual state of `frame`.
    ///
    /// Frames outside `[0, total)` are an evaluation error.
    #[tracing::instrument(level = "debug", skip_all, fields(frame = frame.0))]
    pub fn render_frame(&self, frame: FrameIndex) -> ExplainerResult<FrameTree> {
        let slot = self.timeline.slot_at(frame).ok_or_else(|| {
            ExplainerError::evaluation(format!(
                "frame {} is outside the timeline [0, {})",
                frame.0,
                self.timeline.total_frames()
            ))
        })?;
        let scene = self.outline.scenes.get(slot.position).ok_or_else(|| {
            ExplainerError::evaluation(format!("scene {} missing from outline", slot.position))
        })?;
        let local = frame.0 - slot.range.start.0;
        let duration = slot.duration();
        let palette = &self.config.palette;

        let scene_ctx = SceneCtx {
            fps: self.config.fps,
            duration,
            region: self.layout.content,
            palette,
            footer: &self.config.footer,
        };
        let content = render_scene(scene, slot.variant, local, &scene_ctx);

        let side = Side::for_scene(slot.scene_index);
        let overlay_ctx = OverlayCtx {
            fps: self.config.fps,
            palette,
            area: self.layout.gutter(side),
            side,
        };
        let overlay = decorate(slot.kind, &scene.title, local, &overlay_ctx);

        let canvas = self.layout.canvas;
        let env = envelope(
            slot.transition,
            local,
            duration,
            self.config.transition,
            canvas.center().to_vec2(),
        );
        let stage = VisualNode::group("stage", canvas)
            .with_opacity(env.opacity)
            .with_transform(env.transform)
            .with_clip(env.clip)
            .with_children([content, overlay]);
        let background = VisualNode::shape(
            "background",
            canvas,
            Shape::Rect { corner_radius: 0.0 },
            palette.background,
        )
        .with_z(-10);
        let root = VisualNode::group("frame", canvas).with_children([background, stage]);

        Ok(FrameTree {
            frame,
            canvas: self.config.canvas,
            scene: self.active_scene(slot, local),
            audio: slot.audio.as_ref().map(|cue| ActiveAudio {
                source: cue.source.clone(),
                started_at: cue.range.start,
                offset_secs: self.config.fps.frames_to_secs(local),
            }),
            root,
        })
    }

    fn active_scene(&self, slot: &SceneSlot, local: u64) -> ActiveScene {
        ActiveScene {
            position: slot.position,
            scene_index: slot.scene_index,
            kind: slot.kind,
            variant: slot.variant,
            transition: slot.transition,
            local_frame: local,
            duration: slot.duration(),
            phase: phase(local, slot.duration(), self.config.transition),
        }
    }

    /// Render a frame range (inclusive start, exclusive end), in frame order.
    ///
    /// With `threading.parallel` the frames of each chunk are fanned out over a dedicated
    /// rayon pool; the output is identical to the sequential path.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = range.start.0, end = range.end.0, parallel = threading.parallel)
    )]
    pub fn render_frames(
        &self,
        range: FrameRange,
        threading: &RenderThreading,
    ) -> ExplainerResult<Vec<FrameTree>> {
        self.render_chunked(range, threading, |tree| tree)
    }

    /// Fingerprints of every frame in `range`, in order.
    ///
    /// Each tree is dropped as soon as it is hashed, so memory stays flat in the range length.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = range.start.0, end = range.end.0, parallel = threading.parallel)
    )]
    pub fn fingerprints(
        &self,
        range: FrameRange,
        threading: &RenderThreading,
    ) -> ExplainerResult<Vec<FrameFingerprint>> {
        self.render_chunked(range, threading, |tree| tree.fingerprint())
    }

    fn render_chunked<T, F>(
        &self,
        range: FrameRange,
        threading: &RenderThreading,
        f: F,
    ) -> ExplainerResult<Vec<T>>
    where
        T: Send,
        F: Fn(FrameTree) -> T + Sync,
    {
        if range.is_empty() {
            return Err(ExplainerError::validation("render range must be non-empty"));
        }
        if range.end.0 > self.timeline.total_frames() {
            return Err(ExplainerError::validation(
                "render range must be within the timeline",
            ));
        }

        if !threading.parallel {
            return (range.start.0..range.end.0)
                .map(|frame| self.render_frame(FrameIndex(frame)).map(&f))
                .collect();
        }

        let pool = build_thread_pool(threading.threads)?;
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let mut items = pool.install(|| {
                (chunk_start..chunk_end)
                    .into_par_iter()
                    .map(|frame| self.render_frame(FrameIndex(frame)).map(&f))
                    .collect::<ExplainerResult<Vec<_>>>()
            })?;
            out.append(&mut items);
            chunk_start = chunk_end;
        }
        Ok(out)
    }
}

/// Render one frame of `outline` with the default configuration.
pub fn render_frame(outline: &Outline, frame: FrameIndex) -> ExplainerResult<FrameTree> {
    Composer::new(outline, CompositionConfig::default())?.render_frame(frame)
}

fn build_thread_pool(threads: Option<usize>) -> ExplainerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ExplainerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ExplainerError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
