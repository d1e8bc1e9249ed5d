//! Explainer is a deterministic composition engine for multi-scene explainer videos.
//!
//! An [`Outline`] (title, scenes, per-scene durations and optional narration audio) is
//! scheduled onto a frame [`Timeline`]; every frame of it is then a pure function of the
//! frame index:
//!
//! - Load and validate an [`Outline`]
//! - Create a [`Composer`] with a [`CompositionConfig`]
//! - Render single frames into a [`FrameTree`], or a range with [`RenderThreading`]
//!
//! Per-scene choices (layout variant, transition style, mascot expression, emoji) come
//! from a content-derived string hash, so the same outline always produces the same video.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compose;
pub(crate) mod outline;
pub(crate) mod overlay;
pub(crate) mod render;
pub(crate) mod scenes;
pub(crate) mod schedule;
pub(crate) mod select;
pub(crate) mod transition;

/// End-to-end walkthrough of the engine.
pub mod guide;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Transform2D, Vec2,
};
pub use crate::foundation::error::{ExplainerError, ExplainerResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{Extrapolate, InterpOpts, interpolate, interpolate_with};
pub use crate::animation::ops::{blink, hop, oscillate, stagger_start, twinkle};
pub use crate::animation::spring::{SpringConfig, delayed_spring, spring};
pub use crate::compose::composer::{
    ActiveAudio, ActiveScene, Composer, FrameTree, RenderThreading, render_frame,
};
pub use crate::compose::config::CompositionConfig;
pub use crate::outline::dsl::{OutlineBuilder, SceneBuilder};
pub use crate::outline::model::{Outline, RenderKind, Scene, SceneKind, ValidationMode};
pub use crate::overlay::{mascot::Expression, pointer::Direction};
pub use crate::render::fingerprint::{FrameFingerprint, fingerprint_tree};
pub use crate::render::layout::{Side, StageLayout};
pub use crate::render::theme::Palette;
pub use crate::render::tree::{
    ClipInset, NodeKind, PointerEvents, Shape, Stroke, TextAlign, TextRole, TextStyle,
    VisualNode,
};
pub use crate::scenes::common::{FooterMode, FooterTiming};
pub use crate::scenes::variant::{
    BulletsVariant, ComparisonVariant, SceneVariant, SummaryVariant, TimelineVariant,
    TitleVariant,
};
pub use crate::schedule::timeline::{AudioCue, SceneSlot, Timeline};
pub use crate::select::hash::{hash_text, pick, spread_index};
pub use crate::transition::envelope::{Envelope, Phase, TransitionTiming, envelope, phase};
pub use crate::transition::kind::{TransitionKind, assign_transitions};
