//! # Explainer guide
//!
//! A walkthrough of how an outline becomes frames. For CLI usage see the repository
//! `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Outline`](crate::Outline): title, scenes and optional per-scene narration audio
//! - [`Timeline`](crate::Timeline): contiguous `[start, end)` frame range per scene, plus the
//!   per-scene choices (layout variant, transition) fixed at build time
//! - [`Composer`](crate::Composer): borrows an outline and renders any frame of it
//! - [`FrameTree`](crate::FrameTree): the visual state of one frame, a tree of
//!   [`VisualNode`](crate::VisualNode)s with rect, opacity, transform, z-order and clip
//!
//! A frame is produced in four steps:
//!
//! 1. Find the owning scene: [`Timeline::slot_at`](crate::Timeline::slot_at)
//! 2. Compute the transition envelope from the scene-local frame
//! 3. Render the scene layout into the content region
//! 4. Render the decorative overlay into the side gutter
//!
//! Every step is a pure function of the frame index. There is no per-frame state, so
//! frames can be rendered out of order or on several threads:
//!
//! ```no_run
//! use explainer::{Composer, CompositionConfig, FrameIndex, Outline, RenderThreading};
//!
//! let outline = Outline::from_path(std::path::Path::new("outline.json"))?;
//! let composer = Composer::new(&outline, CompositionConfig::default())?;
//! let tree = composer.render_frame(FrameIndex(65))?;
//! println!("{} -> {}", tree.scene.variant, tree.fingerprint());
//!
//! let all = composer.render_frames(
//!     composer.timeline().range(),
//!     &RenderThreading { parallel: true, ..RenderThreading::default() },
//! )?;
//! assert_eq!(all.len() as u64, composer.timeline().total_frames());
//! # Ok::<(), explainer::ExplainerError>(())
//! ```
//!
//! ---
//!
//! ## Deterministic choices
//!
//! Nothing is random. Where a scene needs "variety" (which of the 3-4 layouts to use,
//! which transition, which mascot expression or emoji) the choice comes from
//! [`hash_text`](crate::hash_text), a 31-polynomial string hash over UTF-16 code units:
//!
//! - layout: `(hash(title + kind) + sceneIndex) mod N` ([`spread_index`](crate::spread_index));
//!   adding the scene index spreads neighbours with similar titles over different layouts
//! - transition: `hash(title + sceneIndex) mod 5`, bumped by one when it would repeat the
//!   previous scene's transition; the first scene always uses `zoom`
//!
//! Renaming a scene may change its own choices and the transition of the scene after it,
//! and nothing else.
//!
//! ---
//!
//! ## Timing inside a scene
//!
//! All animation is expressed against the scene-local frame:
//!
//! - items reveal with a stagger (`12 + 9 * i` frames for bullet and summary items) using a
//!   short fade plus a spring ([`SpringConfig::SNAPPY`](crate::SpringConfig::SNAPPY))
//! - the scene envelope fades and moves in over `enter_frames` and out over the last
//!   `exit_frames` ([`TransitionTiming`](crate::TransitionTiming))
//! - the summary footer fades in over [`FooterTiming`](crate::FooterTiming); with
//!   [`FooterMode::Anchored`](crate::FooterMode::Anchored) the window slides to the end
//!   of scenes too short for the fixed window
//!
//! ---
//!
//! ## Stage layout
//!
//! The canvas is split into a central content region and two side gutters
//! ([`StageLayout`](crate::StageLayout)). Scene layouts only draw inside the content
//! region; overlays only draw inside one gutter, left for even scene indices and right for
//! odd ones. Overlay nodes never take pointer events.
//!
//! ---
//!
//! ## Validation
//!
//! [`ValidationMode::Strict`](crate::ValidationMode::Strict) rejects an outline whose
//! `totalDurationInFrames` differs from the sum of scene durations, or with more audio
//! entries than scenes. [`ValidationMode::Lenient`](crate::ValidationMode::Lenient) logs a
//! warning and schedules from the scene durations instead. An empty outline or a
//! non-positive duration is always an error.
