//! Decorative overlay layer.
//!
//! Ornaments live in the side gutter chosen by [`Side::for_scene`], never in the content
//! region, and are marked pointer-transparent. They never influence scene timing: every
//! ornament is a function of the local frame only. Choices that should vary between scenes
//! (expression, emoji, phrase) go through the selector keyed on the scene title.

pub(crate) mod bubble;
pub(crate) mod emoji;
pub(crate) mod mascot;
pub(crate) mod pointer;
pub(crate) mod sparkles;
pub(crate) mod underline;

use crate::{
    animation::{
        interp::interpolate,
        spring::{SpringConfig, spring},
    },
    foundation::core::{Fps, Point, Rect, Transform2D, Vec2},
    outline::model::RenderKind,
    overlay::{
        bubble::{speech_bubble, thought_cloud},
        emoji::{bouncing_emoji, pick_emoji},
        mascot::{Expression, mascot},
        pointer::{Direction, pointing_hand},
        sparkles::sparkles,
        underline::connector,
    },
    render::{layout::Side, theme::Palette, tree::VisualNode},
    select::hash::{key, pick},
};

const MASCOT_START: u64 = 6;
const BUBBLE_START: u64 = 16;
const EMOJI_START: u64 = 20;
const HAND_START: u64 = 24;
const SPARKLE_START: u64 = 10;
const FADE_FRAMES: f64 = 6.0;

#[derive(Clone, Copy)]
pub struct OverlayCtx<'a> {
    pub fps: Fps,
    pub palette: &'a Palette,
    /// Gutter the ornaments must stay inside.
    pub area: Rect,
    pub side: Side,
}

/// Spring entrance (scale and fade from `start`) combined with an idle offset and tilt.
pub(crate) fn animate(
    node: VisualNode,
    frame: u64,
    start: u64,
    fps: Fps,
    idle: Vec2,
    tilt_deg: f64,
) -> VisualNode {
    let shown = frame as f64 - start as f64;
    let s = spring(shown, fps, SpringConfig::BOUNCY);
    let opacity = interpolate(shown, [0.0, FADE_FRAMES], [0.0, 1.0]);
    let t = Transform2D {
        translate: idle,
        rotation_rad: tilt_deg.to_radians(),
        scale: Vec2::new(s, s),
        anchor: node.rect.center().to_vec2(),
    };
    node.with_transform(t).with_opacity(opacity)
}

/// Vertical bands of the gutter, top to bottom.
struct Slots {
    bubble: Rect,
    mascot: Rect,
    hand: Rect,
    emoji: Rect,
    bottom: Rect,
}

impl Slots {
    fn new(area: Rect) -> Self {
        let a = area.inflate(-6.0, -4.0);
        let band = |f0: f64, f1: f64| {
            Rect::new(a.x0, a.y0 + a.height() * f0, a.x1, a.y0 + a.height() * f1)
        };
        let square = |r: Rect| {
            let d = r.width().min(r.height());
            Rect::from_center_size(r.center(), (d, d))
        };
        Self {
            bubble: band(0.0, 0.2),
            mascot: square(band(0.23, 0.46)),
            hand: square(band(0.49, 0.61)),
            emoji: square(band(0.64, 0.76)),
            bottom: band(0.79, 1.0),
        }
    }
}

fn phrase(kind: RenderKind, title: &str) -> &'static str {
    let phrases: &[&str] = match kind {
        RenderKind::Title => &["Let's learn!", "Ready?", "Here we go!"],
        RenderKind::Bullets => &["Key points!", "Take notes!", "Remember these"],
        RenderKind::Comparison => &["Which wins?", "Hmm...", "Let's compare"],
        RenderKind::Timeline => &["Step by step", "In order!", "Follow along"],
        RenderKind::Summary => &["Great job!", "You got it!", "Recap time"],
    };
    pick(&key(title, "phrase"), phrases).copied().unwrap_or("")
}

/// Ornaments for one scene at `frame` frames into it.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn decorate(kind: RenderKind, title: &str, frame: u64, ctx: &OverlayCtx<'_>) -> VisualNode {
    let slots = Slots::new(ctx.area);
    let expression = Expression::for_scene(kind, title);
    let text = phrase(kind, title);

    let mut out = Vec::with_capacity(6);
    out.push(if kind == RenderKind::Comparison || expression == Expression::Thinking {
        thought_cloud(slots.bubble, text, frame, BUBBLE_START, ctx)
    } else {
        speech_bubble(slots.bubble, text, frame, BUBBLE_START, ctx)
    });
    out.push(mascot(expression, slots.mascot, frame, MASCOT_START, ctx));

    match kind {
        RenderKind::Bullets | RenderKind::Comparison => {
            let dir = Direction::toward_content(ctx.side);
            out.push(pointing_hand(slots.hand, dir, frame, HAND_START, ctx));
        }
        RenderKind::Timeline => {
            out.push(pointing_hand(slots.hand, Direction::Down, frame, HAND_START, ctx));
            let x = slots.bottom.center().x;
            out.push(connector(
                "connector",
                Point::new(x, slots.bottom.y0 + 4.0),
                Point::new(x, slots.bottom.y1 - 4.0),
                frame,
                HAND_START + 6,
                ctx.palette.accent,
            ));
        }
        RenderKind::Title | RenderKind::Summary => {
            out.push(sparkles(slots.bottom, 4, title, frame, SPARKLE_START, ctx));
        }
    }
    out.push(bouncing_emoji(slots.emoji, pick_emoji(kind, title), frame, EMOJI_START, ctx));

    VisualNode::group("overlay", ctx.area)
        .with_z(10)
        .with_children(out)
        .passive()
}

/// Runs `f` with a context over the default left or right gutter.
#[cfg(test)]
pub(crate) fn with_test_overlay<R>(side: Side, f: impl FnOnce(&OverlayCtx<'_>) -> R) -> R {
    let palette = Palette::default();
    let area = match side {
        Side::Left => Rect::new(0.0, 38.0, 130.0, 508.0),
        Side::Right => Rect::new(830.0, 38.0, 960.0, 508.0),
    };
    let ctx = OverlayCtx {
        fps: Fps::default(),
        palette: &palette,
        area,
        side,
    };
    f(&ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/mod.rs"]
mod tests;
