use crate::{
    animation::ops::oscillate,
    foundation::core::{Rect, Vec2},
    overlay::{OverlayCtx, animate},
    render::{layout::Side, tree::VisualNode},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Left => "👈",
            Self::Right => "👉",
            Self::Up => "👆",
            Self::Down => "👇",
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// Direction from a gutter towards the content region.
    pub fn toward_content(side: Side) -> Self {
        match side {
            Side::Left => Self::Right,
            Side::Right => Self::Left,
        }
    }
}

/// Pointing hand glyph that nudges back and forth along `dir`.
pub fn pointing_hand(
    rect: Rect,
    dir: Direction,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let size = rect.width().min(rect.height()) * 0.8;
    let node = VisualNode::glyph("pointing_hand", rect, dir.glyph(), size);
    let nudge = dir.unit() * (3.0 + oscillate(frame as f64, 30.0, 3.0, 0.0));
    animate(node, frame, start, ctx.fps, nudge, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/pointer.rs"]
mod tests;
