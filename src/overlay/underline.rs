use crate::{
    animation::{
        ease::Ease,
        interp::{InterpOpts, interpolate_with},
    },
    foundation::{
        color::Rgba8,
        core::{Point, Rect},
    },
    render::tree::{ClipInset, Shape, VisualNode},
};

const DRAW_FRAMES: f64 = 14.0;

fn drawn(frame: u64, start: u64) -> f64 {
    interpolate_with(
        frame as f64,
        [start as f64, start as f64 + DRAW_FRAMES],
        [0.0, 1.0],
        InterpOpts::eased(Ease::OutCubic),
    )
}

/// Accent bar that wipes in from the left, starting at `start`.
pub fn underline(
    id: impl Into<String>,
    rect: Rect,
    frame: u64,
    start: u64,
    color: Rgba8,
) -> VisualNode {
    let p = drawn(frame, start);
    VisualNode::shape(
        id,
        rect,
        Shape::Rect {
            corner_radius: rect.height() / 2.0,
        },
        color,
    )
    .with_clip(ClipInset {
        right: (1.0 - p) * 100.0,
        ..ClipInset::default()
    })
    .passive()
}

/// Line that grows from `from` towards `to`.
pub fn connector(
    id: impl Into<String>,
    from: Point,
    to: Point,
    frame: u64,
    start: u64,
    color: Rgba8,
) -> VisualNode {
    let p = drawn(frame, start);
    let end = from.lerp(to, p);
    let width = 3.0;
    VisualNode::shape(
        id,
        Rect::from_points(from, end).inflate(width / 2.0, width / 2.0),
        Shape::Line {
            from,
            to: end,
            width,
        },
        color,
    )
    .passive()
}
