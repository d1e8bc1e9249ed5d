use crate::{
    animation::ops::oscillate,
    foundation::core::{Point, Rect, Vec2},
    overlay::{OverlayCtx, animate},
    render::tree::{Shape, TextAlign, TextRole, VisualNode},
};

const TAIL_H: f64 = 12.0;

/// Rounded speech bubble with a tail pointing down at the mascot.
pub fn speech_bubble(
    rect: Rect,
    text: &str,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let body = Rect::new(rect.x0, rect.y0, rect.x1, rect.y1 - TAIL_H);
    let cx = body.center().x;
    let tail = vec![
        Point::new(cx - 9.0, body.y1 - 1.0),
        Point::new(cx + 9.0, body.y1 - 1.0),
        Point::new(cx, rect.y1),
    ];
    let fill = ctx.palette.text;
    let node = VisualNode::group("speech_bubble", rect).with_children([
        VisualNode::shape(
            "speech_bubble/body",
            body,
            Shape::Rect { corner_radius: 14.0 },
            fill,
        ),
        VisualNode::shape(
            "speech_bubble/tail",
            Rect::new(cx - 9.0, body.y1 - 1.0, cx + 9.0, rect.y1),
            Shape::Polygon { points: tail },
            fill,
        ),
        VisualNode::text(
            "speech_bubble/text",
            body.inflate(-8.0, -6.0),
            text,
            ctx.palette.text(TextRole::Caption, TextAlign::Center),
        ),
    ]);
    let float = Vec2::new(0.0, oscillate(frame as f64, 90.0, 3.0, 0.0));
    animate(node, frame, start, ctx.fps, float, 0.0)
}

/// Cloud-shaped thought bubble trailing small puffs towards the mascot.
pub fn thought_cloud(
    rect: Rect,
    text: &str,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let puff_space = rect.height() * 0.24;
    let body = Rect::new(rect.x0, rect.y0, rect.x1, rect.y1 - puff_space);
    let cx = body.center().x;
    let fill = ctx.palette.text;
    let big = puff_space * 0.5;
    let small = puff_space * 0.3;
    let node = VisualNode::group("thought_cloud", rect).with_children([
        VisualNode::shape("thought_cloud/body", body, Shape::Ellipse, fill),
        VisualNode::shape(
            "thought_cloud/puff/0",
            Rect::from_center_size((cx, body.y1 + big * 0.7), (big, big)),
            Shape::Ellipse,
            fill,
        ),
        VisualNode::shape(
            "thought_cloud/puff/1",
            Rect::from_center_size((cx, rect.y1 - small / 2.0), (small, small)),
            Shape::Ellipse,
            fill,
        ),
        VisualNode::text(
            "thought_cloud/text",
            body.inflate(-body.width() * 0.14, -body.height() * 0.18),
            text,
            ctx.palette.text(TextRole::Caption, TextAlign::Center),
        ),
    ]);
    let float = Vec2::new(oscillate(frame as f64, 110.0, 2.0, 1.0), 0.0);
    animate(node, frame, start, ctx.fps, float, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/bubble.rs"]
mod tests;
