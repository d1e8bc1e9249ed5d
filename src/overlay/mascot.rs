//! The narrator mascot: a round face with five expressions, a blink cycle and an idle bounce.

use crate::{
    animation::ops::{blink, hop, oscillate},
    foundation::{
        color::Rgba8,
        core::{Point, Rect, Vec2},
    },
    outline::model::RenderKind,
    overlay::{OverlayCtx, animate},
    render::tree::{Shape, TextAlign, TextRole, VisualNode},
    select::hash::{key, pick},
};

pub const BLINK_PERIOD: u64 = 80;
pub const BLINK_FRAMES: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Happy,
    Thinking,
    Excited,
    Waving,
    Pointing,
}

impl Expression {
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Thinking,
        Self::Excited,
        Self::Waving,
        Self::Pointing,
    ];

    /// Expression for a scene, chosen among those that suit its kind.
    pub fn for_scene(kind: RenderKind, title: &str) -> Self {
        let candidates: &[Self] = match kind {
            RenderKind::Title => &[Self::Waving, Self::Happy, Self::Excited],
            RenderKind::Bullets => &[Self::Pointing, Self::Happy, Self::Thinking],
            RenderKind::Comparison => &[Self::Thinking, Self::Pointing, Self::Happy],
            RenderKind::Timeline => &[Self::Pointing, Self::Thinking, Self::Waving],
            RenderKind::Summary => &[Self::Excited, Self::Happy, Self::Waving],
        };
        pick(&key(title, "expression"), candidates)
            .copied()
            .unwrap_or(Self::Happy)
    }
}

/// Mascot filling the square `rect`, entering at `start`.
pub fn mascot(
    expression: Expression,
    rect: Rect,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let d = rect.width().min(rect.height());
    let c = rect.center();
    let face = Rect::from_center_size(c, (d * 0.8, d * 0.8));

    let mut parts = vec![
        VisualNode::shape("mascot/body", face, Shape::Ellipse, ctx.palette.primary),
        eye("mascot/eye_l", c, -1.0, d, frame, expression),
        eye("mascot/eye_r", c, 1.0, d, frame, expression),
        mouth(c, d, expression, ctx),
    ];
    let toward_content = ctx.side.toward_content();
    match expression {
        Expression::Waving => {
            let shoulder = Point::new(c.x + toward_content * d * 0.3, c.y + d * 0.05);
            let angle = (-60.0 + oscillate(frame as f64, 24.0, 25.0, 0.0)).to_radians();
            let hand = shoulder
                + Vec2::new(toward_content * angle.cos().abs(), angle.sin()) * (d * 0.18);
            parts.push(arm(shoulder, hand, d, ctx));
        }
        Expression::Pointing => {
            let shoulder = Point::new(c.x + toward_content * d * 0.3, c.y + d * 0.1);
            let hand = Point::new(shoulder.x + toward_content * d * 0.16, shoulder.y);
            parts.push(arm(shoulder, hand, d, ctx));
        }
        Expression::Thinking | Expression::Excited => {
            let mark = if expression == Expression::Thinking { "?" } else { "!" };
            parts.push(VisualNode::text(
                "mascot/mark",
                Rect::from_center_size((c.x + d * 0.3, rect.y0 + d * 0.08), (d * 0.2, d * 0.2)),
                mark,
                ctx.palette.text(TextRole::Label, TextAlign::Center),
            ));
        }
        Expression::Happy => {}
    }

    let node = VisualNode::group("mascot", rect).with_children(parts);
    let bounce = Vec2::new(0.0, -hop(frame as f64, 45.0, d * 0.04));
    animate(node, frame, start, ctx.fps, bounce, 0.0)
}

fn eye(id: &str, c: Point, dir: f64, d: f64, frame: u64, expression: Expression) -> VisualNode {
    let closed = blink(frame, BLINK_PERIOD, BLINK_FRAMES);
    let look_up = if expression == Expression::Thinking { d * 0.04 } else { 0.0 };
    let h = if closed { d * 0.02 } else { d * 0.13 };
    let center = Point::new(c.x + dir * d * 0.15, c.y - d * 0.08 - look_up);
    VisualNode::shape(
        id,
        Rect::from_center_size(center, (d * 0.1, h)),
        Shape::Ellipse,
        Rgba8::WHITE,
    )
}

fn mouth(c: Point, d: f64, expression: Expression, ctx: &OverlayCtx<'_>) -> VisualNode {
    let y = c.y + d * 0.14;
    let w = d * 0.16;
    match expression {
        Expression::Excited => VisualNode::shape(
            "mascot/mouth",
            Rect::from_center_size((c.x, y), (w * 1.2, w)),
            Shape::Ellipse,
            ctx.palette.background,
        ),
        Expression::Thinking => {
            let from = Point::new(c.x - w * 0.6, y);
            let to = Point::new(c.x + w * 0.6, y - d * 0.02);
            VisualNode::shape(
                "mascot/mouth",
                Rect::from_points(from, to).inflate(1.5, 1.5),
                Shape::Line {
                    from,
                    to,
                    width: 3.0,
                },
                ctx.palette.background,
            )
        }
        Expression::Happy | Expression::Waving | Expression::Pointing => {
            let points = vec![
                Point::new(c.x - w, y - w * 0.3),
                Point::new(c.x + w, y - w * 0.3),
                Point::new(c.x, y + w * 0.5),
            ];
            VisualNode::shape(
                "mascot/mouth",
                Rect::new(c.x - w, y - w * 0.3, c.x + w, y + w * 0.5),
                Shape::Polygon { points },
                ctx.palette.background,
            )
        }
    }
}

fn arm(shoulder: Point, hand: Point, d: f64, ctx: &OverlayCtx<'_>) -> VisualNode {
    let width = (d * 0.06).max(2.0);
    VisualNode::shape(
        "mascot/arm",
        Rect::from_points(shoulder, hand).inflate(width / 2.0, width / 2.0),
        Shape::Line {
            from: shoulder,
            to: hand,
            width,
        },
        ctx.palette.primary,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/mascot.rs"]
mod tests;
