//! Opening scene: big title, optional subtitle (`content[0]`) and badge (`content[1]`).

use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::core::{Rect, Vec2},
    render::tree::{Shape, TextAlign, TextRole, VisualNode},
    scenes::{
        common::{SceneCtx, grow, pop, reveal, scaled, style},
        variant::TitleVariant,
    },
};

const TITLE_H: f64 = 76.0;
const SUBTITLE_START: u64 = 10;
const BADGE_START: u64 = 18;

pub fn render(
    variant: TitleVariant,
    title: &str,
    content: &[String],
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let subtitle = content.first().map(String::as_str).filter(|s| !s.trim().is_empty());
    let badge = content.get(1).map(String::as_str).filter(|s| !s.trim().is_empty());
    let children = match variant {
        TitleVariant::Centered => centered(title, subtitle, badge, frame, ctx),
        TitleVariant::LeftAligned => left_aligned(title, subtitle, badge, frame, ctx),
        TitleVariant::CircleAccent => circle_accent(title, subtitle, badge, frame, ctx),
    };
    VisualNode::group("title", ctx.region).with_children(children)
}

fn centered(
    title: &str,
    subtitle: Option<&str>,
    badge: Option<&str>,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    let r = ctx.region;
    let cy = r.center().y;
    let title_rect = Rect::new(r.x0, cy - TITLE_H, r.x1, cy);
    let mut out = vec![display_title(title, title_rect, TextAlign::Center, frame, ctx)];

    let bar_w = 120.0 * grow(frame, 6, 16);
    let cx = r.center().x;
    out.push(VisualNode::shape(
        "accent_bar",
        Rect::new(cx - bar_w / 2.0, cy + 8.0, cx + bar_w / 2.0, cy + 13.0),
        Shape::Rect { corner_radius: 2.5 },
        ctx.palette.accent,
    ));

    if let Some(text) = subtitle {
        out.push(subtitle_node(
            text,
            Rect::new(r.x0, cy + 28.0, r.x1, cy + 60.0),
            TextAlign::Center,
            frame,
            ctx,
        ));
    }
    if let Some(text) = badge {
        let rect = Rect::from_center_size((cx, cy - TITLE_H - 34.0), (badge_width(text), 30.0));
        out.push(badge_node(text, rect, frame, ctx));
    }
    out
}

fn left_aligned(
    title: &str,
    subtitle: Option<&str>,
    badge: Option<&str>,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    let r = ctx.region;
    let cy = r.center().y;
    let x = r.x0 + 28.0;

    let bar_h = 150.0 * grow(frame, 0, 18);
    let mut out = vec![VisualNode::shape(
        "accent_bar",
        Rect::new(r.x0, cy - TITLE_H - 10.0, r.x0 + 6.0, cy - TITLE_H - 10.0 + bar_h),
        Shape::Rect { corner_radius: 3.0 },
        ctx.palette.primary,
    )];
    out.push(display_title(
        title,
        Rect::new(x, cy - TITLE_H, r.x1, cy),
        TextAlign::Start,
        frame,
        ctx,
    ));
    if let Some(text) = subtitle {
        out.push(subtitle_node(
            text,
            Rect::new(x, cy + 12.0, r.x1, cy + 44.0),
            TextAlign::Start,
            frame,
            ctx,
        ));
    }
    if let Some(text) = badge {
        let w = badge_width(text);
        let rect = Rect::new(x, cy - TITLE_H - 44.0, x + w, cy - TITLE_H - 14.0);
        out.push(badge_node(text, rect, frame, ctx));
    }
    out
}

fn circle_accent(
    title: &str,
    subtitle: Option<&str>,
    badge: Option<&str>,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    let r = ctx.region;
    let c = r.center();
    let d = (r.height() * 0.62).min(r.width() * 0.6);

    let s = spring(frame as f64, ctx.fps, SpringConfig::GENTLE);
    let circle = VisualNode::shape(
        "accent_circle",
        Rect::from_center_size(c, (d, d)),
        Shape::Ellipse,
        ctx.palette.primary.fade(0.22),
    )
    .with_z(-1);
    let mut out = vec![scaled(circle, s)];

    out.push(display_title(
        title,
        Rect::new(r.x0, c.y - TITLE_H / 2.0, r.x1, c.y + TITLE_H / 2.0),
        TextAlign::Center,
        frame,
        ctx,
    ));
    if let Some(text) = subtitle {
        out.push(subtitle_node(
            text,
            Rect::new(r.x0, c.y + TITLE_H / 2.0 + 8.0, r.x1, c.y + TITLE_H / 2.0 + 40.0),
            TextAlign::Center,
            frame,
            ctx,
        ));
    }
    if let Some(text) = badge {
        let rect = Rect::from_center_size((c.x, c.y + d / 2.0 + 4.0), (badge_width(text), 30.0));
        out.push(badge_node(text, rect, frame, ctx));
    }
    out
}

fn display_title(
    title: &str,
    rect: Rect,
    align: TextAlign,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let node = VisualNode::text("heading", rect, title, ctx.palette.display(align));
    reveal(frame, 0, ctx.fps).apply(node, Vec2::new(0.0, 1.0))
}

fn subtitle_node(
    text: &str,
    rect: Rect,
    align: TextAlign,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let node = VisualNode::text("subtitle", rect, text, style(ctx, TextRole::Subtitle, align));
    reveal(frame, SUBTITLE_START, ctx.fps).apply(node, Vec2::new(0.0, 1.0))
}

fn badge_node(text: &str, rect: Rect, frame: u64, ctx: &SceneCtx<'_>) -> VisualNode {
    let pill = VisualNode::shape(
        "badge/pill",
        rect,
        Shape::Rect {
            corner_radius: rect.height() / 2.0,
        },
        ctx.palette.accent,
    );
    let label = VisualNode::text(
        "badge/text",
        rect,
        text,
        style(ctx, TextRole::Caption, TextAlign::Center),
    );
    let node = VisualNode::group("badge", rect).with_children([pill, label]);
    let visible = frame >= BADGE_START;
    scaled(node, pop(frame, BADGE_START, ctx.fps)).with_opacity(if visible { 1.0 } else { 0.0 })
}

fn badge_width(text: &str) -> f64 {
    (text.chars().count() as f64 * 8.5 + 32.0).clamp(80.0, 320.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/title.rs"]
mod tests;
