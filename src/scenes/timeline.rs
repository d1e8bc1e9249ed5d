//! Ordered-step scenes.

use crate::{
    animation::{interp::progress, ops::stagger_start},
    foundation::{
        color::Rgba8,
        core::{Point, Rect, Vec2},
    },
    render::tree::{Shape, TextAlign, TextRole, VisualNode},
    scenes::{
        common::{
            SceneCtx, capped, columns, heading, pop, reveal, rows, scaled, split_heading, style,
            tinted,
        },
        variant::TimelineVariant,
    },
};

pub const MAX_STEPS: usize = 6;
pub const INTRO_FRAMES: u64 = 15;
pub const STEP_FRAMES: u64 = 12;
const NODE_D: f64 = 34.0;

/// Track fill in `[0, 1]`: `elapsed / (intro + n * step)`.
pub fn track_progress(frame: u64, steps: usize) -> f64 {
    let len = INTRO_FRAMES + steps as u64 * STEP_FRAMES;
    progress(frame as f64, 0.0, len as f64)
}

fn step_start(i: usize) -> u64 {
    stagger_start(INTRO_FRAMES, STEP_FRAMES, i)
}

pub fn render(
    variant: TimelineVariant,
    title: &str,
    content: &[String],
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let steps = capped(content, MAX_STEPS);
    let (head, body) = split_heading(ctx.region);
    let mut root = VisualNode::group("timeline", ctx.region).with_child(heading(
        title,
        head,
        frame,
        ctx,
        TextAlign::Start,
    ));
    if steps.is_empty() {
        return root;
    }
    let children = match variant {
        TimelineVariant::NodeTrack => node_track(steps, body, frame, ctx),
        TimelineVariant::VerticalSteps => vertical_steps(steps, body, frame, ctx),
        TimelineVariant::CardRow => card_row(steps, body, frame, ctx),
    };
    root.children.extend(children);
    root
}

fn node(id: String, center: Point, i: usize, frame: u64, ctx: &SceneCtx<'_>) -> VisualNode {
    let rect = Rect::from_center_size(center, (NODE_D, NODE_D));
    let start = step_start(i);
    let g = VisualNode::group(id.clone(), rect).with_z(1).with_children([
        VisualNode::shape(format!("{id}/disc"), rect, Shape::Ellipse, ctx.palette.primary),
        VisualNode::text(
            format!("{id}/number"),
            rect,
            (i + 1).to_string(),
            style(ctx, TextRole::Badge, TextAlign::Center),
        ),
    ]);
    let opacity = if frame >= start { 1.0 } else { 0.0 };
    scaled(g, pop(frame, start, ctx.fps)).with_opacity(opacity)
}

fn line(id: &str, from: Point, to: Point, width: f64, color: Rgba8) -> VisualNode {
    let rect = Rect::from_points(from, to).inflate(width / 2.0, width / 2.0);
    VisualNode::shape(id, rect, Shape::Line { from, to, width }, color)
}

fn node_track(steps: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let n = steps.len();
    let y = body.y0 + body.height() * 0.4;
    let inset = 48.0;
    let (x0, x1) = (body.x0 + inset, body.x1 - inset);
    let x_at = |i: usize| {
        if n == 1 {
            (x0 + x1) / 2.0
        } else {
            x0 + (x1 - x0) * i as f64 / (n - 1) as f64
        }
    };

    let mut out = Vec::with_capacity(n * 2 + 2);
    if n > 1 {
        let fill_x = x0 + (x1 - x0) * track_progress(frame, n);
        out.push(line("track", Point::new(x0, y), Point::new(x1, y), 6.0, ctx.palette.surface));
        out.push(line(
            "track/fill",
            Point::new(x0, y),
            Point::new(fill_x, y),
            6.0,
            ctx.palette.accent,
        ));
    }
    let label_w = ((x1 - x0) / n as f64).max(90.0);
    for (i, text) in steps.iter().enumerate() {
        let x = x_at(i);
        out.push(node(format!("step/{i}/node"), Point::new(x, y), i, frame, ctx));
        let (ly0, ly1) = if i % 2 == 0 {
            (y + NODE_D / 2.0 + 12.0, y + NODE_D / 2.0 + 72.0)
        } else {
            (y - NODE_D / 2.0 - 72.0, y - NODE_D / 2.0 - 12.0)
        };
        let label = VisualNode::text(
            format!("step/{i}/text"),
            Rect::new(x - label_w / 2.0, ly0, x + label_w / 2.0, ly1),
            text.as_str(),
            style(ctx, TextRole::Body, TextAlign::Center),
        );
        out.push(reveal(frame, step_start(i), ctx.fps).apply(label, Vec2::new(0.0, 1.0)));
    }
    out
}

fn vertical_steps(steps: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let n = steps.len();
    let row_rects = rows(body, n, 60.0, 10.0);
    let cx = body.x0 + NODE_D / 2.0 + 4.0;
    let mut out = Vec::with_capacity(n * 2 + 1);

    if let (Some(first), Some(last)) = (row_rects.first(), row_rects.last())
        && n > 1
    {
        let (y0, y1) = (first.center().y, last.center().y);
        let y = y0 + (y1 - y0) * track_progress(frame, n);
        out.push(line("connector", Point::new(cx, y0), Point::new(cx, y), 3.0, ctx.palette.accent));
    }
    for (i, (row, text)) in row_rects.iter().zip(steps).enumerate() {
        out.push(node(format!("step/{i}/node"), Point::new(cx, row.center().y), i, frame, ctx));
        let label = VisualNode::text(
            format!("step/{i}/text"),
            Rect::new(cx + NODE_D / 2.0 + 18.0, row.y0, row.x1, row.y1),
            text.as_str(),
            style(ctx, TextRole::Body, TextAlign::Start),
        );
        out.push(reveal(frame, step_start(i), ctx.fps).apply(label, Vec2::new(-1.0, 0.0)));
    }
    out
}

fn card_row(steps: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let n = steps.len();
    let band_h = body.height().min(180.0);
    let band_y = body.y0 + (body.height() - band_h) / 2.0;
    let band = Rect::new(body.x0, band_y, body.x1, band_y + band_h);
    let gap = 36.0;
    let cards = columns(band, n, gap);
    let mut out = Vec::with_capacity(n * 2);

    for (i, (card, text)) in cards.iter().zip(steps).enumerate() {
        let number_rect = Rect::new(card.x0 + 12.0, card.y0 + 12.0, card.x1 - 12.0, card.y0 + 40.0);
        let g = VisualNode::group(format!("step/{i}"), *card).with_children([
            VisualNode::shape(
                format!("step/{i}/card"),
                *card,
                Shape::Rect { corner_radius: 14.0 },
                ctx.palette.surface,
            ),
            VisualNode::text(
                format!("step/{i}/number"),
                number_rect,
                format!("{:02}", i + 1),
                tinted(ctx, TextRole::Label, TextAlign::Start, ctx.palette.accent),
            ),
            VisualNode::text(
                format!("step/{i}/text"),
                Rect::new(card.x0 + 12.0, number_rect.y1 + 6.0, card.x1 - 12.0, card.y1 - 12.0),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            ),
        ]);
        out.push(reveal(frame, step_start(i), ctx.fps).apply(g, Vec2::new(0.0, 1.0)));

        if i + 1 < n {
            let arrow_rect =
                Rect::from_center_size((card.x1 + gap / 2.0, card.center().y), (gap, gap));
            let arrow = VisualNode::glyph(format!("arrow/{i}"), arrow_rect, "→", 22.0);
            out.push(reveal(frame, step_start(i + 1), ctx.fps).apply(arrow, Vec2::new(-1.0, 0.0)));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/timeline.rs"]
mod tests;
