//! Closing recap scenes. Every layout ends with the "generated by" footer.

use crate::{
    animation::ops::stagger_start,
    foundation::core::{Rect, Vec2},
    render::tree::{Shape, Stroke, TextAlign, TextRole, VisualNode},
    scenes::{
        common::{
            SceneCtx, capped, divider, footer, grid, grow, heading, pop, reveal, rows, scaled,
            split_heading, style, tinted,
        },
        variant::SummaryVariant,
    },
};

pub const MAX_ITEMS: usize = 6;
const ITEM_BASE: u64 = 12;
const ITEM_STEP: u64 = 9;
const CHECK_DELAY: u64 = 6;
const FOOTER_H: f64 = 28.0;

fn item_start(i: usize) -> u64 {
    stagger_start(ITEM_BASE, ITEM_STEP, i)
}

pub fn render(
    variant: SummaryVariant,
    title: &str,
    content: &[String],
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let items = capped(content, MAX_ITEMS);
    let (head, body) = split_heading(ctx.region);
    let mut root = VisualNode::group("summary", ctx.region).with_child(heading(
        title,
        head,
        frame,
        ctx,
        TextAlign::Center,
    ));
    if items.is_empty() {
        return root;
    }
    let body = Rect::new(body.x0, body.y0, body.x1, body.y1 - FOOTER_H);
    let children = match variant {
        SummaryVariant::Checklist => checklist(items, body, frame, ctx),
        SummaryVariant::GridCards => grid_cards(items, body, frame, ctx),
        SummaryVariant::DividedRows => divided_rows(items, body, frame, ctx),
    };
    root.children.extend(children);
    root.push(footer(frame, ctx));
    root
}

fn checklist(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    rows(body, items.len(), 52.0, 10.0)
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(i, (row, text))| {
            let box_rect = Rect::from_center_size((row.x0 + 16.0, row.center().y), (28.0, 28.0));
            let check_at = item_start(i) + CHECK_DELAY;
            let check = VisualNode::glyph(format!("item/{i}/check"), box_rect, "✓", 20.0);
            let check = scaled(check, pop(frame, check_at, ctx.fps))
                .with_opacity(if frame >= check_at { 1.0 } else { 0.0 });
            let node = VisualNode::group(format!("item/{i}"), row).with_children([
                VisualNode::shape(
                    format!("item/{i}/box"),
                    box_rect,
                    Shape::Rect { corner_radius: 7.0 },
                    ctx.palette.success,
                ),
                check,
                VisualNode::text(
                    format!("item/{i}/text"),
                    Rect::new(box_rect.x1 + 16.0, row.y0, row.x1, row.y1),
                    text.as_str(),
                    style(ctx, TextRole::Body, TextAlign::Start),
                ),
            ]);
            reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(-1.0, 0.0))
        })
        .collect()
}

fn grid_cards(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let cols = if items.len() > 4 { 3 } else { 2 };
    grid(body, items.len(), cols, 110.0, 14.0)
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(i, (cell, text))| {
            let node = VisualNode::group(format!("item/{i}"), cell).with_children([
                VisualNode::shape(
                    format!("item/{i}/card"),
                    cell,
                    Shape::Rect { corner_radius: 14.0 },
                    ctx.palette.surface,
                )
                .with_stroke(Stroke {
                    color: ctx.palette.primary.fade(0.5),
                    width: 1.5,
                }),
                VisualNode::text(
                    format!("item/{i}/text"),
                    Rect::new(cell.x0 + 14.0, cell.y0 + 10.0, cell.x1 - 14.0, cell.y1 - 10.0),
                    text.as_str(),
                    style(ctx, TextRole::Body, TextAlign::Center),
                ),
            ]);
            reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(0.0, 1.0))
        })
        .collect()
}

fn divided_rows(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let rects = rows(body, items.len(), 48.0, 10.0);
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, (row, text)) in rects.iter().zip(items).enumerate() {
        let node = VisualNode::group(format!("item/{i}"), *row).with_children([
            VisualNode::text(
                format!("item/{i}/marker"),
                Rect::new(row.x0, row.y0, row.x0 + 24.0, row.y1),
                "•",
                tinted(ctx, TextRole::Label, TextAlign::Center, ctx.palette.accent),
            ),
            VisualNode::text(
                format!("item/{i}/text"),
                Rect::new(row.x0 + 32.0, row.y0, row.x1, row.y1),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            ),
        ]);
        out.push(reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(0.0, 1.0)));
        if let Some(next) = rects.get(i + 1) {
            let y = (row.y1 + next.y0) / 2.0;
            let w = row.width() * grow(frame, item_start(i + 1), 12);
            out.push(divider(format!("divider/{i}"), row.x0, row.x0 + w, y, ctx));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/summary.rs"]
mod tests;
