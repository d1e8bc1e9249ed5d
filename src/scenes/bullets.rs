//! Bullet-list scenes.

use crate::{
    animation::ops::stagger_start,
    foundation::core::{Point, Rect, Vec2},
    render::tree::{Shape, TextAlign, TextRole, VisualNode},
    scenes::{
        common::{
            SceneCtx, capped, divider, grid, grow, heading, reveal, rows, split_heading, style,
            tinted,
        },
        variant::BulletsVariant,
    },
};

pub const MAX_ITEMS: usize = 6;
pub const ITEM_BASE: u64 = 12;
pub const ITEM_STEP: u64 = 9;

/// Frame at which item `i` starts to appear.
pub fn item_start(i: usize) -> u64 {
    stagger_start(ITEM_BASE, ITEM_STEP, i)
}

pub fn render(
    variant: BulletsVariant,
    title: &str,
    content: &[String],
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let items = capped(content, MAX_ITEMS);
    let (head, body) = split_heading(ctx.region);
    let mut root = VisualNode::group("bullets", ctx.region).with_child(heading(
        title,
        head,
        frame,
        ctx,
        TextAlign::Start,
    ));
    if items.is_empty() {
        return root;
    }
    let children = match variant {
        BulletsVariant::NumberedCards => numbered_cards(items, body, frame, ctx),
        BulletsVariant::DotList => dot_list(items, body, frame, ctx),
        BulletsVariant::TwoColumnGrid => two_column_grid(items, body, frame, ctx),
        BulletsVariant::DividedRows => divided_rows(items, body, frame, ctx),
    };
    root.children.extend(children);
    root
}

fn numbered_cards(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    rows(body, items.len(), 58.0, 10.0)
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(i, (row, text))| {
            let card = VisualNode::shape(
                format!("item/{i}/card"),
                row,
                Shape::Rect { corner_radius: 12.0 },
                ctx.palette.surface,
            );
            let d = (row.height() - 18.0).clamp(22.0, 36.0);
            let c = Point::new(row.x0 + 14.0 + d / 2.0, row.center().y);
            let badge_rect = Rect::from_center_size(c, (d, d));
            let badge = VisualNode::shape(
                format!("item/{i}/badge"),
                badge_rect,
                Shape::Ellipse,
                ctx.palette.primary,
            );
            let number = VisualNode::text(
                format!("item/{i}/number"),
                badge_rect,
                (i + 1).to_string(),
                style(ctx, TextRole::Badge, TextAlign::Center),
            );
            let label = VisualNode::text(
                format!("item/{i}/text"),
                Rect::new(badge_rect.x1 + 14.0, row.y0, row.x1 - 14.0, row.y1),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            );
            let node = VisualNode::group(format!("item/{i}"), row)
                .with_children([card, badge, number, label]);
            reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(-1.0, 0.0))
        })
        .collect()
}

fn dot_list(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    rows(body, items.len(), 46.0, 8.0)
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(i, (row, text))| {
            let dot = VisualNode::shape(
                format!("item/{i}/dot"),
                Rect::from_center_size((row.x0 + 8.0, row.center().y), (10.0, 10.0)),
                Shape::Ellipse,
                ctx.palette.accent,
            );
            let label = VisualNode::text(
                format!("item/{i}/text"),
                Rect::new(row.x0 + 26.0, row.y0, row.x1, row.y1),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            );
            let node = VisualNode::group(format!("item/{i}"), row).with_children([dot, label]);
            reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(0.0, 1.0))
        })
        .collect()
}

fn two_column_grid(
    items: &[String],
    body: Rect,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    grid(body, items.len(), 2, 104.0, 14.0)
        .into_iter()
        .zip(items)
        .enumerate()
        .map(|(i, (cell, text))| {
            let card = VisualNode::shape(
                format!("item/{i}/card"),
                cell,
                Shape::Rect { corner_radius: 14.0 },
                ctx.palette.surface,
            );
            let number = VisualNode::text(
                format!("item/{i}/number"),
                Rect::new(cell.x0 + 16.0, cell.y0 + 10.0, cell.x1 - 16.0, cell.y0 + 32.0),
                format!("{:02}", i + 1),
                style(ctx, TextRole::Label, TextAlign::Start),
            );
            let label = VisualNode::text(
                format!("item/{i}/text"),
                Rect::new(cell.x0 + 16.0, cell.y0 + 34.0, cell.x1 - 16.0, cell.y1 - 10.0),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            );
            let node =
                VisualNode::group(format!("item/{i}"), cell).with_children([card, number, label]);
            reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(0.0, 1.0))
        })
        .collect()
}

fn divided_rows(items: &[String], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let rects = rows(body, items.len(), 52.0, 12.0);
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, (row, text)) in rects.iter().zip(items).enumerate() {
        let number = VisualNode::text(
            format!("item/{i}/number"),
            Rect::new(row.x0, row.y0, row.x0 + 48.0, row.y1),
            format!("{:02}", i + 1),
            tinted(ctx, TextRole::Label, TextAlign::Start, ctx.palette.accent),
        );
        let label = VisualNode::text(
            format!("item/{i}/text"),
            Rect::new(row.x0 + 56.0, row.y0, row.x1, row.y1),
            text.as_str(),
            style(ctx, TextRole::Body, TextAlign::Start),
        );
        let node = VisualNode::group(format!("item/{i}"), *row).with_children([number, label]);
        out.push(reveal(frame, item_start(i), ctx.fps).apply(node, Vec2::new(-1.0, 0.0)));

        if let Some(next) = rects.get(i + 1) {
            let y = (row.y1 + next.y0) / 2.0;
            let w = row.width() * grow(frame, item_start(i + 1), 12);
            out.push(divider(format!("divider/{i}"), row.x0, row.x0 + w, y, ctx));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/bullets.rs"]
mod tests;
