//! Two-sided comparison scenes.
//!
//! Content is split at `ceil(n / 2)`: the first half is "Option A", the rest "Option B".
//! Empty halves are not drawn, and the versus badge only appears when both sides exist.

use crate::{
    foundation::{
        color::Rgba8,
        core::{Rect, Vec2},
    },
    render::tree::{Shape, Stroke, TextAlign, TextRole, VisualNode},
    scenes::{
        common::{
            SceneCtx, capped, columns, divider, grid, grow, heading, pop, reveal, rows, scaled,
            split_heading, style, tinted,
        },
        variant::ComparisonVariant,
    },
};

pub const MAX_ITEMS: usize = 8;
const ITEM_BASE: u64 = 14;
const ITEM_STEP: u64 = 9;
const SIDE_B_DELAY: u64 = 4;
const VS_START: u64 = 20;

/// Splits `items` into `(option_a, option_b)` at `ceil(n / 2)`.
pub fn split_halves(items: &[String]) -> (&[String], &[String]) {
    items.split_at(items.len().div_ceil(2))
}

#[derive(Clone, Copy)]
struct Side<'a> {
    id: &'static str,
    label: &'static str,
    items: &'a [String],
    color: Rgba8,
    delay: u64,
    dir: Vec2,
}

impl Side<'_> {
    fn item_start(&self, i: usize) -> u64 {
        ITEM_BASE + i as u64 * ITEM_STEP + self.delay
    }
}

fn sides<'a>(items: &'a [String], ctx: &SceneCtx<'_>) -> Vec<Side<'a>> {
    let (a, b) = split_halves(items);
    [
        Side {
            id: "option_a",
            label: "Option A",
            items: a,
            color: ctx.palette.option_a,
            delay: 0,
            dir: Vec2::new(-1.0, 0.0),
        },
        Side {
            id: "option_b",
            label: "Option B",
            items: b,
            color: ctx.palette.option_b,
            delay: SIDE_B_DELAY,
            dir: Vec2::new(1.0, 0.0),
        },
    ]
    .into_iter()
    .filter(|s| !s.items.is_empty())
    .collect()
}

pub fn render(
    variant: ComparisonVariant,
    title: &str,
    content: &[String],
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let items = capped(content, MAX_ITEMS);
    let (head, body) = split_heading(ctx.region);
    let mut root = VisualNode::group("comparison", ctx.region).with_child(heading(
        title,
        head,
        frame,
        ctx,
        TextAlign::Center,
    ));
    let sides = sides(items, ctx);
    if sides.is_empty() {
        return root;
    }
    let children = match variant {
        ComparisonVariant::VersusCards => versus_cards(&sides, body, frame, ctx),
        ComparisonVariant::Table => table(&sides, body, frame, ctx),
        ComparisonVariant::StackedGroups => stacked_groups(&sides, body, frame, ctx),
    };
    root.children.extend(children);
    root
}

fn versus_cards(sides: &[Side<'_>], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let cols = columns(body, 2, 64.0);
    let mut out: Vec<VisualNode> = sides
        .iter()
        .zip(&cols)
        .map(|(side, col)| {
            let card = VisualNode::shape(
                format!("{}/card", side.id),
                *col,
                Shape::Rect { corner_radius: 16.0 },
                ctx.palette.surface,
            )
            .with_stroke(Stroke {
                color: side.color,
                width: 2.0,
            });
            let label = VisualNode::text(
                format!("{}/label", side.id),
                Rect::new(col.x0 + 18.0, col.y0 + 14.0, col.x1 - 18.0, col.y0 + 42.0),
                side.label,
                tinted(ctx, TextRole::Label, TextAlign::Start, side.color),
            );
            let list_area = Rect::new(col.x0 + 18.0, col.y0 + 56.0, col.x1 - 18.0, col.y1 - 14.0);
            let mut node = VisualNode::group(side.id, *col).with_children([card, label]);
            node.children.extend(side_items(side, list_area, 44.0, frame, ctx));
            reveal(frame, side.delay + 4, ctx.fps).apply(node, side.dir)
        })
        .collect();

    if sides.len() == 2 {
        let c = body.center();
        let rect = Rect::from_center_size(c, (56.0, 56.0));
        let badge = VisualNode::group("vs", rect).with_z(2).with_children([
            VisualNode::shape("vs/disc", rect, Shape::Ellipse, ctx.palette.accent),
            VisualNode::text(
                "vs/text",
                rect,
                "VS",
                tinted(ctx, TextRole::Label, TextAlign::Center, ctx.palette.background),
            ),
        ]);
        let visible = if frame >= VS_START { 1.0 } else { 0.0 };
        out.push(scaled(badge, pop(frame, VS_START, ctx.fps)).with_opacity(visible));
    }
    out
}

fn side_items(
    side: &Side<'_>,
    area: Rect,
    max_h: f64,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    rows(area, side.items.len(), max_h, 8.0)
        .into_iter()
        .zip(side.items)
        .enumerate()
        .map(|(i, (row, text))| {
            let dot = VisualNode::shape(
                format!("{}/item/{i}/dot", side.id),
                Rect::from_center_size((row.x0 + 5.0, row.center().y), (8.0, 8.0)),
                Shape::Ellipse,
                side.color,
            );
            let label = VisualNode::text(
                format!("{}/item/{i}/text", side.id),
                Rect::new(row.x0 + 18.0, row.y0, row.x1, row.y1),
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Start),
            );
            let node = VisualNode::group(format!("{}/item/{i}", side.id), row)
                .with_children([dot, label]);
            reveal(frame, side.item_start(i), ctx.fps).apply(node, Vec2::new(0.0, 1.0))
        })
        .collect()
}

fn table(sides: &[Side<'_>], body: Rect, frame: u64, ctx: &SceneCtx<'_>) -> Vec<VisualNode> {
    let cols = columns(body, sides.len(), 0.0);
    let n_rows = sides.iter().map(|s| s.items.len()).max().unwrap_or(0);
    let mut out = Vec::new();

    let header_h = 44.0;
    for (side, col) in sides.iter().zip(&cols) {
        let rect = Rect::new(col.x0, col.y0, col.x1, col.y0 + header_h);
        let cell = VisualNode::group(format!("{}/header", side.id), rect).with_children([
            VisualNode::shape(
                format!("{}/header/bg", side.id),
                rect,
                Shape::Rect { corner_radius: 8.0 },
                side.color.fade(0.25),
            ),
            VisualNode::text(
                format!("{}/label", side.id),
                rect,
                side.label,
                tinted(ctx, TextRole::Label, TextAlign::Center, side.color),
            ),
        ]);
        out.push(reveal(frame, side.delay, ctx.fps).apply(cell, Vec2::new(0.0, -1.0)));
    }

    let grid_area = Rect::new(body.x0, body.y0 + header_h + 8.0, body.x1, body.y1);
    let row_rects = rows(grid_area, n_rows, 46.0, 6.0);
    for (r, row) in row_rects.iter().enumerate() {
        for (side, col) in sides.iter().zip(&cols) {
            let Some(text) = side.items.get(r) else {
                continue;
            };
            let cell_rect = Rect::new(col.x0 + 14.0, row.y0, col.x1 - 14.0, row.y1);
            let cell = VisualNode::text(
                format!("{}/item/{r}", side.id),
                cell_rect,
                text.as_str(),
                style(ctx, TextRole::Body, TextAlign::Center),
            );
            out.push(reveal(frame, side.item_start(r), ctx.fps).apply(cell, Vec2::new(0.0, 1.0)));
        }
        if let Some(next) = row_rects.get(r + 1) {
            let y = (row.y1 + next.y0) / 2.0;
            let w = body.width() * grow(frame, ITEM_BASE + (r as u64 + 1) * ITEM_STEP, 12);
            out.push(divider(format!("divider/{r}"), body.x0, body.x0 + w, y, ctx));
        }
    }

    if sides.len() == 2 && n_rows > 0 {
        let x = cols[0].x1;
        let bottom = row_rects.last().map_or(grid_area.y0, |r| r.y1);
        let len = (bottom - grid_area.y0) * grow(frame, ITEM_BASE, 20);
        out.push(VisualNode::shape(
            "column_divider",
            Rect::new(x - 0.5, grid_area.y0, x + 0.5, grid_area.y0 + len),
            Shape::Rect { corner_radius: 0.0 },
            ctx.palette.muted.fade(0.4),
        ));
    }
    out
}

fn stacked_groups(
    sides: &[Side<'_>],
    body: Rect,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> Vec<VisualNode> {
    let bands = rows(body, sides.len(), f64::INFINITY, 18.0);
    sides
        .iter()
        .zip(bands)
        .map(|(side, band)| {
            let pill_w = 112.0;
            let pill_rect = Rect::new(band.x0, band.y0, band.x0 + pill_w, band.y0 + 30.0);
            let pill = VisualNode::group(format!("{}/pill", side.id), pill_rect).with_children([
                VisualNode::shape(
                    format!("{}/pill/bg", side.id),
                    pill_rect,
                    Shape::Rect { corner_radius: 15.0 },
                    side.color,
                ),
                VisualNode::text(
                    format!("{}/label", side.id),
                    pill_rect,
                    side.label,
                    style(ctx, TextRole::Caption, TextAlign::Center),
                ),
            ]);
            let chips_area = Rect::new(band.x0, pill_rect.y1 + 10.0, band.x1, band.y1);
            let chips = grid(chips_area, side.items.len(), 2, 44.0, 10.0)
                .into_iter()
                .zip(side.items)
                .enumerate()
                .map(|(i, (cell, text))| {
                    let chip = VisualNode::group(format!("{}/item/{i}", side.id), cell)
                        .with_children([
                            VisualNode::shape(
                                format!("{}/item/{i}/bg", side.id),
                                cell,
                                Shape::Rect { corner_radius: 10.0 },
                                ctx.palette.surface,
                            )
                            .with_stroke(Stroke {
                                color: side.color.fade(0.6),
                                width: 1.0,
                            }),
                            VisualNode::text(
                                format!("{}/item/{i}/text", side.id),
                                Rect::new(cell.x0 + 12.0, cell.y0, cell.x1 - 12.0, cell.y1),
                                text.as_str(),
                                style(ctx, TextRole::Body, TextAlign::Start),
                            ),
                        ]);
                    reveal(frame, side.item_start(i), ctx.fps).apply(chip, Vec2::new(0.0, 1.0))
                });
            let node = VisualNode::group(side.id, band)
                .with_child(pill)
                .with_children(chips);
            reveal(frame, side.delay, ctx.fps).apply(node, side.dir)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/comparison.rs"]
mod tests;
