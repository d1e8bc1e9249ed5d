//! Scene renderers.
//!
//! Each scene kind has a handful of interchangeable layouts ([`variant`]). Every layout is
//! a pure function of `(title, content, local frame)` plus the shared [`common::SceneCtx`],
//! so any frame can be rendered in isolation.

pub(crate) mod bullets;
pub(crate) mod common;
pub(crate) mod comparison;
pub(crate) mod summary;
pub(crate) mod timeline;
pub(crate) mod title;
pub(crate) mod variant;

use crate::{
    foundation::core::{Rect, Vec2},
    outline::model::Scene,
    render::{
        layout::split_image_panel,
        tree::{Shape, VisualNode},
    },
    scenes::{
        common::{SceneCtx, reveal},
        variant::SceneVariant,
    },
};

const IMAGE_START: u64 = 8;

/// Renders `scene` with `variant` at `frame` frames into the scene.
///
/// When the scene carries an image, the right part of the region is reserved for it and
/// the layout uses the remainder.
pub fn render_scene(
    scene: &Scene,
    variant: SceneVariant,
    frame: u64,
    ctx: &SceneCtx<'_>,
) -> VisualNode {
    let mut root = VisualNode::group("scene", ctx.region);
    let body_ctx;
    let ctx = match scene.image() {
        Some(source) => {
            let (body, panel) = split_image_panel(ctx.region);
            root.push(image_panel(source, panel, frame, ctx));
            body_ctx = SceneCtx {
                region: body,
                ..*ctx
            };
            &body_ctx
        }
        None => ctx,
    };

    let content = scene.content.as_slice();
    let title = scene.title.as_str();
    root.push(match variant {
        SceneVariant::Title(v) => title::render(v, title, content, frame, ctx),
        SceneVariant::Bullets(v) => bullets::render(v, title, content, frame, ctx),
        SceneVariant::Comparison(v) => comparison::render(v, title, content, frame, ctx),
        SceneVariant::Timeline(v) => timeline::render(v, title, content, frame, ctx),
        SceneVariant::Summary(v) => summary::render(v, title, content, frame, ctx),
    });
    root
}

fn image_panel(source: &str, panel: Rect, frame: u64, ctx: &SceneCtx<'_>) -> VisualNode {
    let h = (panel.width() * 0.75).min(panel.height());
    let y0 = panel.center().y - h / 2.0;
    let rect = Rect::new(panel.x0, y0, panel.x1, y0 + h);
    let node = VisualNode::group("image", rect).with_children([
        VisualNode::shape(
            "image/frame",
            rect,
            Shape::Rect { corner_radius: 16.0 },
            ctx.palette.surface,
        ),
        VisualNode::image("image/content", rect.inflate(-6.0, -6.0), source),
    ]);
    reveal(frame, IMAGE_START, ctx.fps).apply(node, Vec2::new(1.0, 0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;
