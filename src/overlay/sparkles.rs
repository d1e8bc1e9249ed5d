use crate::{
    animation::ops::twinkle,
    foundation::core::Rect,
    overlay::{OverlayCtx, animate},
    render::tree::VisualNode,
    select::hash::{hash_text, key},
};

const GLYPHS: [&str; 2] = ["✦", "✧"];

fn unit(seed: &str, salt: &str) -> f64 {
    f64::from(hash_text(&key(seed, salt), 1000)) / 1000.0
}

/// `count` twinkling sparkles scattered over `area`; positions derive from `seed`.
pub fn sparkles(
    area: Rect,
    count: usize,
    seed: &str,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let mut group = VisualNode::group("sparkles", area);
    for i in 0..count {
        let size = 12.0 + 10.0 * unit(seed, &format!("size{i}"));
        let x = area.x0
            + size / 2.0
            + (area.width() - size).max(0.0) * unit(seed, &format!("x{i}"));
        let y = area.y0
            + size / 2.0
            + (area.height() - size).max(0.0) * unit(seed, &format!("y{i}"));
        let rect = Rect::from_center_size((x, y), (size, size));
        let glyph =
            VisualNode::glyph(format!("sparkles/{i}"), rect, GLYPHS[i % GLYPHS.len()], size);
        let node = animate(glyph, frame, start + 4 * i as u64, ctx.fps, Default::default(), 0.0);
        let tw = twinkle(frame as f64, 36.0 + 7.0 * i as f64, i as f64 * 1.3);
        let opacity = node.opacity * tw;
        group.push(node.with_opacity(opacity));
    }
    group
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/sparkles.rs"]
mod tests;
