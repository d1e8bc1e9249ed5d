use crate::{
    animation::ops::{hop, oscillate},
    foundation::core::{Rect, Vec2},
    outline::model::RenderKind,
    overlay::{OverlayCtx, animate},
    render::tree::VisualNode,
    select::hash::{key, pick},
};

/// Emoji that fit each scene kind.
pub fn catalog(kind: RenderKind) -> &'static [&'static str] {
    match kind {
        RenderKind::Title => &["🎬", "🚀", "📚", "✨"],
        RenderKind::Bullets => &["📌", "💡", "📝", "✅"],
        RenderKind::Comparison => &["⚖️", "🤔", "🔍", "🆚"],
        RenderKind::Timeline => &["⏳", "🗓️", "🧭", "📈"],
        RenderKind::Summary => &["🎉", "🏆", "⭐", "👏"],
    }
}

/// Emoji for a scene, stable for a given title.
pub fn pick_emoji(kind: RenderKind, title: &str) -> &'static str {
    pick(&key(title, "emoji"), catalog(kind))
        .copied()
        .unwrap_or("✨")
}

/// Emoji that hops and rocks gently.
pub fn bouncing_emoji(
    rect: Rect,
    glyph: &str,
    frame: u64,
    start: u64,
    ctx: &OverlayCtx<'_>,
) -> VisualNode {
    let size = rect.width().min(rect.height()) * 0.8;
    let node = VisualNode::glyph("emoji", rect, glyph, size);
    let f = frame as f64;
    animate(
        node,
        frame,
        start,
        ctx.fps,
        Vec2::new(0.0, -hop(f, 36.0, size * 0.15)),
        oscillate(f, 72.0, 6.0, 0.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/emoji.rs"]
mod tests;
