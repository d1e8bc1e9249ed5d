use crate::{
    animation::{
        ease::Ease,
        interp::{InterpOpts, interpolate, interpolate_with},
        spring::{SpringConfig, spring},
    },
    foundation::{
        color::Rgba8,
        core::{Fps, Point, Rect, Transform2D, Vec2},
    },
    overlay::underline::underline,
    render::{
        theme::Palette,
        tree::{Shape, TextAlign, TextRole, TextStyle, VisualNode},
    },
};

pub(crate) const HEADING_H: f64 = 64.0;
pub(crate) const HEADING_GAP: f64 = 20.0;
const REVEAL_FADE_FRAMES: f64 = 8.0;
const REVEAL_RISE_PX: f64 = 24.0;

#[derive(Clone, Copy)]
/// Everything a scene variant needs besides its own inputs.
pub struct SceneCtx<'a> {
    pub fps: Fps,
    /// Scene duration in frames.
    pub duration: u64,
    /// Area the scene may draw in.
    pub region: Rect,
    pub palette: &'a Palette,
    pub footer: &'a FooterTiming,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterMode {
    /// Fade in over the fixed `[start, end]` window regardless of scene length.
    Absolute,
    /// Use `[start, end]` when the scene is long enough, otherwise the last `end - start`
    /// frames of the scene.
    #[default]
    Anchored,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// The "generated by" footer shown at the end of summary scenes.
pub struct FooterTiming {
    pub mode: FooterMode,
    pub start: u64,
    pub end: u64,
    pub text: String,
}

impl Default for FooterTiming {
    fn default() -> Self {
        Self {
            mode: FooterMode::Anchored,
            start: 55,
            end: 70,
            text: "Generated by AI Study Tools".to_owned(),
        }
    }
}

impl FooterTiming {
    /// Fade-in window for a scene of `duration` frames.
    pub fn window(&self, duration: u64) -> (u64, u64) {
        let len = self.end.saturating_sub(self.start);
        match self.mode {
            FooterMode::Absolute => (self.start, self.end),
            FooterMode::Anchored if duration >= self.end => (self.start, self.end),
            FooterMode::Anchored => {
                let start = duration.saturating_sub(len);
                (start, start + len.min(duration))
            }
        }
    }
}

/// Staggered entrance state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub opacity: f64,
    /// Remaining distance to travel, in pixels.
    pub offset: f64,
    pub scale: f64,
}

/// Entrance of an element whose animation starts at frame `start`.
///
/// The start frame itself counts as the first frame of the fade, so the element has a
/// non-zero opacity from `start` on and zero before it.
pub fn reveal(frame: u64, start: u64, fps: Fps) -> Reveal {
    let shown = frame as f64 - start as f64 + 1.0;
    let s = spring(shown, fps, SpringConfig::SNAPPY);
    Reveal {
        opacity: interpolate(shown, [0.0, REVEAL_FADE_FRAMES], [0.0, 1.0]),
        offset: (1.0 - s) * REVEAL_RISE_PX,
        scale: 0.92 + 0.08 * s,
    }
}

impl Reveal {
    /// Apply to `node`, moving it in from `dir` (unit vector) and scaling around its center.
    pub fn apply(self, node: VisualNode, dir: Vec2) -> VisualNode {
        let center = node.rect.center().to_vec2();
        let t = Transform2D {
            translate: dir * self.offset,
            scale: Vec2::new(self.scale, self.scale),
            anchor: center,
            rotation_rad: 0.0,
        };
        node.with_opacity(self.opacity).with_transform(t)
    }
}

/// Pop-in scale for badges and check marks (bouncy, starts at 0).
pub fn pop(frame: u64, start: u64, fps: Fps) -> f64 {
    spring(frame as f64 - start as f64, fps, SpringConfig::BOUNCY)
}

/// Scale `node` around its own center.
pub fn scaled(node: VisualNode, s: f64) -> VisualNode {
    let anchor = node.rect.center().to_vec2();
    node.with_transform(Transform2D::uniform_scale(s, anchor))
}

/// Scene heading with its animated underline.
pub fn heading(
    title: &str,
    rect: Rect,
    frame: u64,
    ctx: &SceneCtx<'_>,
    align: TextAlign,
) -> VisualNode {
    let r = reveal(frame, 0, ctx.fps);
    let text = VisualNode::text(
        "heading/text",
        rect,
        title,
        ctx.palette.text(TextRole::Heading, align),
    );
    let line_w = (rect.width() * 0.22).clamp(60.0, 160.0);
    let x0 = match align {
        TextAlign::Start => rect.x0,
        TextAlign::Center => rect.center().x - line_w / 2.0,
        TextAlign::End => rect.x1 - line_w,
    };
    let line = underline(
        "heading/underline",
        Rect::new(x0, rect.y1 + 2.0, x0 + line_w, rect.y1 + 6.0),
        frame,
        10,
        ctx.palette.accent,
    );
    r.apply(
        VisualNode::group("heading", rect).with_children([text, line]),
        Vec2::new(0.0, 1.0),
    )
}

/// Splits `region` into the heading strip and the body below it.
pub fn split_heading(region: Rect) -> (Rect, Rect) {
    let heading = Rect::new(region.x0, region.y0, region.x1, region.y0 + HEADING_H);
    let body = Rect::new(region.x0, heading.y1 + HEADING_GAP, region.x1, region.y1);
    (heading, body)
}

/// At most `cap` items from the front of `content`; order is preserved.
pub fn capped(content: &[String], cap: usize) -> &[String] {
    &content[..content.len().min(cap)]
}

/// `n` rows stacked from the top of `area`, each at most `max_h` tall.
pub fn rows(area: Rect, n: usize, max_h: f64, gap: f64) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let avail = (area.height() - gap * (n as f64 - 1.0)).max(0.0);
    let h = (avail / n as f64).min(max_h);
    (0..n)
        .map(|i| {
            let y = area.y0 + i as f64 * (h + gap);
            Rect::new(area.x0, y, area.x1, y + h)
        })
        .collect()
}

/// `n` equal columns across `area`.
pub fn columns(area: Rect, n: usize, gap: f64) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let w = ((area.width() - gap * (n as f64 - 1.0)) / n as f64).max(0.0);
    (0..n)
        .map(|i| {
            let x = area.x0 + i as f64 * (w + gap);
            Rect::new(x, area.y0, x + w, area.y1)
        })
        .collect()
}

/// `n` cells in a row-major grid with `cols` columns.
pub fn grid(area: Rect, n: usize, cols: usize, max_h: f64, gap: f64) -> Vec<Rect> {
    let cols = cols.max(1);
    let row_count = n.div_ceil(cols);
    let row_rects = rows(area, row_count, max_h, gap);
    (0..n)
        .map(|i| {
            let row = row_rects[i / cols];
            columns(row, cols, gap)[i % cols]
        })
        .collect()
}

/// Horizontal growth factor for dividers and tracks, `[0, 1]`.
pub fn grow(frame: u64, start: u64, len: u64) -> f64 {
    interpolate_with(
        frame as f64,
        [start as f64, (start + len) as f64],
        [0.0, 1.0],
        InterpOpts::eased(Ease::OutCubic),
    )
}

/// Text style helper.
pub fn style(ctx: &SceneCtx<'_>, role: TextRole, align: TextAlign) -> TextStyle {
    ctx.palette.text(role, align)
}

/// Text style in a non-default color.
pub fn tinted(ctx: &SceneCtx<'_>, role: TextRole, align: TextAlign, color: Rgba8) -> TextStyle {
    TextStyle {
        color,
        ..style(ctx, role, align)
    }
}

/// Hairline separator from `x0` to `x1` at height `y`.
pub fn divider(id: impl Into<String>, x0: f64, x1: f64, y: f64, ctx: &SceneCtx<'_>) -> VisualNode {
    VisualNode::shape(
        id,
        Rect::new(x0, y - 0.5, x1.max(x0), y + 0.5),
        Shape::Line {
            from: Point::new(x0, y),
            to: Point::new(x1.max(x0), y),
            width: 1.0,
        },
        ctx.palette.muted.fade(0.4),
    )
}

/// "Generated by" footer anchored to the bottom of the region.
pub fn footer(frame: u64, ctx: &SceneCtx<'_>) -> VisualNode {
    let (f0, f1) = ctx.footer.window(ctx.duration);
    let opacity = interpolate(frame as f64, [f0 as f64, f1 as f64], [0.0, 1.0]);
    let r = ctx.region;
    VisualNode::text(
        "footer",
        Rect::new(r.x0, r.y1 - 20.0, r.x1, r.y1),
        ctx.footer.text.as_str(),
        style(ctx, TextRole::Footer, TextAlign::Center),
    )
    .with_opacity(opacity)
    .with_z(5)
}

/// Runs `f` with a context over the default 960x540 content region.
#[cfg(test)]
pub(crate) fn with_test_ctx<R>(duration: u64, f: impl FnOnce(&SceneCtx<'_>) -> R) -> R {
    let palette = Palette::default();
    let footer = FooterTiming::default();
    let ctx = SceneCtx {
        fps: Fps::default(),
        duration,
        region: Rect::new(130.0, 38.0, 830.0, 508.0),
        palette: &palette,
        footer: &footer,
    };
    f(&ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/common.rs"]
mod tests;
