//! Stage geometry shared by scenes and the decorative overlay.
//!
//! The canvas is split into a central content region and two side gutters. Scenes draw
//! only inside [`StageLayout::content`]; decorations draw only inside the gutters, so the
//! two layers never overlap regardless of variant.

use crate::foundation::core::{Canvas, Rect};

const GUTTER_FRAC: f64 = 0.135;
const TOP_FRAC: f64 = 0.07;
const BOTTOM_FRAC: f64 = 0.06;
const IMAGE_PANEL_FRAC: f64 = 0.32;
const PANEL_GAP: f64 = 16.0;

/// Which side gutter a scene's decorations use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even scenes decorate the left gutter, odd scenes the right one.
    pub fn for_scene(scene_index: u32) -> Self {
        if scene_index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Horizontal sign pointing from this gutter towards the content region.
    pub fn toward_content(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageLayout {
    pub canvas: Rect,
    pub content: Rect,
    pub left_gutter: Rect,
    pub right_gutter: Rect,
}

impl StageLayout {
    pub fn new(canvas: Canvas) -> Self {
        let full = canvas.rect();
        let w = full.width();
        let h = full.height();
        let gutter = (w * GUTTER_FRAC).round();
        let top = (h * TOP_FRAC).round();
        let bottom = h - (h * BOTTOM_FRAC).round();

        Self {
            canvas: full,
            content: Rect::new(gutter, top, w - gutter, bottom),
            left_gutter: Rect::new(0.0, top, gutter, bottom),
            right_gutter: Rect::new(w - gutter, top, w, bottom),
        }
    }

    pub fn gutter(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_gutter,
            Side::Right => self.right_gutter,
        }
    }
}

/// Reserves the right-hand part of `region` for an image panel.
pub fn split_image_panel(region: Rect) -> (Rect, Rect) {
    let panel_w = (region.width() * IMAGE_PANEL_FRAC).round();
    let split = region.x1 - panel_w;
    (
        Rect::new(region.x0, region.y0, split - PANEL_GAP, region.y1),
        Rect::new(split, region.y0, region.x1, region.y1),
    )
}
