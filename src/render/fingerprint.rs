use crate::{
    foundation::core::{Rect, Transform2D},
    render::tree::{NodeKind, Shape, VisualNode},
};

/// 128-bit content fingerprint of a visual tree.
///
/// Two trees with equal fingerprints are, for all practical purposes, identical; the host
/// can use this to skip re-rasterizing static frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_tree(root: &VisualNode) -> FrameFingerprint {
    let mut lanes = Lanes {
        a: Fnv1a64::new(Fnv1a64::OFFSET_BASIS),
        b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
    };
    write_node(&mut lanes, root);
    FrameFingerprint {
        hi: lanes.a.finish(),
        lo: lanes.b.finish(),
    }
}

fn write_node(l: &mut Lanes, node: &VisualNode) {
    l.str(&node.id);
    write_kind(l, &node.kind);
    write_rect(l, node.rect);
    l.f64(node.opacity);
    write_transform(l, &node.transform);
    l.u64(node.z_index as i64 as u64);
    match &node.clip {
        Some(c) => {
            l.u8(1);
            for v in [c.top, c.right, c.bottom, c.left] {
                l.f64(v);
            }
        }
        None => l.u8(0),
    }
    l.u8(node.pointer_events as u8);
    l.u64(node.children.len() as u64);
    for child in &node.children {
        write_node(l, child);
    }
}

fn write_kind(l: &mut Lanes, kind: &NodeKind) {
    match kind {
        NodeKind::Group => l.u8(0),
        NodeKind::Text { text, style } => {
            l.u8(1);
            l.str(text);
            l.u8(style.role as u8);
            l.f64(style.size_px);
            l.u64(u64::from(style.weight));
            l.str(&style.color.to_hex());
            l.u8(style.align as u8);
        }
        NodeKind::Shape {
            shape,
            fill,
            stroke,
        } => {
            l.u8(2);
            write_shape(l, shape);
            l.str(&fill.to_hex());
            match stroke {
                Some(s) => {
                    l.u8(1);
                    l.str(&s.color.to_hex());
                    l.f64(s.width);
                }
                None => l.u8(0),
            }
        }
        NodeKind::Glyph { glyph, size_px } => {
            l.u8(3);
            l.str(glyph);
            l.f64(*size_px);
        }
        NodeKind::Image { source } => {
            l.u8(4);
            l.str(source);
        }
    }
}

fn write_shape(l: &mut Lanes, shape: &Shape) {
    match shape {
        Shape::Rect { corner_radius } => {
            l.u8(0);
            l.f64(*corner_radius);
        }
        Shape::Ellipse => l.u8(1),
        Shape::Line { from, to, width } => {
            l.u8(2);
            for v in [from.x, from.y, to.x, to.y, *width] {
                l.f64(v);
            }
        }
        Shape::Polygon { points } => {
            l.u8(3);
            l.u64(points.len() as u64);
            for p in points {
                l.f64(p.x);
                l.f64(p.y);
            }
        }
    }
}

fn write_rect(l: &mut Lanes, r: Rect) {
    for v in [r.x0, r.y0, r.x1, r.y1] {
        l.f64(v);
    }
}

fn write_transform(l: &mut Lanes, t: &Transform2D) {
    for c in t.to_affine().as_coeffs() {
        l.f64(c);
    }
}

struct Lanes {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Lanes {
    fn u8(&mut self, v: u8) {
        self.a.write_bytes(&[v]);
        self.b.write_bytes(&[v]);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_bytes(&v.to_le_bytes());
        self.b.write_bytes(&v.to_le_bytes());
    }

    fn f64(&mut self, v: f64) {
        self.u64(v.to_bits());
    }

    fn str(&mut self, s: &str) {
        self.u64(s.len() as u64);
        self.a.write_bytes(s.as_bytes());
        self.b.write_bytes(s.as_bytes());
    }
}

#[derive(Clone, Copy, Debug)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
