use crate::foundation::{
    color::Rgba8,
    core::{Point, Rect, Transform2D},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One element of a frame's visual tree.
///
/// `rect` is the layout box in the parent's coordinate space; `transform` is the animated
/// offset applied on top of it. Opacity is local: the effective opacity of a node is the
/// product of its own and all ancestors' values.
pub struct VisualNode {
    /// Identifier, unique within its scene subtree.
    pub id: String,
    /// What this node draws.
    pub kind: NodeKind,
    /// Layout box.
    pub rect: Rect,
    /// Local opacity in `[0, 1]`.
    pub opacity: f64,
    /// Animated transform applied after layout.
    #[serde(skip_serializing_if = "Transform2D::is_identity")]
    pub transform: Transform2D,
    /// Paint order among siblings (higher paints later).
    pub z_index: i32,
    /// Optional clip inset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipInset>,
    /// Whether the node participates in pointer hit-testing in interactive previews.
    pub pointer_events: PointerEvents,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Drawable content of a [`VisualNode`].
pub enum NodeKind {
    /// Pure container.
    Group,
    /// Text laid out by the host inside `rect`.
    Text {
        /// UTF-8 text.
        text: String,
        /// Typography.
        style: TextStyle,
    },
    /// Vector shape filling `rect` (or drawn from explicit points).
    Shape {
        /// Geometry.
        shape: Shape,
        /// Fill color.
        fill: Rgba8,
        /// Optional outline.
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Emoji or symbol glyph centered in `rect`.
    Glyph {
        /// Glyph text.
        glyph: String,
        /// Font size in pixels.
        size_px: f64,
    },
    /// Image resolved by the host.
    Image {
        /// Opaque image reference.
        source: String,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
/// Shape geometry.
pub enum Shape {
    /// Rounded rectangle filling `rect`.
    Rect {
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Ellipse inscribed in `rect`.
    Ellipse,
    /// Straight segment in the parent's coordinate space.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in pixels.
        width: f64,
    },
    /// Closed polygon in the parent's coordinate space.
    Polygon {
        /// Vertices.
        points: Vec<Point>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Shape outline.
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Width in pixels.
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Typography for a text node.
pub struct TextStyle {
    /// Semantic role.
    pub role: TextRole,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS-style numeric weight.
    pub weight: u16,
    /// Text color.
    pub color: Rgba8,
    /// Horizontal alignment inside `rect`.
    pub align: TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Semantic text role.
pub enum TextRole {
    /// Scene heading.
    Heading,
    /// Secondary line under a heading.
    Subtitle,
    /// Content item.
    Body,
    /// Column or group label.
    Label,
    /// Short text in a pill or circle.
    Badge,
    /// Speech bubble or thought text.
    Caption,
    /// Branding footer.
    Footer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Left.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right.
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
/// Clip inset in percent of the node's box, like CSS `clip-path: inset(...)`.
pub struct ClipInset {
    /// Top inset percent.
    pub top: f64,
    /// Right inset percent.
    pub right: f64,
    /// Bottom inset percent.
    pub bottom: f64,
    /// Left inset percent.
    pub left: f64,
}

impl ClipInset {
    /// `true` when nothing is clipped.
    pub fn is_none(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Pointer hit-testing behavior.
pub enum PointerEvents {
    /// Normal hit-testing.
    #[default]
    Auto,
    /// Transparent to the pointer.
    None,
}

impl VisualNode {
    fn new(id: impl Into<String>, kind: NodeKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
            opacity: 1.0,
            transform: Transform2D::default(),
            z_index: 0,
            clip: None,
            pointer_events: PointerEvents::Auto,
            children: Vec::new(),
        }
    }

    /// Container node.
    pub fn group(id: impl Into<String>, rect: Rect) -> Self {
        Self::new(id, NodeKind::Group, rect)
    }

    /// Text node.
    pub fn text(
        id: impl Into<String>,
        rect: Rect,
        text: impl Into<String>,
        style: TextStyle,
    ) -> Self {
        Self::new(
            id,
            NodeKind::Text {
                text: text.into(),
                style,
            },
            rect,
        )
    }

    /// Filled shape node.
    pub fn shape(id: impl Into<String>, rect: Rect, shape: Shape, fill: Rgba8) -> Self {
        Self::new(
            id,
            NodeKind::Shape {
                shape,
                fill,
                stroke: None,
            },
            rect,
        )
    }

    /// Glyph node.
    pub fn glyph(
        id: impl Into<String>,
        rect: Rect,
        glyph: impl Into<String>,
        size_px: f64,
    ) -> Self {
        Self::new(
            id,
            NodeKind::Glyph {
                glyph: glyph.into(),
                size_px,
            },
            rect,
        )
    }

    /// Image node.
    pub fn image(id: impl Into<String>, rect: Rect, source: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Image {
                source: source.into(),
            },
            rect,
        )
    }

    /// Set opacity, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the animated transform.
    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Set the paint order.
    pub fn with_z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Clip the node; an all-zero inset clears the clip.
    pub fn with_clip(mut self, clip: ClipInset) -> Self {
        self.clip = (!clip.is_none()).then_some(clip);
        self
    }

    /// Add an outline to a shape node. No-op for other kinds.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        if let NodeKind::Shape { stroke: s, .. } = &mut self.kind {
            *s = Some(stroke);
        }
        self
    }

    /// Make this node and its whole subtree transparent to the pointer.
    pub fn passive(mut self) -> Self {
        self.set_passive();
        self
    }

    fn set_passive(&mut self) {
        self.pointer_events = PointerEvents::None;
        for child in &mut self.children {
            child.set_passive();
        }
    }

    /// Append a child.
    pub fn push(&mut self, child: VisualNode) {
        self.children.push(child);
    }

    /// Append a child, builder style.
    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style.
    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Pre-order traversal of this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First node in pre-order with the given id.
    pub fn find(&self, id: &str) -> Option<&VisualNode> {
        self.walk().find(|n| n.id == id)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.walk().count()
    }

    /// Text content if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Pre-order iterator returned by [`VisualNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a VisualNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a VisualNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tree.rs"]
mod tests;
