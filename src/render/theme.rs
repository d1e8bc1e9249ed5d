use crate::{
    foundation::color::Rgba8,
    render::tree::{TextAlign, TextRole, TextStyle},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Colors used by every scene and decoration.
pub struct Palette {
    pub background: Rgba8,
    pub surface: Rgba8,
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub accent: Rgba8,
    pub text: Rgba8,
    pub muted: Rgba8,
    pub success: Rgba8,
    pub option_a: Rgba8,
    pub option_b: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x0f, 0x17, 0x2a),
            surface: Rgba8::rgb(0x1e, 0x29, 0x3b),
            primary: Rgba8::rgb(0x63, 0x66, 0xf1),
            secondary: Rgba8::rgb(0x8b, 0x5c, 0xf6),
            accent: Rgba8::rgb(0xf5, 0x9e, 0x0b),
            text: Rgba8::rgb(0xf8, 0xfa, 0xfc),
            muted: Rgba8::rgb(0x94, 0xa3, 0xb8),
            success: Rgba8::rgb(0x22, 0xc5, 0x5e),
            option_a: Rgba8::rgb(0x38, 0xbd, 0xf8),
            option_b: Rgba8::rgb(0xf4, 0x72, 0xb6),
        }
    }
}

impl Palette {
    /// Text style for `role` with the role's default size, weight and color.
    pub fn text(&self, role: TextRole, align: TextAlign) -> TextStyle {
        let (size_px, weight, color) = match role {
            TextRole::Heading => (44.0, 800, self.text),
            TextRole::Subtitle => (22.0, 500, self.muted),
            TextRole::Body => (20.0, 500, self.text),
            TextRole::Label => (18.0, 700, self.text),
            TextRole::Badge => (14.0, 700, self.text),
            TextRole::Caption => (13.0, 600, self.background),
            TextRole::Footer => (12.0, 500, self.muted),
        };
        TextStyle {
            role,
            size_px,
            weight,
            color,
            align,
        }
    }

    /// Big display heading used by title scenes.
    pub fn display(&self, align: TextAlign) -> TextStyle {
        TextStyle {
            size_px: 60.0,
            weight: 900,
            ..self.text(TextRole::Heading, align)
        }
    }
}
