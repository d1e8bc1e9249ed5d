use crate::{
    outline::model::RenderKind,
    select::hash::{key, spread_index},
};

macro_rules! variant_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn choose(title: &str, scene_index: u32, kind: RenderKind) -> Self {
                let n = Self::ALL.len() as u32;
                let i = spread_index(&key(title, kind.as_str()), scene_index, n);
                Self::ALL[i as usize]
            }
        }
    };
}

variant_enum!(
    /// Layouts for title scenes.
    TitleVariant {
        Centered => "centered",
        LeftAligned => "left_aligned",
        CircleAccent => "circle_accent",
    }
);

variant_enum!(
    /// Layouts for bullet-list scenes.
    BulletsVariant {
        NumberedCards => "numbered_cards",
        DotList => "dot_list",
        TwoColumnGrid => "two_column_grid",
        DividedRows => "divided_rows",
    }
);

variant_enum!(
    /// Layouts for comparison scenes.
    ComparisonVariant {
        VersusCards => "versus_cards",
        Table => "table",
        StackedGroups => "stacked_groups",
    }
);

variant_enum!(
    /// Layouts for timeline scenes.
    TimelineVariant {
        NodeTrack => "node_track",
        VerticalSteps => "vertical_steps",
        CardRow => "card_row",
    }
);

variant_enum!(
    /// Layouts for summary scenes.
    SummaryVariant {
        Checklist => "checklist",
        GridCards => "grid_cards",
        DividedRows => "divided_rows",
    }
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "layout", rename_all = "snake_case")]
/// The concrete layout a scene renders with.
pub enum SceneVariant {
    Title(TitleVariant),
    Bullets(BulletsVariant),
    Comparison(ComparisonVariant),
    Timeline(TimelineVariant),
    Summary(SummaryVariant),
}

impl SceneVariant {
    /// Deterministic layout for a scene, keyed on its title and kind and spread by its index
    /// so neighbouring scenes with similar titles still vary.
    pub fn select(kind: RenderKind, title: &str, scene_index: u32) -> Self {
        match kind {
            RenderKind::Title => Self::Title(TitleVariant::choose(title, scene_index, kind)),
            RenderKind::Bullets => Self::Bullets(BulletsVariant::choose(title, scene_index, kind)),
            RenderKind::Comparison => {
                Self::Comparison(ComparisonVariant::choose(title, scene_index, kind))
            }
            RenderKind::Timeline => {
                Self::Timeline(TimelineVariant::choose(title, scene_index, kind))
            }
            RenderKind::Summary => Self::Summary(SummaryVariant::choose(title, scene_index, kind)),
        }
    }

    pub fn kind(self) -> RenderKind {
        match self {
            Self::Title(_) => RenderKind::Title,
            Self::Bullets(_) => RenderKind::Bullets,
            Self::Comparison(_) => RenderKind::Comparison,
            Self::Timeline(_) => RenderKind::Timeline,
            Self::Summary(_) => RenderKind::Summary,
        }
    }

    /// Layout name without the kind prefix.
    pub fn layout(self) -> &'static str {
        match self {
            Self::Title(v) => v.as_str(),
            Self::Bullets(v) => v.as_str(),
            Self::Comparison(v) => v.as_str(),
            Self::Timeline(v) => v.as_str(),
            Self::Summary(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind().as_str(), self.layout())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/variant.rs"]
mod tests;
