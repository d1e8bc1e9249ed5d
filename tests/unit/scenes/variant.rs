use super::*;

#[test]
fn selection_is_deterministic() {
    for kind in [
        RenderKind::Title,
        RenderKind::Bullets,
        RenderKind::Comparison,
        RenderKind::Timeline,
        RenderKind::Summary,
    ] {
        let a = SceneVariant::select(kind, "Photosynthesis", 3);
        let b = SceneVariant::select(kind, "Photosynthesis", 3);
        assert_eq!(a, b);
        assert_eq!(a.kind(), kind);
    }
}

#[test]
fn neighbouring_scenes_with_same_title_get_different_layouts() {
    let a = SceneVariant::select(RenderKind::Bullets, "Key Ideas", 1);
    let b = SceneVariant::select(RenderKind::Bullets, "Key Ideas", 2);
    assert_ne!(a, b);
}

#[test]
fn index_follows_spread_rule() {
    let title = "Key Ideas";
    let k = key(title, "bullets");
    for idx in 0..8 {
        let expected = BulletsVariant::ALL[spread_index(&k, idx, 4) as usize];
        assert_eq!(
            SceneVariant::select(RenderKind::Bullets, title, idx),
            SceneVariant::Bullets(expected)
        );
    }
}

#[test]
fn catalog_sizes() {
    assert_eq!(TitleVariant::ALL.len(), 3);
    assert_eq!(BulletsVariant::ALL.len(), 4);
    assert_eq!(ComparisonVariant::ALL.len(), 3);
    assert_eq!(TimelineVariant::ALL.len(), 3);
    assert_eq!(SummaryVariant::ALL.len(), 3);
}

#[test]
fn display_joins_kind_and_layout() {
    let v = SceneVariant::Bullets(BulletsVariant::DotList);
    assert_eq!(v.to_string(), "bullets/dot_list");
    assert_eq!(
        serde_json::to_value(v).unwrap(),
        serde_json::json!({"kind": "bullets", "layout": "dot_list"})
    );
}
