use super::*;

fn style() -> TextStyle {
    TextStyle {
        role: TextRole::Body,
        size_px: 20.0,
        weight: 400,
        color: Rgba8::WHITE,
        align: TextAlign::Start,
    }
}

fn sample() -> VisualNode {
    VisualNode::group("root", Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_child(
            VisualNode::group("a", Rect::new(0.0, 0.0, 50.0, 50.0))
                .with_child(VisualNode::text("a/text", Rect::ZERO, "hello", style())),
        )
        .with_child(VisualNode::glyph("b", Rect::ZERO, "✦", 12.0))
}

#[test]
fn walk_is_pre_order() {
    let tree = sample();
    let walked: Vec<&str> = tree.walk().map(|n| n.id.as_str()).collect();
    assert_eq!(walked, vec!["root", "a", "a/text", "b"]);
}

#[test]
fn find_and_text_content() {
    let tree = sample();
    assert_eq!(tree.find("a/text").and_then(|n| n.text_content()), Some("hello"));
    assert!(tree.find("missing").is_none());
    assert_eq!(tree.count(), 4);
}

#[test]
fn opacity_is_clamped() {
    let n = VisualNode::group("g", Rect::ZERO).with_opacity(1.7);
    assert_eq!(n.opacity, 1.0);
    let n = VisualNode::group("g", Rect::ZERO).with_opacity(-0.2);
    assert_eq!(n.opacity, 0.0);
    let n = VisualNode::group("g", Rect::ZERO).with_opacity(f64::NAN);
    assert_eq!(n.opacity, 0.0);
}

#[test]
fn passive_propagates_to_descendants() {
    let tree = sample().passive();
    assert!(tree.walk().all(|n| n.pointer_events == PointerEvents::None));
}

#[test]
fn zero_clip_is_dropped() {
    let n = VisualNode::group("g", Rect::ZERO).with_clip(ClipInset::default());
    assert!(n.clip.is_none());
    let n = VisualNode::group("g", Rect::ZERO).with_clip(ClipInset {
        right: 40.0,
        ..ClipInset::default()
    });
    assert_eq!(n.clip.map(|c| c.right), Some(40.0));
}

#[test]
fn serializes_with_tagged_kinds() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(v["kind"]["type"], "group");
    assert_eq!(v["children"][0]["children"][0]["kind"]["type"], "text");
    assert_eq!(v["children"][1]["kind"]["glyph"], "✦");
    assert!(v.get("transform").is_none());
    assert!(v["children"][1].get("children").is_none());
}
