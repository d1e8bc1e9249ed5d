use super::*;

fn node(opacity: f64) -> VisualNode {
    VisualNode::group("root", Rect::new(0.0, 0.0, 10.0, 10.0))
        .with_child(VisualNode::glyph("g", Rect::ZERO, "✦", 12.0).with_opacity(opacity))
}

#[test]
fn equal_trees_equal_fingerprints() {
    assert_eq!(fingerprint_tree(&node(0.5)), fingerprint_tree(&node(0.5)));
}

#[test]
fn any_change_changes_fingerprint() {
    let base = fingerprint_tree(&node(0.5));
    assert_ne!(base, fingerprint_tree(&node(0.51)));

    let moved = node(0.5).with_transform(Transform2D::translate(1.0, 0.0));
    assert_ne!(base, fingerprint_tree(&moved));
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_tree(&node(1.0)).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
