use super::*;
use crate::scenes::common::with_test_ctx;

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item {i}")).collect()
}

#[test]
fn halves_split_at_ceiling() {
    let five = items(5);
    let (a, b) = split_halves(&five);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 2);
    assert_eq!(b[0], "item 3");

    let (a, b) = split_halves(&[]);
    assert!(a.is_empty() && b.is_empty());

    let one = items(1);
    let (a, b) = split_halves(&one);
    assert_eq!((a.len(), b.len()), (1, 0));
}

#[test]
fn empty_content_renders_heading_only() {
    with_test_ctx(90, |ctx| {
        for &v in ComparisonVariant::ALL {
            let tree = render(v, "A vs B", &[], 60, ctx);
            assert_eq!(tree.children.len(), 1, "{v:?}");
            assert!(tree.find("option_a").is_none());
            assert!(tree.find("vs").is_none());
        }
    });
}

#[test]
fn single_item_renders_only_option_a() {
    with_test_ctx(90, |ctx| {
        for &v in ComparisonVariant::ALL {
            let tree = render(v, "A vs B", &items(1), 60, ctx);
            assert!(
                tree.walk().any(|n| n.text_content() == Some("Option A")),
                "{v:?}"
            );
            assert!(!tree.walk().any(|n| n.text_content() == Some("Option B")));
            assert!(tree.find("vs").is_none());
            assert!(tree.find("column_divider").is_none());
        }
    });
}

#[test]
fn versus_badge_needs_both_sides() {
    with_test_ctx(90, |ctx| {
        let tree = render(ComparisonVariant::VersusCards, "A vs B", &items(4), 60, ctx);
        let vs = tree.find("vs").expect("vs badge");
        assert_eq!(vs.opacity, 1.0);
        assert_eq!(tree.find("vs/text").and_then(|n| n.text_content()), Some("VS"));

        let early = render(ComparisonVariant::VersusCards, "A vs B", &items(4), 5, ctx);
        assert_eq!(early.find("vs").map(|n| n.opacity), Some(0.0));
    });
}

#[test]
fn items_keep_their_side_and_order() {
    with_test_ctx(90, |ctx| {
        let tree = render(ComparisonVariant::Table, "A vs B", &items(4), 80, ctx);
        assert_eq!(
            tree.find("option_a/item/1").and_then(|n| n.text_content()),
            Some("item 1")
        );
        assert_eq!(
            tree.find("option_b/item/0").and_then(|n| n.text_content()),
            Some("item 2")
        );
    });
}

#[test]
fn content_is_capped_before_splitting() {
    with_test_ctx(90, |ctx| {
        let tree = render(ComparisonVariant::StackedGroups, "A vs B", &items(12), 80, ctx);
        assert!(tree.find("option_a/item/3").is_some());
        assert!(tree.find("option_a/item/4").is_none());
        assert!(tree.find("option_b/item/3").is_some());
        assert!(tree.find("option_b/item/4").is_none());
    });
}
