use super::*;
use crate::scenes::common::with_test_ctx;

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("takeaway {i}")).collect()
}

#[test]
fn every_layout_ends_with_the_footer() {
    with_test_ctx(90, |ctx| {
        for &v in SummaryVariant::ALL {
            let tree = render(v, "Recap", &items(4), 80, ctx);
            let last = tree.children.last().expect("children");
            assert_eq!(last.id, "footer", "{v:?}");
            assert_eq!(last.opacity, 1.0);
        }
    });
}

#[test]
fn footer_is_hidden_before_its_window() {
    with_test_ctx(90, |ctx| {
        let tree = render(SummaryVariant::Checklist, "Recap", &items(2), 30, ctx);
        assert_eq!(tree.find("footer").map(|n| n.opacity), Some(0.0));
    });
}

#[test]
fn short_scene_still_shows_footer() {
    with_test_ctx(40, |ctx| {
        let tree = render(SummaryVariant::GridCards, "Recap", &items(2), 39, ctx);
        assert!(tree.find("footer").is_some_and(|n| n.opacity > 0.9));
    });
}

#[test]
fn empty_content_renders_heading_only() {
    with_test_ctx(90, |ctx| {
        for &v in SummaryVariant::ALL {
            let tree = render(v, "Recap", &[], 80, ctx);
            assert_eq!(tree.children.len(), 1, "{v:?}");
            assert!(tree.find("footer").is_none());
        }
    });
}

#[test]
fn check_marks_pop_after_their_item() {
    with_test_ctx(90, |ctx| {
        let early = render(SummaryVariant::Checklist, "Recap", &items(1), 14, ctx);
        assert_eq!(early.find("item/0/check").map(|n| n.opacity), Some(0.0));
        let late = render(SummaryVariant::Checklist, "Recap", &items(1), 60, ctx);
        let check = late.find("item/0/check").expect("check");
        assert_eq!(check.opacity, 1.0);
        assert!((check.transform.scale.x - 1.0).abs() < 0.05);
    });
}

#[test]
fn divided_rows_have_n_minus_one_dividers() {
    with_test_ctx(90, |ctx| {
        let tree = render(SummaryVariant::DividedRows, "Recap", &items(5), 80, ctx);
        assert_eq!(tree.walk().filter(|n| n.id.starts_with("divider/")).count(), 4);
    });
}
