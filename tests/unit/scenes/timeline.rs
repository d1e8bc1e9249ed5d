use super::*;
use crate::scenes::common::with_test_ctx;

fn steps(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("step {i}")).collect()
}

#[test]
fn progress_is_elapsed_over_intro_plus_steps() {
    assert_eq!(track_progress(0, 3), 0.0);
    assert_eq!(track_progress(51, 3), 1.0);
    assert_eq!(track_progress(500, 3), 1.0);
    let mid = track_progress(25, 3);
    assert!((mid - 25.0 / 51.0).abs() < 1e-12);
}

#[test]
fn empty_content_has_no_track_or_connector() {
    with_test_ctx(120, |ctx| {
        for &v in TimelineVariant::ALL {
            let tree = render(v, "History", &[], 60, ctx);
            assert_eq!(tree.children.len(), 1, "{v:?}");
        }
    });
}

#[test]
fn single_step_draws_no_track() {
    with_test_ctx(120, |ctx| {
        let tree = render(TimelineVariant::NodeTrack, "History", &steps(1), 60, ctx);
        assert!(tree.find("track").is_none());
        assert!(tree.find("step/0/node").is_some());
        let v = render(TimelineVariant::VerticalSteps, "History", &steps(1), 60, ctx);
        assert!(v.find("connector").is_none());
    });
}

#[test]
fn track_fill_grows_with_time() {
    with_test_ctx(120, |ctx| {
        let width = |f| {
            render(TimelineVariant::NodeTrack, "H", &steps(4), f, ctx)
                .find("track/fill")
                .map(|n| n.rect.width())
                .unwrap_or_default()
        };
        assert!(width(10) < width(30));
        assert!(width(30) < width(63));
        assert_eq!(width(63), width(100));
    });
}

#[test]
fn vertical_connector_grows_with_time() {
    with_test_ctx(120, |ctx| {
        let height = |f| {
            render(TimelineVariant::VerticalSteps, "H", &steps(3), f, ctx)
                .find("connector")
                .map(|n| n.rect.height())
                .unwrap_or_default()
        };
        assert!(height(5) < height(40));
    });
}

#[test]
fn card_row_has_arrows_between_cards() {
    with_test_ctx(120, |ctx| {
        let tree = render(TimelineVariant::CardRow, "H", &steps(4), 100, ctx);
        let arrows = tree.walk().filter(|n| n.id.starts_with("arrow/")).count();
        assert_eq!(arrows, 3);
        assert_eq!(
            tree.find("step/3/text").and_then(|n| n.text_content()),
            Some("step 3")
        );
    });
}

#[test]
fn nodes_pop_in_sequence() {
    with_test_ctx(120, |ctx| {
        let tree = render(TimelineVariant::NodeTrack, "H", &steps(3), 27, ctx);
        assert_eq!(tree.find("step/1/node").map(|n| n.opacity), Some(1.0));
        assert_eq!(tree.find("step/2/node").map(|n| n.opacity), Some(0.0));
    });
}
