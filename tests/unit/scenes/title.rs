use super::*;
use crate::scenes::common::with_test_ctx;

#[test]
fn every_layout_shows_the_title() {
    with_test_ctx(60, |ctx| {
        for &v in TitleVariant::ALL {
            let tree = render(v, "Cell Biology", &[], 30, ctx);
            assert_eq!(
                tree.find("heading").and_then(|n| n.text_content()),
                Some("Cell Biology"),
                "{v:?}"
            );
            assert!(tree.find("subtitle").is_none());
            assert!(tree.find("badge").is_none());
        }
    });
}

#[test]
fn subtitle_and_badge_come_from_first_two_items() {
    with_test_ctx(60, |ctx| {
        let content = vec!["An introduction".to_owned(), "Chapter 1".to_owned()];
        for &v in TitleVariant::ALL {
            let tree = render(v, "Cell Biology", &content, 40, ctx);
            assert_eq!(
                tree.find("subtitle").and_then(|n| n.text_content()),
                Some("An introduction")
            );
            assert_eq!(
                tree.find("badge/text").and_then(|n| n.text_content()),
                Some("Chapter 1")
            );
        }
    });
}

#[test]
fn blank_subtitle_is_skipped() {
    with_test_ctx(60, |ctx| {
        let content = vec!["  ".to_owned()];
        let tree = render(TitleVariant::Centered, "T", &content, 40, ctx);
        assert!(tree.find("subtitle").is_none());
    });
}

#[test]
fn badge_pops_in_after_title() {
    with_test_ctx(60, |ctx| {
        let content = vec!["sub".to_owned(), "badge".to_owned()];
        let early = render(TitleVariant::LeftAligned, "T", &content, 5, ctx);
        assert_eq!(early.find("badge").map(|n| n.opacity), Some(0.0));
        let late = render(TitleVariant::LeftAligned, "T", &content, 50, ctx);
        assert_eq!(late.find("badge").map(|n| n.opacity), Some(1.0));
    });
}
