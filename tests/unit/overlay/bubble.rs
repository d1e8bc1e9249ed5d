use super::*;
use crate::{overlay::with_test_overlay, render::layout::Side};

#[test]
fn speech_bubble_has_body_tail_and_text() {
    with_test_overlay(Side::Left, |ctx| {
        let b = speech_bubble(Rect::new(6.0, 42.0, 124.0, 134.0), "Hi!", 40, 16, ctx);
        assert!(b.find("speech_bubble/body").is_some());
        assert!(b.find("speech_bubble/tail").is_some());
        assert_eq!(
            b.find("speech_bubble/text").and_then(|n| n.text_content()),
            Some("Hi!")
        );
        assert_eq!(b.opacity, 1.0);
    });
}

#[test]
fn thought_cloud_trails_puffs_below_body() {
    with_test_overlay(Side::Right, |ctx| {
        let rect = Rect::new(836.0, 42.0, 954.0, 134.0);
        let c = thought_cloud(rect, "Hmm...", 40, 16, ctx);
        let body = c.find("thought_cloud/body").map(|n| n.rect).expect("body");
        let puff = c.find("thought_cloud/puff/1").map(|n| n.rect).expect("puff");
        assert!(puff.y0 >= body.y1);
        assert!(puff.y1 <= rect.y1 + 1e-9);
    });
}

#[test]
fn bubble_waits_for_its_start() {
    with_test_overlay(Side::Left, |ctx| {
        let b = speech_bubble(Rect::new(6.0, 42.0, 124.0, 134.0), "Hi!", 10, 16, ctx);
        assert_eq!(b.opacity, 0.0);
    });
}
