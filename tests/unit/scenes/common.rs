use super::*;

#[test]
fn anchored_footer_keeps_fixed_window_for_long_scenes() {
    let f = FooterTiming::default();
    assert_eq!(f.window(90), (55, 70));
    assert_eq!(f.window(70), (55, 70));
}

#[test]
fn anchored_footer_slides_to_scene_end_for_short_scenes() {
    let f = FooterTiming::default();
    assert_eq!(f.window(40), (25, 40));
    assert_eq!(f.window(10), (0, 10));
}

#[test]
fn absolute_footer_ignores_duration() {
    let f = FooterTiming {
        mode: FooterMode::Absolute,
        ..FooterTiming::default()
    };
    assert_eq!(f.window(40), (55, 70));
}

#[test]
fn reveal_is_hidden_before_start_and_visible_from_start() {
    let fps = Fps::default();
    let before = reveal(11, 12, fps);
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.offset, REVEAL_RISE_PX);

    let at = reveal(12, 12, fps);
    assert!(at.opacity > 0.0);

    let late = reveal(200, 12, fps);
    assert_eq!(late.opacity, 1.0);
    assert!(late.offset.abs() < 0.5);
    assert!((late.scale - 1.0).abs() < 0.01);
}

#[test]
fn rows_stack_without_overlap_and_respect_max_height() {
    let area = Rect::new(0.0, 0.0, 100.0, 400.0);
    let r = rows(area, 3, 50.0, 10.0);
    assert_eq!(r.len(), 3);
    assert!(r.iter().all(|x| x.height() <= 50.0));
    assert!(r[0].y1 <= r[1].y0 && r[1].y1 <= r[2].y0);
    assert!(rows(area, 0, 50.0, 10.0).is_empty());
}

#[test]
fn rows_shrink_to_fit() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    let r = rows(area, 4, 50.0, 10.0);
    assert!(r[3].y1 <= 100.0 + 1e-9);
}

#[test]
fn grid_is_row_major() {
    let area = Rect::new(0.0, 0.0, 200.0, 300.0);
    let g = grid(area, 5, 2, 80.0, 10.0);
    assert_eq!(g.len(), 5);
    assert_eq!(g[4].x0, g[0].x0);
    assert!(g[4].y0 > g[2].y0);
    assert!(g[1].x0 > g[0].x1);
}

#[test]
fn capped_trims_only_the_tail() {
    let items: Vec<String> = (0..8).map(|i| i.to_string()).collect();
    let c = capped(&items, 6);
    assert_eq!(c.len(), 6);
    assert_eq!(c[0], "0");
    assert_eq!(c[5], "5");
    assert_eq!(capped(&items[..2], 6).len(), 2);
}

#[test]
fn heading_sits_above_body() {
    let (h, b) = split_heading(Rect::new(0.0, 0.0, 100.0, 400.0));
    assert!(h.y1 < b.y0);
    assert_eq!(b.y1, 400.0);
}

#[test]
fn footer_fades_in_over_its_window() {
    with_test_ctx(90, |ctx| {
        assert_eq!(footer(55, ctx).opacity, 0.0);
        assert_eq!(footer(70, ctx).opacity, 1.0);
        assert_eq!(
            footer(70, ctx).text_content(),
            Some("Generated by AI Study Tools")
        );
    });
}

#[test]
fn heading_carries_title_and_underline() {
    with_test_ctx(90, |ctx| {
        let h = heading("Hello", Rect::new(0.0, 0.0, 400.0, 60.0), 0, ctx, TextAlign::Start);
        assert_eq!(h.find("heading/text").and_then(|n| n.text_content()), Some("Hello"));
        assert!(h.find("heading/underline").is_some());
    });
}
