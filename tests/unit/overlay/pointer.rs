use super::*;
use crate::overlay::with_test_overlay;

#[test]
fn four_directions_have_distinct_glyphs() {
    let glyphs: Vec<_> = [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
        .into_iter()
        .map(Direction::glyph)
        .collect();
    for (i, g) in glyphs.iter().enumerate() {
        assert!(!glyphs[..i].contains(g));
    }
}

#[test]
fn toward_content_mirrors_side() {
    assert_eq!(Direction::toward_content(Side::Left), Direction::Right);
    assert_eq!(Direction::toward_content(Side::Right), Direction::Left);
}

#[test]
fn nudge_never_points_backwards() {
    with_test_overlay(Side::Left, |ctx| {
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            for f in 30..90 {
                let h = pointing_hand(Rect::new(20.0, 250.0, 110.0, 310.0), dir, f, 24, ctx);
                assert!(h.transform.translate.dot(dir.unit()) >= -1e-9);
            }
        }
    });
}
