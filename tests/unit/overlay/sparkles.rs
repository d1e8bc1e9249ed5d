use super::*;
use crate::{overlay::with_test_overlay, render::layout::Side};

fn area() -> Rect {
    Rect::new(6.0, 400.0, 124.0, 500.0)
}

#[test]
fn sparkles_stay_inside_area() {
    with_test_overlay(Side::Left, |ctx| {
        let s = sparkles(area(), 6, "Atoms", 50, 10, ctx);
        assert_eq!(s.children.len(), 6);
        for n in &s.children {
            assert!(area().contains(n.rect.origin()));
            assert!(n.rect.x1 <= area().x1 + 1e-9 && n.rect.y1 <= area().y1 + 1e-9);
            assert!((0.0..=1.0).contains(&n.opacity));
        }
    });
}

#[test]
fn positions_follow_the_seed() {
    with_test_overlay(Side::Left, |ctx| {
        let xs = |seed| {
            sparkles(area(), 4, seed, 50, 10, ctx)
                .children
                .iter()
                .map(|n| n.rect.x0)
                .collect::<Vec<_>>()
        };
        assert_eq!(xs("A"), xs("A"));
        assert_ne!(xs("A"), xs("B"));
    });
}

#[test]
fn sparkles_twinkle_over_time() {
    with_test_overlay(Side::Left, |ctx| {
        let opacity = |f| sparkles(area(), 1, "Atoms", f, 0, ctx).children[0].opacity;
        let samples: Vec<f64> = (40..80).map(opacity).collect();
        let min = samples.iter().cloned().fold(f64::MAX, f64::min);
        let max = samples.iter().cloned().fold(f64::MIN, f64::max);
        assert!(max - min > 0.2);
        assert!(min >= 0.3 - 1e-9);
    });
}
