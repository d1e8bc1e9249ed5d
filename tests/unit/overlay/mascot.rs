use super::*;
use crate::{overlay::with_test_overlay, render::layout::Side};

fn square() -> Rect {
    Rect::new(12.0, 150.0, 118.0, 256.0)
}

#[test]
fn expression_is_stable_and_fits_the_kind() {
    let a = Expression::for_scene(RenderKind::Summary, "Wrap up");
    assert_eq!(a, Expression::for_scene(RenderKind::Summary, "Wrap up"));
    assert!(matches!(
        a,
        Expression::Excited | Expression::Happy | Expression::Waving
    ));
}

#[test]
fn every_title_maps_to_some_expression() {
    for title in ["", "a", "Quantum", "Año nuevo", "🚀 Launch"] {
        let e = Expression::for_scene(RenderKind::Bullets, title);
        assert!(Expression::ALL.contains(&e));
    }
}

#[test]
fn eyes_blink_every_eighty_frames() {
    with_test_overlay(Side::Left, |ctx| {
        let eye_h = |frame| {
            mascot(Expression::Happy, square(), frame, 0, ctx)
                .find("mascot/eye_l")
                .map(|n| n.rect.height())
                .unwrap_or_default()
        };
        assert!(eye_h(77) < eye_h(70) / 4.0);
        assert!(eye_h(157) < eye_h(150) / 4.0);
        assert_eq!(eye_h(10), eye_h(70));
    });
}

#[test]
fn only_waving_and_pointing_have_an_arm() {
    with_test_overlay(Side::Left, |ctx| {
        for e in Expression::ALL {
            let m = mascot(e, square(), 30, 0, ctx);
            let has_arm = m.find("mascot/arm").is_some();
            assert_eq!(
                has_arm,
                matches!(e, Expression::Waving | Expression::Pointing),
                "{e:?}"
            );
        }
    });
}

#[test]
fn pointing_arm_reaches_towards_content() {
    for (side, sign) in [(Side::Left, 1.0), (Side::Right, -1.0)] {
        with_test_overlay(side, |ctx| {
            let m = mascot(Expression::Pointing, square(), 30, 0, ctx);
            let arm = m.find("mascot/arm").expect("arm");
            match &arm.kind {
                crate::render::tree::NodeKind::Shape {
                    shape: Shape::Line { from, to, .. },
                    ..
                } => assert!((to.x - from.x) * sign > 0.0),
                other => panic!("unexpected {other:?}"),
            }
        });
    }
}

#[test]
fn hidden_before_entrance() {
    with_test_overlay(Side::Left, |ctx| {
        let m = mascot(Expression::Happy, square(), 3, 6, ctx);
        assert_eq!(m.opacity, 0.0);
        assert_eq!(m.transform.scale.x, 0.0);
    });
}
