use super::*;

const T: TransitionTiming = TransitionTiming {
    enter_frames: 14,
    exit_frames: 10,
};

fn env(kind: TransitionKind, local: u64) -> Envelope {
    envelope(kind, local, 90, T, Vec2::new(480.0, 270.0))
}

#[test]
fn phases_partition_the_scene() {
    assert_eq!(phase(0, 90, T), Phase::Entering);
    assert_eq!(phase(13, 90, T), Phase::Entering);
    assert_eq!(phase(14, 90, T), Phase::Steady);
    assert_eq!(phase(79, 90, T), Phase::Steady);
    assert_eq!(phase(80, 90, T), Phase::Exiting);
    assert_eq!(phase(89, 90, T), Phase::Exiting);
    // Overlapping windows: entering wins.
    assert_eq!(phase(5, 12, T), Phase::Entering);
}

#[test]
fn opacity_is_min_of_fades() {
    for kind in TransitionKind::ALL {
        assert_eq!(env(kind, 0).opacity, 0.0);
        assert_eq!(env(kind, 7).opacity, 0.5);
        assert_eq!(env(kind, 40).opacity, 1.0);
        assert!((env(kind, 85).opacity - 0.5).abs() < 1e-12);
        assert!(env(kind, 89).opacity > 0.0);
    }
}

#[test]
fn steady_state_is_identity() {
    for kind in TransitionKind::ALL {
        let e = env(kind, 40);
        assert!(e.transform.to_affine() == crate::foundation::core::Affine::IDENTITY);
        assert!(e.clip.is_none());
    }
}

#[test]
fn zoom_scales_in_and_out() {
    let start = env(TransitionKind::Zoom, 0).transform.scale.x;
    assert!((start - 0.94).abs() < 1e-12);
    let end = envelope(TransitionKind::Zoom, 90, 90, T, Vec2::ZERO).transform.scale.x;
    assert!((end - 1.04).abs() < 1e-12);
}

#[test]
fn slides_enter_and_exit_in_opposite_directions() {
    let a = env(TransitionKind::SlideLeft, 0).transform.translate.x;
    let b = env(TransitionKind::SlideLeft, 89).transform.translate.x;
    assert!(a > 0.0 && b < 0.0);

    let a = env(TransitionKind::SlideUp, 0).transform.translate.y;
    let b = env(TransitionKind::SlideUp, 89).transform.translate.y;
    assert!(a > 0.0 && b < 0.0);

    let a = env(TransitionKind::FadeSlide, 0).transform.translate.y;
    let b = env(TransitionKind::FadeSlide, 89).transform.translate.y;
    assert!(a > b.abs());
}

#[test]
fn wipe_animates_clip_inset() {
    assert_eq!(env(TransitionKind::Wipe, 0).clip.right, 100.0);
    assert_eq!(env(TransitionKind::Wipe, 14).clip.right, 0.0);
    assert_eq!(env(TransitionKind::Wipe, 40).clip.left, 0.0);
    assert!(env(TransitionKind::Wipe, 89).clip.left > 50.0);
}

#[test]
fn envelope_is_pure() {
    for kind in TransitionKind::ALL {
        for f in [0, 3, 50, 88] {
            assert_eq!(env(kind, f), env(kind, f));
        }
    }
}
