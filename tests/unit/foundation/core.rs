use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_local_offsets() {
    let r = FrameRange::new(FrameIndex(60), FrameIndex(150)).unwrap();
    assert_eq!(r.local(FrameIndex(59)), None);
    assert_eq!(r.local(FrameIndex(60)), Some(0));
    assert_eq!(r.local(FrameIndex(65)), Some(5));
    assert_eq!(r.local(FrameIndex(150)), None);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn defaults_match_reference_deployment() {
    assert_eq!(Fps::default().as_f64(), 30.0);
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (960, 540));
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert!(t.is_identity());
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D::translate(10.0, -2.5);
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn anchored_scale_keeps_pivot_fixed() {
    let pivot = Vec2::new(480.0, 270.0);
    let t = Transform2D::uniform_scale(0.94, pivot);
    let p = t.to_affine() * Point::new(pivot.x, pivot.y);
    assert!((p.x - pivot.x).abs() < 1e-9);
    assert!((p.y - pivot.y).abs() < 1e-9);
}
