use super::*;
use crate::{
    outline::model::SceneKind,
    scenes::{common::with_test_ctx, variant::BulletsVariant},
};

fn scene(image: Option<&str>) -> Scene {
    Scene {
        kind: SceneKind::Bullets,
        title: "Parts".to_owned(),
        content: vec!["a".to_owned(), "b".to_owned()],
        narration: String::new(),
        image_url: image.map(str::to_owned),
        duration_in_frames: 90,
        scene_index: Some(0),
    }
}

#[test]
fn image_gets_a_side_panel() {
    with_test_ctx(90, |ctx| {
        let v = SceneVariant::Bullets(BulletsVariant::DotList);
        let tree = render_scene(&scene(Some("img://cell.png")), v, 40, ctx);
        let image = tree.find("image/content").expect("image node");
        assert!(matches!(
            &image.kind,
            crate::render::tree::NodeKind::Image { source } if source == "img://cell.png"
        ));
        let body = tree.find("bullets").expect("body");
        assert!(body.rect.x1 < image.rect.x0);
    });
}

#[test]
fn missing_image_draws_nothing() {
    with_test_ctx(90, |ctx| {
        let v = SceneVariant::Bullets(BulletsVariant::DotList);
        for s in [scene(None), scene(Some("   "))] {
            let tree = render_scene(&s, v, 40, ctx);
            assert!(tree.find("image").is_none());
            assert_eq!(tree.find("bullets").map(|n| n.rect), Some(ctx.region));
        }
    });
}
