use super::*;
use crate::outline::model::SceneKind;

fn scene(title: &str) -> Scene {
    Scene {
        kind: SceneKind::Bullets,
        title: title.to_owned(),
        content: vec![],
        narration: String::new(),
        image_url: None,
        duration_in_frames: 30,
        scene_index: None,
    }
}

#[test]
fn first_scene_is_zoom() {
    let t = assign_transitions(&[scene("Anything")]);
    assert_eq!(t, vec![TransitionKind::Zoom]);
    assert!(assign_transitions(&[]).is_empty());
}

#[test]
fn adjacent_scenes_never_share_a_transition() {
    // Identical titles maximize the chance of hash collisions.
    let scenes: Vec<Scene> = (0..64).map(|_| scene("Same")).collect();
    let t = assign_transitions(&scenes);
    for w in t.windows(2) {
        assert_ne!(w[0], w[1]);
    }

    let varied: Vec<Scene> = (0..64).map(|i| scene(&format!("Topic {}", i % 5))).collect();
    let t = assign_transitions(&varied);
    for w in t.windows(2) {
        assert_ne!(w[0], w[1]);
    }
}

#[test]
fn assignment_is_deterministic() {
    let scenes = vec![scene("Intro"), scene("Key Ideas"), scene("Recap")];
    assert_eq!(assign_transitions(&scenes), assign_transitions(&scenes));
}

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!("fade-slide".parse::<TransitionKind>().unwrap(), TransitionKind::FadeSlide);
    assert_eq!(" Wipe ".parse::<TransitionKind>().unwrap(), TransitionKind::Wipe);
    assert!("".parse::<TransitionKind>().is_err());
    assert!("spin".parse::<TransitionKind>().is_err());
}

#[test]
fn index_roundtrips() {
    for (i, k) in TransitionKind::ALL.iter().enumerate() {
        assert_eq!(k.index(), i);
    }
}
