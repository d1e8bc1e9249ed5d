use super::*;

#[test]
fn builder_fills_indices_and_total() {
    let outline = OutlineBuilder::new("Cells")
        .scene(SceneBuilder::new(SceneKind::Title, "Cells", 60).content(["Biology 101"]))
        .scene_with_audio(
            SceneBuilder::new(SceneKind::Bullets, "Parts", 90).content(["Nucleus", "Membrane"]),
            Some("audio/1.mp3"),
        )
        .build()
        .unwrap();

    assert_eq!(outline.total_duration_in_frames, 150);
    assert_eq!(outline.scenes[0].scene_index, Some(0));
    assert_eq!(outline.scenes[1].scene_index, Some(1));
    assert_eq!(outline.audio_for(0), None);
    assert_eq!(outline.audio_for(1), Some("audio/1.mp3"));
}

#[test]
fn builder_omits_audio_when_none_bound() {
    let outline = OutlineBuilder::new("x")
        .scene(SceneBuilder::new(SceneKind::Summary, "Recap", 30))
        .build()
        .unwrap();
    assert!(outline.audio_urls.is_empty());
}

#[test]
fn builder_rejects_invalid_duration() {
    let err = OutlineBuilder::new("x")
        .scene(SceneBuilder::new(SceneKind::Title, "Bad", 0))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("durationInFrames"));
}

#[test]
fn builder_rejects_overflowing_total() {
    let err = OutlineBuilder::new("x")
        .scene(SceneBuilder::new(SceneKind::Title, "A", i64::MAX))
        .scene(SceneBuilder::new(SceneKind::Bullets, "B", i64::MAX))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("scene durations overflow"), "{err}");
}
