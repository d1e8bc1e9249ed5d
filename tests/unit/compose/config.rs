use super::*;
use crate::{foundation::color::Rgba8, scenes::common::FooterMode};

#[test]
fn empty_object_is_the_default_config() {
    let cfg = CompositionConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, CompositionConfig::default());
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.canvas, Canvas { width: 960, height: 540 });
    assert_eq!(cfg.footer.mode, FooterMode::Anchored);
    assert_eq!(cfg.validation, ValidationMode::Strict);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = CompositionConfig::from_json_str(
        r##"{
            "fps": { "num": 24, "den": 1 },
            "transition": { "enter_frames": 20 },
            "palette": { "accent": "#ff0000" },
            "validation": "lenient"
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.fps.num, 24);
    assert_eq!(cfg.transition.enter_frames, 20);
    assert_eq!(cfg.transition.exit_frames, 10);
    assert_eq!(cfg.palette.accent, Rgba8::rgb(0xff, 0, 0));
    assert_eq!(cfg.palette.background, Palette::default().background);
    assert_eq!(cfg.validation, ValidationMode::Lenient);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(CompositionConfig::from_json_str(r#"{"fps":{"num":0,"den":1}}"#).is_err());
    assert!(CompositionConfig::from_json_str(r#"{"canvas":{"width":0,"height":540}}"#).is_err());
    assert!(CompositionConfig::from_json_str(r#"{"footer":{"start":70,"end":55}}"#).is_err());
    assert!(CompositionConfig::from_json_str(r#"{"palette":{"text":"blue"}}"#).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = CompositionConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"), "{err}");
}
