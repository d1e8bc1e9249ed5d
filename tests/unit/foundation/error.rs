use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ExplainerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ExplainerError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        ExplainerError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ExplainerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ExplainerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = ExplainerError::from(e);
    assert!(matches!(err, ExplainerError::Serde(_)));
}
