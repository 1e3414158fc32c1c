use stainlab_core::config::{AnalysisConfig, SelectorConfig, StainlabConfig};
use stainlab_core::error::StainlabError;

#[test]
fn test_defaults() {
    let c = StainlabConfig::default();
    assert_eq!(c.analysis.threshold, 127);
    assert_eq!(c.analysis.slots, 3);
    assert_eq!(c.analysis.thumbnail_size, 200);
    assert_eq!(c.selector.default_side, 200);
    assert_eq!(c.selector.min_side, 20);
    assert_eq!(c.selector.max_side, 2000);
    assert_eq!(c.selector.initial_viewport, [800, 600]);
    assert!(c.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let mut c = StainlabConfig::default();
    c.analysis.threshold = 90;
    c.selector.default_side = 150;

    let text = c.to_toml().unwrap();
    let parsed = StainlabConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, c);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed = StainlabConfig::from_toml_str("[analysis]\nthreshold = 100\n").unwrap();
    assert_eq!(parsed.analysis.threshold, 100);
    assert_eq!(parsed.analysis.slots, AnalysisConfig::default().slots);
    assert_eq!(parsed.selector, SelectorConfig::default());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(
        StainlabConfig::from_toml_str("").unwrap(),
        StainlabConfig::default()
    );
}

#[test]
fn test_malformed_toml_rejected() {
    let err = StainlabConfig::from_toml_str("[analysis\nthreshold = ").unwrap_err();
    assert!(matches!(err, StainlabError::Config(_)));

    // Threshold must fit in a byte
    assert!(StainlabConfig::from_toml_str("[analysis]\nthreshold = 300\n").is_err());
}

#[test]
fn test_invalid_ranges_rejected() {
    let cases = [
        "[analysis]\nslots = 0\n",
        "[selector]\nmin_side = 0\n",
        "[selector]\nmin_side = 500\nmax_side = 100\n",
        "[selector]\ndefault_side = 5000\n",
    ];
    for text in cases {
        assert!(
            matches!(StainlabConfig::from_toml_str(text), Err(StainlabError::Config(_))),
            "{text}"
        );
    }
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stainlab.toml");
    std::fs::write(&path, "[selector]\ndefault_side = 64\n").unwrap();

    let c = StainlabConfig::load(&path).unwrap();
    assert_eq!(c.selector.default_side, 64);

    let missing = StainlabConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, StainlabError::UnreadableFile { .. }));
}
