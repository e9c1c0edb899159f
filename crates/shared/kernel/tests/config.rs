use std::fs;
use std::io::Write;
use velo_domain::features::FeatureSet;
use velo_kernel::config::{ExperimentsConfig, load_config};

#[test]
fn config_defaults_to_no_features() {
    let cfg = ExperimentsConfig::default();
    assert!(cfg.experimental_features.is_empty());
    assert_eq!(cfg.feature_set(), FeatureSet::empty());
}

#[test]
fn loads_configuration_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("configuration.json");
    let mut file = fs::File::create(&path).expect("create configuration.json");
    file.write_all(br#"{ "experimental_features": ["exp_text_node", "exp_unfair_lock"] }"#)
        .expect("write configuration.json");

    let cfg: ExperimentsConfig =
        load_config(Some(dir.path().join("configuration"))).expect("load config");

    assert_eq!(cfg.experimental_features.len(), 2);
    assert_eq!(cfg.feature_set(), FeatureSet::TEXT_NODE | FeatureSet::UNFAIR_LOCK);
}

#[test]
fn unknown_feature_names_do_not_fail_the_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("configuration.json");
    fs::write(&path, br#"{ "experimental_features": ["exp_text_node", "exp_hologram_nodes"] }"#)
        .expect("write configuration.json");

    let cfg: ExperimentsConfig =
        load_config(Some(dir.path().join("configuration"))).expect("load config");

    // The unknown name survives the file load but resolves to no bits.
    assert_eq!(cfg.experimental_features.len(), 2);
    assert_eq!(cfg.feature_set(), FeatureSet::TEXT_NODE);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result: Result<ExperimentsConfig, _> = load_config(Some(dir.path().join("nope")));
    assert!(result.is_err());
}

#[test]
fn deserializes_from_raw_json() {
    let cfg: ExperimentsConfig =
        serde_json::from_str(r#"{ "experimental_features": ["exp_graphics_contexts"] }"#)
            .expect("config deserialize");
    assert_eq!(cfg.feature_set(), FeatureSet::GRAPHICS_CONTEXTS);
}
