use std::fs;

use foldeval_config::{ConfigStore, EvalConfig};
use foldeval_test_data::TestConfigDir;

#[test]
fn serialize_then_reload_is_identity() {
    let dir = TestConfigDir::standard().unwrap();
    let config = ConfigStore::new(dir.path()).load("fid_eval").unwrap();

    let yaml = serde_yaml::to_string(&config).unwrap();
    let reparsed: EvalConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, reparsed);
}

#[test]
fn merged_record_survives_a_disk_roundtrip() {
    let dir = TestConfigDir::standard().unwrap();
    let config = ConfigStore::new(dir.path()).load("fid_eval").unwrap();

    let out = tempfile::TempDir::new().unwrap();
    let path = out.path().join("merged.yaml");
    fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

    // The merged record has no extends left; it must reload standalone.
    let reloaded = ConfigStore::load_file(&path).unwrap();
    assert_eq!(config, reloaded);
}

#[test]
fn json_rendering_roundtrips_too() {
    let dir = TestConfigDir::standard().unwrap();
    let config = ConfigStore::new(dir.path()).load("fid_eval").unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let reparsed: EvalConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, reparsed);
}
