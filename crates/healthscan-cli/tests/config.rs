use healthscan_cli::config::{load_config, migrate, save_config, HealthscanConfig, CURRENT_VERSION};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.analysis.min_probability, 20);
    assert_eq!(config.analysis.max_conditions, 5);
    assert!(!config.analysis.reject_unknown_ids);
    assert_eq!(config.taxonomy_path, None);
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut config = HealthscanConfig::default();
    config.analysis.min_probability = 40;
    config.analysis.reject_unknown_ids = true;
    config.taxonomy_path = Some("/opt/healthscan/taxonomy.json".into());
    save_config(&config, &path).unwrap();

    let loaded = load_config(&path).unwrap();
    // Saving always stamps the current version.
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.analysis, config.analysis);
    assert_eq!(loaded.taxonomy_path, config.taxonomy_path);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&HealthscanConfig::current(), &path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "min_probability": 30, "max_conditions": 3, "taxonomy_path": "custom.json" }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.analysis.min_probability, 30);
    assert_eq!(config.analysis.max_conditions, 3);
    assert_eq!(config.taxonomy_path.as_deref(), Some("custom.json".as_ref()));
}

#[test]
fn migration_merges_into_existing_analysis_block() {
    let json = serde_json::json!({
        "min_probability": 10,
        "analysis": { "reject_unknown_ids": true }
    });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(
        migrated,
        serde_json::json!({
            "config_version": 1,
            "analysis": { "reject_unknown_ids": true, "min_probability": 10 }
        })
    );
}

#[test]
fn current_config_is_left_alone() {
    let json = serde_json::json!({ "config_version": 1, "analysis": { "max_conditions": 2 } });
    assert_eq!(migrate(json.clone(), 1).unwrap(), json);
}

#[test]
fn newer_version_is_rejected() {
    let err = migrate(serde_json::json!({ "config_version": 99 }), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2, 3]), 0).is_err());
}

#[test]
fn out_of_range_settings_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1, "analysis": { "max_conditions": 0 } }"#)
        .unwrap();

    assert!(load_config(&path).is_err());
}
