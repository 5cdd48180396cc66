use rowplot::config::*;

#[test]
fn defaults_point_at_local_engine() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.request_timeout().as_secs(), 30);
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let mut cfg = AppConfig::default();
    cfg.api_base_url = "http://engine:9000".to_string();
    cfg.dark_mode = false;
    cfg.save_to(&path).unwrap();
    assert_eq!(AppConfig::load_from(&path).unwrap(), cfg);
}

#[test]
fn partial_file_uses_defaults_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "chart_height: 300.0\n").unwrap();
    let cfg = AppConfig::load_from(&path).unwrap();
    assert_eq!(cfg.chart_height, 300.0);
    assert_eq!(cfg.title, AppConfig::default().title);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load_from(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn env_override_replaces_url_unless_empty() {
    let mut cfg = AppConfig::default();
    cfg.apply_env_override(Some("  ".to_string()));
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    cfg.apply_env_override(None);
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    cfg.apply_env_override(Some("http://10.0.0.2:8000".to_string()));
    assert_eq!(cfg.api_base_url, "http://10.0.0.2:8000");
}

#[test]
fn default_path_save_is_picked_up_by_load() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("HOME", home.path());
    let mut cfg = AppConfig::default();
    cfg.dark_mode = false;
    cfg.save_to_default_path().unwrap();

    assert_eq!(
        AppConfig::default_path().unwrap(),
        home.path().join(".rowplot").join("config.yaml")
    );
    assert_eq!(AppConfig::load().unwrap(), cfg);
}
