use super::*;

#[test]
fn default_paths_match_booking_server_routes() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.create_turf_url(7), "/api/venues/7/turf/");
    assert_eq!(cfg.venue_detail_url(7), "/host/venues/7/");
    assert_eq!(cfg.csrf_field_name, "csrfmiddlewaretoken");
    assert_eq!(cfg.level(), log::Level::Info);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let cfg = AppConfig::from_json(r#"{"venue_detail_path": "/venue/{venue_id}"}"#).unwrap();
    assert_eq!(cfg.venue_detail_url(12), "/venue/12");
    assert_eq!(cfg.create_turf_path, DEFAULT_CREATE_TURF_PATH);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(AppConfig::from_json("{not json"), Err(ConfigError::InvalidJson(_))));
}

#[test]
fn from_json_rejects_unknown_fields() {
    assert!(matches!(AppConfig::from_json(r#"{"retries": 3}"#), Err(ConfigError::InvalidJson(_))));
}

#[test]
fn from_json_rejects_template_without_placeholder() {
    let err = AppConfig::from_json(r#"{"create_turf_path": "/api/turf/"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::MissingPlaceholder { field: "create_turf_path" }));
    assert_eq!(err.to_string(), "create_turf_path must contain {venue_id}");
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "loud"));
}

#[test]
fn level_accepts_case_insensitive_names() {
    let cfg = AppConfig::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_reports_no_document() {
    assert!(matches!(AppConfig::load(), Err(ConfigError::NoDocument)));
}
