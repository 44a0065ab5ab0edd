use super::*;

#[test]
fn empty_query_uses_defaults() {
    assert_eq!(AppConfig::from_query("").unwrap(), AppConfig::default());
    assert_eq!(AppConfig::from_query("?").unwrap(), AppConfig::default());
}

#[test]
fn defaults_are_info_and_platform_locale() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.log_level, Level::Info);
    assert_eq!(cfg.locale, None);
}

#[test]
fn parses_log_level_and_locale() {
    let cfg = AppConfig::from_query("?log=debug&lang=de-DE").unwrap();
    assert_eq!(cfg.log_level, Level::Debug);
    assert_eq!(cfg.locale.as_deref(), Some("de-DE"));
}

#[test]
fn log_level_is_case_insensitive() {
    let cfg = AppConfig::from_query("?log=WARN").unwrap();
    assert_eq!(cfg.log_level, Level::Warn);
}

#[test]
fn ignores_unknown_keys() {
    let cfg = AppConfig::from_query("?utm_source=mail&log=trace&flag").unwrap();
    assert_eq!(cfg.log_level, Level::Trace);
    assert_eq!(cfg.locale, None);
}

#[test]
fn rejects_unknown_log_level() {
    let err = AppConfig::from_query("?log=loud").unwrap_err();
    assert_eq!(err, ConfigError::LogLevel("loud".into()));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn rejects_empty_locale() {
    assert_eq!(AppConfig::from_query("?lang=").unwrap_err(), ConfigError::Empty("lang"));
}
