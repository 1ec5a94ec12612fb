use vidscript::infrastructure::observability::TracingConfig;
use vidscript::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_values() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter(), "warn,vidscript=debug,tower_http=debug");
}

#[test]
fn given_default_config_when_created_then_environment_is_local() {
    let config = TracingConfig::default();
    assert_eq!(config.environment, "local");
    assert_eq!(config.level, "info");
}
