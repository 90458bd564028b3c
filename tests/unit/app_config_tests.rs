/*!
 * Tests for application configuration functionality
 */

use std::collections::HashMap;
use std::fs;

use note_english::app_config::{Config, LogLevel, ProviderKind};

use crate::common::{create_temp_dir, test_config};

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.frontend_origin, "http://localhost:5173");
    assert_eq!(config.provider.provider_type, ProviderKind::Gemini);
    assert_eq!(config.provider.model, "gemini-2.5-flash");
    assert_eq!(config.provider.timeout_secs, 30);
    assert_eq!(config.translation.default_target_language, "zh-TW");
    assert_eq!(config.translation.fill_temperature, 0.2);
    assert_eq!(config.translation.translate_temperature, None);
    assert!(config.vocab.single_flight);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Gemini without a key
    let mut config = Config::default();
    assert!(config.validate().is_err());

    config.provider.api_key = "key".to_string();
    assert!(config.validate().is_ok());

    config.provider.model = "  ".to_string();
    assert!(config.validate().is_err());
    config.provider.model = "gemini-2.5-flash".to_string();

    config.provider.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.provider.endpoint = "http://localhost:8080".to_string();
    assert!(config.validate().is_ok());

    config.provider.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.provider.timeout_secs = 10;

    config.translation.fill_temperature = 3.5;
    assert!(config.validate().is_err());
    config.translation.fill_temperature = 0.2;

    config.translation.translate_temperature = Some(-1.0);
    assert!(config.validate().is_err());
    config.translation.translate_temperature = Some(0.7);
    assert!(config.validate().is_ok());

    // Ollama needs no key
    let mut config = Config::default();
    config.provider.switch_to(ProviderKind::Ollama);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_load_withMissingFile_shouldReturnDefaults() {
    let dir = create_temp_dir().unwrap();
    let config = Config::load(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_withPartialFile_shouldFillDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(
        &path,
        r#"{"server": {"port": 9000}, "provider": {"type": "ollama", "model": "llama3"}, "log_level": "debug"}"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.provider.provider_type, ProviderKind::Ollama);
    assert_eq!(config.provider.model, "llama3");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.vocab.single_flight);
}

#[test]
fn test_config_load_withInvalidJson_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    fs::write(&path, "{ nope").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_config_save_thenLoad_shouldKeepValues() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("nested").join("conf.json");

    let mut config = test_config();
    config.server.port = 8123;
    config.vocab.single_flight = false;
    config.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_apply_env_withGeminiVariables_shouldOverride() {
    let mut config = Config::default();
    config
        .apply_env_with(env(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-pro"),
            ("FRONTEND_ORIGIN", "https://notes.example.com"),
        ]))
        .unwrap();

    assert_eq!(config.provider.api_key, "secret");
    assert_eq!(config.provider.model, "gemini-2.0-pro");
    assert_eq!(config.server.frontend_origin, "https://notes.example.com");
    assert!(config.validate().is_ok());
}

#[test]
fn test_apply_env_withEmptyValues_shouldKeepConfig() {
    let mut config = test_config();
    config
        .apply_env_with(env(&[("GEMINI_API_KEY", ""), ("FRONTEND_ORIGIN", "  ")]))
        .unwrap();

    assert_eq!(config, test_config());
}

#[test]
fn test_apply_env_withProviderSwitch_shouldMoveDefaultModel() {
    let mut config = Config::default();
    config
        .apply_env_with(env(&[
            ("LLM_PROVIDER", "ollama"),
            ("LLM_ENDPOINT", "http://gpu-box:11434"),
            ("GEMINI_MODEL", "ignored-for-ollama"),
        ]))
        .unwrap();

    assert_eq!(config.provider.provider_type, ProviderKind::Ollama);
    assert_eq!(config.provider.model, ProviderKind::Ollama.default_model());
    assert_eq!(config.provider.endpoint, "http://gpu-box:11434");
}

#[test]
fn test_apply_env_withUnknownProvider_shouldFail() {
    let mut config = Config::default();
    assert!(config.apply_env_with(env(&[("LLM_PROVIDER", "openai")])).is_err());
}

#[test]
fn test_build_provider_withEachKind_shouldReportName() {
    let config = test_config();
    assert_eq!(config.build_provider().unwrap().name(), "gemini");

    let mut config = test_config();
    config.provider.switch_to(ProviderKind::Ollama);
    assert_eq!(config.build_provider().unwrap().name(), "ollama");
}

#[test]
fn test_log_level_parse_shouldAcceptAliases() {
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("loud".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
}
