use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::providers::gemini::Gemini;
use crate::providers::ollama::Ollama;
use crate::providers::Provider;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Vocabulary cache settings
    #[serde(default)]
    pub vocab: VocabConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by CORS, e.g. the dev server of the frontend
    #[serde(default = "default_frontend_origin")]
    pub frontend_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_origin: default_frontend_origin(),
        }
    }
}

/// LLM provider type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    // @provider: Google Gemini
    #[default]
    Gemini,
    // @provider: Ollama
    Ollama,
}

impl ProviderKind {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Gemini => "Gemini",
            Self::Ollama => "Ollama",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Gemini => "gemini".to_string(),
            Self::Ollama => "ollama".to_string(),
        }
    }

    // @returns: Model used when none is configured
    pub fn default_model(&self) -> String {
        match self {
            Self::Gemini => default_gemini_model(),
            Self::Ollama => default_ollama_model(),
        }
    }

    /// Whether requests need an API key
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::Gemini)
    }
}

// Implement Display trait for ProviderKind
impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ProviderKind
impl std::str::FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type", default)]
    pub provider_type: ProviderKind,

    // @field: Model name
    #[serde(default = "default_gemini_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL, empty for the provider's default
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: ProviderKind) -> Self {
        Self {
            provider_type,
            model: provider_type.default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Change the provider type, moving a default model along with it
    pub fn switch_to(&mut self, kind: ProviderKind) {
        if kind == self.provider_type {
            return;
        }
        if self.model == self.provider_type.default_model() {
            self.model = kind.default_model();
        }
        self.provider_type = kind;
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(ProviderKind::default())
    }
}

/// Translation and field-fill settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// Target language when a request names none
    #[serde(default = "default_target_language")]
    pub default_target_language: String,

    /// Temperature for dictionary field fills (0.0 to 2.0)
    #[serde(default = "default_fill_temperature")]
    pub fill_temperature: f32,

    /// Temperature for batch translation; provider default when unset
    #[serde(default)]
    pub translate_temperature: Option<f32>,

    /// Sentence count above which a batch logs a warning
    #[serde(default = "default_large_batch_warning")]
    pub large_batch_warning: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_target_language: default_target_language(),
            fill_temperature: default_fill_temperature(),
            translate_temperature: None,
            large_batch_warning: default_large_batch_warning(),
        }
    }
}

/// Vocabulary cache settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VocabConfig {
    /// Serialize concurrent fills of the same word
    #[serde(default = "default_true")]
    pub single_flight: bool,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            single_flight: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_frontend_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_ollama_model() -> String {
    "llama3".to_string()
}

fn default_target_language() -> String {
    "zh-TW".to_string()
}

fn default_fill_temperature() -> f32 {
    crate::vocab::DEFAULT_FILL_TEMPERATURE
}

fn default_large_batch_warning() -> usize {
    50
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration from a JSON file, or defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Overlay settings from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay settings from `lookup`
    ///
    /// Recognized variables: `FRONTEND_ORIGIN`, `LLM_PROVIDER`, `LLM_ENDPOINT`,
    /// `GEMINI_API_KEY` and `GEMINI_MODEL`. Empty values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(origin) = var("FRONTEND_ORIGIN") {
            self.server.frontend_origin = origin;
        }

        if let Some(kind) = var("LLM_PROVIDER") {
            self.provider.switch_to(kind.parse()?);
        }

        if let Some(endpoint) = var("LLM_ENDPOINT") {
            self.provider.endpoint = endpoint;
        }

        if self.provider.provider_type == ProviderKind::Gemini {
            if let Some(key) = var("GEMINI_API_KEY") {
                self.provider.api_key = key;
            }
            if let Some(model) = var("GEMINI_MODEL") {
                self.provider.model = model;
            }
        }

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let provider = &self.provider;

        if provider.provider_type.requires_api_key() && provider.api_key.trim().is_empty() {
            return Err(anyhow!(
                "API key is required for {} provider (set GEMINI_API_KEY)",
                provider.provider_type.display_name()
            ));
        }

        if provider.model.trim().is_empty() {
            return Err(anyhow!("Model name must not be empty"));
        }

        if !provider.endpoint.is_empty() {
            Url::parse(&provider.endpoint)
                .with_context(|| format!("Invalid provider endpoint: {}", provider.endpoint))?;
        }

        if provider.timeout_secs == 0 {
            return Err(anyhow!("Provider timeout must be at least one second"));
        }

        check_temperature("fill_temperature", self.translation.fill_temperature)?;
        if let Some(temperature) = self.translation.translate_temperature {
            check_temperature("translate_temperature", temperature)?;
        }

        Url::parse(&self.server.frontend_origin)
            .with_context(|| format!("Invalid frontend origin: {}", self.server.frontend_origin))?;

        Ok(())
    }

    /// Create the configured provider client
    pub fn build_provider(&self) -> Result<Arc<dyn Provider>> {
        let provider = &self.provider;
        let client: Arc<dyn Provider> = match provider.provider_type {
            ProviderKind::Gemini => Arc::new(Gemini::new(
                provider.api_key.clone(),
                provider.endpoint.clone(),
                provider.model.clone(),
                provider.timeout(),
            )?),
            ProviderKind::Ollama => Arc::new(Ollama::new(
                provider.endpoint.clone(),
                provider.model.clone(),
                provider.timeout(),
            )?),
        };
        Ok(client)
    }
}

fn check_temperature(name: &str, value: f32) -> Result<()> {
    if !(0.0..=2.0).contains(&value) {
        return Err(anyhow!("{} must be between 0.0 and 2.0, got {}", name, value));
    }
    Ok(())
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
            translation: TranslationConfig::default(),
            vocab: VocabConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
