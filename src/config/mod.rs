pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Number, Value};
use std::path::Path;

/// Nested key-value settings loaded from a JSON file.
///
/// Two-tier failure policy: a missing file is expected and degrades to an
/// empty Settings with a warning, while malformed content is a hard
/// `SerializationError` that `load` propagates.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    root: Map<String, Value>,
}

impl Settings {
    /// 從 JSON 檔案載入設定
    pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Config file not found: {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;

        match value {
            Value::Object(root) => {
                tracing::info!("Configuration loaded from: {}", path.display());
                Ok(Settings { root })
            }
            _ => Err(EtlError::ConfigError {
                message: format!("config root must be a JSON object: {}", path.display()),
            }),
        }
    }

    /// Two-level lookup; never errors.
    pub fn lookup(&self, section: &str, key: &str) -> Option<&Value> {
        self.root.get(section)?.get(key)
    }

    pub fn logging(&self) -> LoggingSettings {
        self.root
            .get("logging")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

/// Fail-soft lookup: reloads the file and swallows every failure, so call
/// sites can use configuration optimistically.
pub fn get_value(section: &str, key: &str, default: Value, path: impl AsRef<Path>) -> Value {
    Settings::load(path)
        .ok()
        .and_then(|settings| settings.lookup(section, key).cloned())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            format: "compact".to_string(),
            file: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn multiplier(&self) -> Number {
        match self.lookup("processing", "default_multiplier") {
            Some(Value::Number(n)) => n.clone(),
            Some(other) => {
                tracing::warn!("default_multiplier is not numeric ({}), using 2", other);
                Number::from(2)
            }
            None => Number::from(2),
        }
    }

    fn sample_record(&self) -> Value {
        self.lookup("test_data", "valid_sample")
            .cloned()
            .unwrap_or_else(|| json!({"name": "Sample", "value": 10}))
    }
}
