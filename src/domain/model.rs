use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 已通過驗證的單筆資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub value: Number,
}

impl Record {
    /// Parse and validate a raw JSON value at the boundary. All shape
    /// violations come back as `ValidationError` naming the failed rule.
    pub fn parse(data: &Value) -> Result<Record> {
        let obj = data.as_object().ok_or_else(|| EtlError::ValidationError {
            message: "input is not a JSON object".to_string(),
        })?;

        let name = match obj.get("name") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::String(_)) => {
                return Err(EtlError::ValidationError {
                    message: "name must not be empty".to_string(),
                })
            }
            Some(_) => {
                return Err(EtlError::ValidationError {
                    message: "name must be a string".to_string(),
                })
            }
            None => {
                return Err(EtlError::ValidationError {
                    message: "missing required field: name".to_string(),
                })
            }
        };

        let value = match obj.get("value") {
            Some(Value::Number(n)) => n.clone(),
            Some(_) => {
                return Err(EtlError::ValidationError {
                    message: "value must be numeric".to_string(),
                })
            }
            None => {
                return Err(EtlError::ValidationError {
                    message: "missing required field: value".to_string(),
                })
            }
        };

        if value.as_f64().map_or(false, |v| v < 0.0) {
            return Err(EtlError::ValidationError {
                message: "value must be >= 0".to_string(),
            });
        }

        Ok(Record { name, value })
    }
}

/// Single boolean gate over a raw JSON value. True iff `name` is a
/// non-empty string and `value` is a number >= 0.
pub fn validate(data: &Value) -> bool {
    Record::parse(data).is_ok()
}

/// Uniform envelope returned by every source adapter; transport-specific
/// success and failure never escape as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl OperationResult {
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            status_code: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Value::Null,
            status_code: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Success,
    Processed,
    Error,
}

/// 管道的最終輸出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub status: ProcessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_value: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProcessedResult {
    pub fn success(record: &Record, processed_value: Number) -> Self {
        Self {
            status: ProcessStatus::Success,
            original_value: Some(record.value.clone()),
            processed_value: Some(processed_value),
            name: Some(record.name.clone()),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ProcessStatus::Error,
            original_value: None,
            processed_value: None,
            name: None,
            message: Some(message.into()),
        }
    }
}
