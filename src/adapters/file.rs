use crate::domain::model::OperationResult;
use crate::utils::error::{EtlError, Result};
use serde_json::Value;
use std::path::Path;

/// Read a file into the uniform adapter envelope. Never returns an error;
/// every failure mode is folded into `success = false`.
pub fn read_json_file(path: impl AsRef<Path>) -> OperationResult {
    let path = path.as_ref();
    tracing::info!("Reading file: {}", path.display());

    if !path.exists() {
        return OperationResult::failed(format!("File not found: {}", path.display()));
    }

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Error reading file {}: {}", path.display(), e);
            return OperationResult::failed(format!("Error processing file: {}", e));
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => OperationResult::ok("File successfully processed as JSON", data),
        Err(_) => {
            // 保留原始文字讓呼叫端自行處理
            let mut result = OperationResult::failed("File content is not valid JSON");
            result.data = Value::String(text);
            result
        }
    }
}

/// Strict variant used by the file-processing path: missing files and
/// malformed JSON surface as typed errors instead of an envelope.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EtlError::NotFoundError {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&text).map_err(|e| {
        tracing::error!("Invalid JSON in file: {}, error: {}", path.display(), e);
        EtlError::SerializationError(e)
    })?;

    Ok(data)
}

/// Pretty-printed JSON write, creating parent directories as needed.
pub fn write_json_file(path: impl AsRef<Path>, data: &Value) -> Result<()> {
    let path = path.as_ref();
    tracing::info!("Saving JSON data to: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, serde_json::to_string_pretty(data)?)?;
    Ok(())
}
