use crate::domain::model::{ProcessedResult, Record};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use serde_json::{Number, Value};

/// Validate a raw JSON value and apply the configured multiplier.
///
/// Fails hard with `ValidationError` when the input does not parse as a
/// record; callers are expected to have validated first, so this is a
/// contract violation rather than an expected runtime condition.
pub fn process(data: &Value, config: &impl ConfigProvider) -> Result<ProcessedResult> {
    let record = Record::parse(data)?;
    tracing::info!("Processing record: {} (value: {})", record.name, record.value);

    let multiplier = config.multiplier();
    let processed_value = multiply(&record.value, &multiplier)?;

    let result = ProcessedResult::success(&record, processed_value);
    tracing::debug!("Processing complete: {:?}", result);
    Ok(result)
}

// Integer times integer stays integer (10 * 2 == 20); anything else
// multiplies as f64 (2.5 * 3 == 7.5). i64 overflow widens to f64.
fn multiply(value: &Number, multiplier: &Number) -> Result<Number> {
    if let (Some(a), Some(b)) = (value.as_i64(), multiplier.as_i64()) {
        if let Some(product) = a.checked_mul(b) {
            return Ok(Number::from(product));
        }
    }

    let a = value.as_f64().ok_or_else(|| EtlError::ProcessingError {
        message: format!("value is not representable as f64: {}", value),
    })?;
    let b = multiplier.as_f64().ok_or_else(|| EtlError::ProcessingError {
        message: format!("multiplier is not representable as f64: {}", multiplier),
    })?;

    Number::from_f64(a * b).ok_or_else(|| EtlError::ProcessingError {
        message: format!("product is not a finite number: {} * {}", value, multiplier),
    })
}
