use crate::adapters::file;
use crate::adapters::http::ApiClient;
use crate::config::cli::CliArgs;
use crate::config::Settings;
use crate::core::transform;
use crate::domain::model::{ProcessStatus, ProcessedResult};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Process a pre-shaped JSON file straight through validate + transform.
/// File inputs are expected to already carry `name`/`value`; no remapping.
pub fn process_file(path: &str, settings: &Settings) -> Result<ProcessedResult> {
    tracing::info!("Processing file: {}", path);
    let data = file::load_json(path)?;
    transform::process(&data, settings)
}

/// Remap an API response body (`title`/`id`) into a record, then validate
/// and transform. A body that fails validation becomes a status-`error`
/// result instead of a hard failure.
pub fn process_api_response(body: &Value, config: &impl ConfigProvider) -> ProcessedResult {
    tracing::info!("Processing API response");

    let extracted = json!({
        "name": body.get("title").cloned().unwrap_or(json!("Unknown")),
        "value": body.get("id").cloned().unwrap_or(json!(0)),
    });

    match transform::process(&extracted, config) {
        Ok(mut result) => {
            result.status = ProcessStatus::Processed;
            result
        }
        Err(e) => {
            tracing::error!("Error processing API response: {}", e);
            ProcessedResult::error(e.to_string())
        }
    }
}

/// Resolve exactly one record through one of three paths, in priority
/// order: input file, API endpoint, configured sample.
pub async fn run(args: &CliArgs, settings: &Settings) -> Result<ProcessedResult> {
    if let Some(input) = &args.input {
        return process_file(input, settings);
    }

    if let Some(api) = &args.api {
        tracing::info!("Querying API: {}", api);
        let client = ApiClient::new();
        let outcome = client.call(api, Method::GET, &HashMap::new(), None).await;

        if outcome.success {
            return Ok(process_api_response(&outcome.data, settings));
        }

        // 轉換階段不執行，直接回報轉接器的失敗訊息
        tracing::warn!("API request failed: {}", outcome.message);
        return Ok(ProcessedResult::error(outcome.message));
    }

    let sample = settings.sample_record();
    tracing::info!("No input given, processing sample record");
    transform::process(&sample, settings)
}
