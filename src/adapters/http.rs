use crate::domain::model::OperationResult;
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client wrapper. This is the sole error boundary for the network:
/// transport failures and non-2xx statuses both come back as envelopes,
/// never as errors.
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        // 30 秒逾時，避免請求無限期掛住
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self { client }
    }

    pub async fn call(
        &self,
        url: &str,
        method: Method,
        headers: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> OperationResult {
        tracing::info!("Starting API request: {} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        for (key, value) in headers {
            request = request.header(key, value);
        }

        // 只有會帶主體的方法才附加 JSON payload
        let has_request_body =
            method == Method::POST || method == Method::PUT || method == Method::PATCH;
        if has_request_body {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API request error: {}", e);
                return OperationResult::failed(format!("Error making API request: {}", e));
            }
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let mut result =
                    OperationResult::failed(format!("Error reading API response: {}", e));
                result.status_code = Some(status.as_u16());
                return result;
            }
        };

        let parsed = serde_json::from_str::<Value>(&text).ok();

        let mut result = if status.is_success() {
            match parsed {
                Some(data) => OperationResult::ok("API request successful", data),
                None => OperationResult::ok(
                    "API request successful but response is not JSON",
                    Value::String(text),
                ),
            }
        } else {
            let mut result = OperationResult::failed(format!(
                "API request failed with status code: {}",
                status.as_u16()
            ));
            result.data = parsed.unwrap_or(Value::String(text));
            result
        };

        result.status_code = Some(status.as_u16());
        result
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
