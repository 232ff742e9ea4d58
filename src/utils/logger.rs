use crate::config::LoggingSettings;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化 CLI 日誌：主控台永遠輸出，另可依設定附加檔案輸出
pub fn init_cli_logger(verbose: bool, logging: &LoggingSettings) {
    let directive = if verbose {
        "record_etl=debug,info"
    } else {
        match logging.level.to_uppercase().as_str() {
            "DEBUG" => "record_etl=debug,info",
            "WARNING" => "record_etl=warn",
            "ERROR" => "record_etl=error",
            _ => "record_etl=info",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // logging.format 選擇輸出格式（json / full / compact）
    let console_layer = match logging.format.as_str() {
        "json" => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .json()
            .boxed(),
        "full" => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed(),
    };

    let file_layer = logging.file.as_ref().and_then(|path| {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .boxed(),
            ),
            Err(e) => {
                eprintln!("⚠️ Could not open log file {}: {}", path, e);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}
