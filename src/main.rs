use clap::Parser;
use record_etl::core::pipeline;
use record_etl::utils::{logger, validation::Validate};
use record_etl::{CliArgs, Settings};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 載入設定，失敗時直接以代碼 1 結束
    let settings = match Settings::load(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose, &settings.logging());

    tracing::info!("Starting record-etl CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 驗證參數
    if let Err(e) = args.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match pipeline::run(&args, &settings).await {
        Ok(result) => {
            tracing::info!("✅ Pipeline completed");
            match serde_json::to_string_pretty(&result) {
                Ok(rendered) => println!("Result: {}", rendered),
                Err(_) => println!("Result: {:?}", result),
            }
        }
        Err(e) => {
            tracing::error!("❌ Pipeline failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
