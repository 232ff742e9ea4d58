use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "record-etl")]
#[command(about = "A single-shot ETL tool for JSON records")]
pub struct CliArgs {
    /// Path to the configuration file
    #[arg(long, default_value = "config.json")]
    pub config: String,

    /// Path to an input file to process
    #[arg(long)]
    pub input: Option<String>,

    /// API endpoint to query
    #[arg(long)]
    pub api: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(api) = &self.api {
            validate_url("api", api)?;
        }
        Ok(())
    }
}
