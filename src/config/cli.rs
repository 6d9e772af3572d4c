use crate::core::archive::DEFAULT_ARCHIVE_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "location-etl")]
#[command(about = "Convert Google location-history JSON exports into a zipped set of CSV files")]
pub struct CliConfig {
    #[arg(required = true, help = "Location-history JSON files to convert")]
    pub inputs: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_ARCHIVE_NAME)]
    pub archive_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage during the run")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[String] {
        &self.inputs
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("inputs", &self.inputs)?;
        for input in &self.inputs {
            validation::validate_path("inputs", input)?;
        }

        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("archive_name", &self.archive_name)?;

        Ok(())
    }
}
