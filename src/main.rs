use clap::Parser;
use location_etl::utils::{logger, validation::Validate};
use location_etl::{BatchEngine, CliConfig, LocalStorage, VisitPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting location-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let inputs = config.inputs.clone();

    // Inputs resolve against the working directory; the archive location is
    // composed from --output-path inside the pipeline.
    let storage = LocalStorage::new(".");
    let pipeline = VisitPipeline::new(storage, config);

    let engine = BatchEngine::new(pipeline).with_monitoring(monitor_enabled);

    match engine.run(&inputs).await {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!("✅ Converted {} file(s)", inputs.len());
            println!("📁 Archive saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
