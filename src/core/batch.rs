use crate::core::archive::ArchiveBuilder;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

/// Batch orchestrator: converts every input in order, bundles the results
/// into one archive, and saves it.
///
/// All-or-nothing: the first failing file abandons the batch before anything
/// is written to storage.
pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: None,
        }
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        if enabled {
            self.monitor = Some(SystemMonitor::new(enabled));
        }
        self
    }

    /// Run the conversion over `inputs`, sequentially and in the given
    /// order; the archive preserves that order. Returns the saved archive
    /// path.
    pub async fn run(&self, inputs: &[String]) -> Result<String> {
        let batch_id = format!("batch_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        tracing::info!("🚀 Starting {} ({} files)", batch_id, inputs.len());

        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Batch started");
        }

        let mut archive = ArchiveBuilder::new();

        for input in inputs {
            let start_time = Instant::now();

            let converted = match self.pipeline.convert(input).await {
                Ok(converted) => converted,
                Err(e) => {
                    tracing::error!("❌ Conversion failed for {}: {}", input, e);
                    return Err(e);
                }
            };

            if let Err(e) = archive.add_entry(&converted.file_name, &converted.csv) {
                tracing::error!("❌ Could not add {} to the archive: {}", converted.file_name, e);
                return Err(e);
            }

            tracing::info!(
                "✅ Converted: {} -> {} (duration: {:?})",
                input,
                converted.file_name,
                start_time.elapsed()
            );
        }

        let entries = archive.len();
        let payload = archive.finish()?;
        tracing::debug!("📦 Archive ready ({} entries, {} bytes)", entries, payload.len());

        let output_path = self.pipeline.save(payload).await?;
        tracing::info!("💾 Archive saved to: {}", output_path);

        if let Some(monitor) = &self.monitor {
            monitor.log_final_stats();
        }

        Ok(output_path)
    }
}
