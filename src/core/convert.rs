use crate::core::encode::encode_csv;
use crate::core::extract::extract_visits;
use crate::core::{ConfigProvider, ConvertedFile, Pipeline, Storage};
use crate::utils::error::{ConvertError, Result};
use regex::Regex;
use std::path::Path;

/// Per-file conversion pipeline: read, parse, flatten, encode. One instance
/// serves a whole batch; `save` writes the finished archive through the same
/// storage port.
pub struct VisitPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    name_pattern: Regex,
}

impl<S: Storage, C: ConfigProvider> VisitPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            name_pattern: Regex::new("(?i)json").unwrap(),
        }
    }

    /// Derive the archive entry name from an input path: the base name with
    /// every case-insensitive `json` substring replaced by `csv`. A name
    /// without the substring is kept as-is, extension and all.
    pub fn derive_output_name(&self, input: &str) -> String {
        let name = Path::new(input)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(input);

        self.name_pattern.replace_all(name, "csv").into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VisitPipeline<S, C> {
    async fn convert(&self, input: &str) -> Result<ConvertedFile> {
        tracing::debug!("📥 Reading {}", input);
        let raw = self.storage.read_file(input).await?;

        // Decode like a browser FileReader would: invalid bytes become
        // replacement characters and a leading byte-order mark is dropped
        // instead of failing the file.
        let text = String::from_utf8_lossy(&raw);
        let text = text.trim_start_matches('\u{feff}');

        let doc: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ConvertError::ParseError {
                message: e.to_string(),
            })?;

        let records = extract_visits(&doc)?;
        tracing::debug!("🔄 Extracted {} place visits from {}", records.len(), input);

        let csv = encode_csv(&records)?;
        let file_name = self.derive_output_name(input);

        Ok(ConvertedFile { file_name, csv })
    }

    async fn save(&self, archive: Vec<u8>) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.archive_name()
        );

        tracing::debug!(
            "💾 Writing archive ({} bytes) to {}",
            archive.len(),
            output_path
        );
        self.storage.write_file(&output_path, &archive).await?;

        Ok(output_path)
    }
}
