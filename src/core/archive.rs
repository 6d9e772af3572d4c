use crate::utils::error::{ConvertError, Result};
use std::collections::HashSet;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// Conventional name for the bundled download.
pub const DEFAULT_ARCHIVE_NAME: &str = "location_data.zip";

/// Accumulates converted files into a single in-memory zip payload.
///
/// Single use: create it, add every entry, then `finish` to take the archive
/// bytes. Entries keep insertion order.
pub struct ArchiveBuilder {
    zip: ZipWriter<std::io::Cursor<Vec<u8>>>,
    names: HashSet<String>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(std::io::Cursor::new(Vec::new())),
            names: HashSet::new(),
        }
    }

    /// Store one converted file. The entry holds the CSV text plus exactly
    /// one trailing newline. Entry names must be unique: two inputs mapping
    /// to the same derived name (`x.json` and `x.JSON`, say) are rejected
    /// instead of one silently shadowing the other inside the container.
    pub fn add_entry(&mut self, name: &str, csv: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(ConvertError::ArchiveError {
                message: format!("duplicate archive entry name: {}", name),
            });
        }

        self.zip.start_file::<_, ()>(name, FileOptions::default())?;
        self.zip.write_all(csv.as_bytes())?;
        self.zip.write_all(b"\n")?;

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Write the central directory and hand back the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
