pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::storage::LocalStorage;

pub use crate::core::{archive::ArchiveBuilder, batch::BatchEngine, convert::VisitPipeline};
pub use crate::domain::model::{ConvertedFile, VisitRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::{ConvertError, Result};
