#[cfg(feature = "cli")]
mod cli;
pub mod storage;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
