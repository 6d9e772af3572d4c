use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Archive error: {message}")]
    ArchiveError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
