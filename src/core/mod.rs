pub mod archive;
pub mod batch;
pub mod convert;
pub mod encode;
pub mod extract;

pub use crate::domain::model::{ConvertedFile, VisitRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
