pub mod client;
pub mod runner;

pub use crate::domain::model::{default_jobs, UploadJob, UploadOutcome};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
