pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, plan_config::PlanConfig};
pub use crate::core::{client::ConvertClient, runner::SmokeRunner};
pub use crate::core::{default_jobs, ConfigProvider, UploadJob, UploadOutcome};
pub use crate::utils::error::{Result, SmokeError};
