pub mod cli;
pub mod plan_config;

#[cfg(feature = "cli")]
use crate::core::{default_jobs, ConfigProvider, UploadJob};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_header_value, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:80";
pub const DEFAULT_API_KEY: &str =
    "0f4b7a98e3c14f66b7d3a9c1e8f2bde1c86c59d8a73245fc9edb1a7df9246c5a";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "convert-smoke")]
#[command(about = "Upload sample documents to the conversion service and save the responses")]
pub struct CliConfig {
    #[arg(long, env = "CONVERT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = "API_KEY",
        default_value = DEFAULT_API_KEY,
        hide_default_value = true,
        hide_env_values = true
    )]
    pub api_key: String,

    #[arg(
        long,
        env = "CONVERT_DOCS_DIR",
        default_value = ".",
        help = "Directory holding the sample documents"
    )]
    pub docs_dir: PathBuf,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "TOML plan file replacing the built-in uploads")]
    pub plan: Option<PathBuf>,

    #[arg(long, help = "Probe GET / before uploading")]
    pub preflight: bool,

    #[arg(long, help = "Do not print response bodies")]
    pub no_echo: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_header_value("api_key", &self.api_key)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn jobs(&self) -> Vec<UploadJob> {
        default_jobs(&self.docs_dir)
    }

    fn preflight(&self) -> bool {
        self.preflight
    }

    fn echo_body(&self) -> bool {
        !self.no_echo
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_service() {
        let config = CliConfig::try_parse_from(["convert-smoke"]).unwrap();
        assert_eq!(config.output_path, ".");
        assert!(config.echo_body());
        assert!(!config.preflight());
        assert_eq!(config.jobs().len(), 3);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::try_parse_from([
            "convert-smoke",
            "--base-url",
            "http://127.0.0.1:8080",
            "--api-key",
            "abc",
            "--docs-dir",
            "/samples",
            "--no-echo",
            "--preflight",
        ])
        .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_key(), "abc");
        assert!(!config.echo_body());
        assert!(config.preflight());
        assert!(config.jobs()[0].input.starts_with("/samples"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config =
            CliConfig::try_parse_from(["convert-smoke", "--base-url", "localhost:80"]).unwrap();
        assert!(config.validate().is_err());
    }
}
