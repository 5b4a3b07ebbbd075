use crate::core::{ConfigProvider, UploadJob};
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{
    validate_endpoint, validate_header_value, validate_output_name, validate_path,
    validate_required_field, validate_unique_names, validate_url, Validate,
};
#[cfg(feature = "cli")]
use crate::CliConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub target: TargetConfig,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub uploads: Vec<UploadJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub preflight: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub echo: Option<bool>,
}

impl PlanConfig {
    /// 從 TOML 檔案載入上傳計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| SmokeError::ConfigError {
            message: format!("Cannot read plan file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析上傳計畫
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 計畫檔沒寫的部分由命令列補上；旗標 `--preflight`、`--no-echo` 一律生效
    #[cfg(feature = "cli")]
    pub fn merge_cli(&mut self, cli: &CliConfig) {
        self.target.api_key.get_or_insert_with(|| cli.api_key.clone());
        if cli.preflight {
            self.target.preflight = Some(true);
        }

        let output = self.output.get_or_insert(OutputConfig {
            path: None,
            echo: None,
        });
        output.path.get_or_insert_with(|| cli.output_path.clone());
        if cli.no_echo {
            output.echo = Some(false);
        }
    }

    /// 替換環境變數 (例如 ${API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SmokeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for PlanConfig {
    fn validate(&self) -> Result<()> {
        validate_url("target.base_url", &self.target.base_url)?;

        let api_key = validate_required_field("target.api_key", &self.target.api_key)?;
        if api_key.contains("${") {
            return Err(SmokeError::InvalidConfigValueError {
                field: "target.api_key".to_string(),
                value: api_key.clone(),
                reason: "Environment variable is not set".to_string(),
            });
        }
        validate_header_value("target.api_key", api_key)?;

        validate_path("output.path", self.output_path())?;

        if self.uploads.is_empty() {
            return Err(SmokeError::MissingConfigError {
                field: "uploads".to_string(),
            });
        }

        validate_unique_names("uploads.name", self.uploads.iter().map(|u| u.name.as_str()))?;

        for upload in &self.uploads {
            validate_endpoint(&format!("uploads.{}.endpoint", upload.name), &upload.endpoint)?;
            validate_path(
                &format!("uploads.{}.input", upload.name),
                &upload.input.to_string_lossy(),
            )?;
            validate_output_name(&format!("uploads.{}.output", upload.name), &upload.output)?;
        }

        Ok(())
    }
}

impl ConfigProvider for PlanConfig {
    fn base_url(&self) -> &str {
        &self.target.base_url
    }

    fn api_key(&self) -> &str {
        self.target.api_key.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.path.as_deref())
            .unwrap_or(".")
    }

    fn jobs(&self) -> Vec<UploadJob> {
        self.uploads.clone()
    }

    fn preflight(&self) -> bool {
        self.target.preflight.unwrap_or(false)
    }

    fn echo_body(&self) -> bool {
        self.output.as_ref().and_then(|o| o.echo).unwrap_or(true)
    }
}
