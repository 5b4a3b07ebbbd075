use crate::domain::model::UploadJob;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::validate_url;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// 轉換服務回傳的原始內容，狀態碼不做任何判斷
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub url: String,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct ConvertClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ConvertClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        validate_url("base_url", base_url)?;

        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 以 multipart/form-data 上傳 `job.input`，並讀完整個回應
    pub async fn upload(&self, job: &UploadJob) -> Result<UploadResponse> {
        // 先讀檔：檔案不存在時不會發出任何請求
        let data = tokio::fs::read(&job.input)
            .await
            .map_err(|source| SmokeError::InputFile {
                path: job.input.clone(),
                source,
            })?;

        let url = self.endpoint_url(&job.endpoint);
        tracing::debug!(
            "Uploading {} ({} bytes) as '{}' to {}",
            job.input.display(),
            data.len(),
            job.field,
            url
        );

        let part = Part::bytes(data).file_name(job.file_name());
        let form = Form::new().part(job.field.clone(), part);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|source| SmokeError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        tracing::debug!("Response status: {} ({:?})", status, content_type);

        let body = response
            .bytes()
            .await
            .map_err(|source| SmokeError::Request {
                url: url.clone(),
                source,
            })?
            .to_vec();

        Ok(UploadResponse {
            url,
            status,
            content_type,
            body,
        })
    }

    /// `GET /`：API key 正確時服務回 `OK`
    pub async fn health_check(&self) -> Result<()> {
        let url = self.endpoint_url("/");
        tracing::debug!("Health check: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|source| SmokeError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SmokeError::Request {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            return Err(SmokeError::HealthCheck {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        tracing::info!("💚 Conversion service is up ({})", body.trim());
        Ok(())
    }
}
