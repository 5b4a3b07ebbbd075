use crate::core::client::ConvertClient;
use crate::core::{ConfigProvider, Storage, UploadJob, UploadOutcome};
use crate::utils::error::Result;
use std::time::Instant;

/// 依序執行每個上傳；任何一步失敗就中止後面的步驟
pub struct SmokeRunner<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: ConvertClient,
}

impl<S: Storage, C: ConfigProvider> SmokeRunner<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = ConvertClient::new(config.base_url(), config.api_key())?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }

    pub async fn run_job(&self, job: &UploadJob) -> Result<UploadOutcome> {
        let started = Instant::now();
        let response = self.client.upload(job).await?;

        if !response.status.is_success() {
            tracing::warn!(
                "⚠️ {} answered {} for '{}', saving the body anyway",
                response.url,
                response.status,
                job.name
            );
        }

        if self.config.echo_body() {
            println!("{}", response.body.escape_ascii());
        }

        // 回應已完整讀取後才建立輸出檔
        let output_path = self.storage.write_file(&job.output, &response.body).await?;

        tracing::info!(
            "💾 {}: {} bytes -> {}",
            job.name,
            response.body.len(),
            output_path.display()
        );

        Ok(UploadOutcome {
            job: job.name.clone(),
            url: response.url,
            status: response.status.as_u16(),
            content_type: response.content_type,
            bytes_written: response.body.len(),
            output_path,
            duration: started.elapsed(),
        })
    }

    pub async fn run(&self) -> Result<Vec<UploadOutcome>> {
        if self.config.preflight() {
            self.client.health_check().await?;
        }

        let jobs = self.config.jobs();
        let total = jobs.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, job) in jobs.iter().enumerate() {
            tracing::info!(
                "▶️ [{}/{}] {} -> {}",
                index + 1,
                total,
                job.input.display(),
                job.endpoint
            );

            let outcome = self.run_job(job).await.inspect_err(|e| {
                tracing::error!("❌ '{}' failed, skipping remaining uploads: {}", job.name, e);
            })?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
