use crate::core::Storage;
use crate::utils::error::{Result, SmokeError};
use std::path::{Path, PathBuf};

/// 把回應寫到本機目錄，檔案已存在時直接覆寫
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SmokeError::OutputFile {
                    path: full_path.clone(),
                    source,
                })?;
        }

        tokio::fs::write(&full_path, data)
            .await
            .map_err(|source| SmokeError::OutputFile {
                path: full_path.clone(),
                source,
            })?;
        Ok(full_path)
    }
}
