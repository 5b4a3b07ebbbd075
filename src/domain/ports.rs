use crate::domain::model::UploadJob;
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> &str;
    fn output_path(&self) -> &str;
    fn jobs(&self) -> Vec<UploadJob>;
    fn preflight(&self) -> bool;
    fn echo_body(&self) -> bool;
}
