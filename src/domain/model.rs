use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FIELD: &str = "file";

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}

/// 一次上傳：把 `input` 送到 `endpoint`，回應存成 `output`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadJob {
    pub name: String,
    pub endpoint: String,
    pub input: PathBuf,
    pub output: String,
    #[serde(default = "default_field")]
    pub field: String,
}

impl UploadJob {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        input: impl Into<PathBuf>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            input: input.into(),
            output: output.into(),
            field: default_field(),
        }
    }

    /// multipart part 的檔名，服務端會用它命名暫存檔
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub job: String,
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes_written: usize,
    pub output_path: PathBuf,
    pub duration: Duration,
}

/// 內建的三個冒煙測試：.msg、.doc、.pptx
pub fn default_jobs(docs_dir: &Path) -> Vec<UploadJob> {
    vec![
        UploadJob::new(
            "msg",
            "/msg-to-txt",
            docs_dir.join("LamdaTest_UnitedLayer_nbarat_native_3_ekmt001_00014409.msg"),
            "test.txt",
        ),
        UploadJob::new(
            "doc",
            "/doc-to-txt",
            docs_dir.join("MystiqueAI_Partner_GTM_Framework_India.doc"),
            "test_doc.txt",
        ),
        UploadJob::new(
            "pptx",
            "/convert",
            docs_dir.join("Integreon-DataLake-Approach-Template.pptx"),
            "test_pptx.pdf",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jobs_order_and_outputs() {
        let jobs = default_jobs(Path::new("/docs"));
        let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["msg", "doc", "pptx"]);

        let outputs: Vec<&str> = jobs.iter().map(|j| j.output.as_str()).collect();
        assert_eq!(outputs, vec!["test.txt", "test_doc.txt", "test_pptx.pdf"]);

        let endpoints: Vec<&str> = jobs.iter().map(|j| j.endpoint.as_str()).collect();
        assert_eq!(endpoints, vec!["/msg-to-txt", "/doc-to-txt", "/convert"]);

        assert!(jobs.iter().all(|j| j.field == "file"));
        assert!(jobs.iter().all(|j| j.input.starts_with("/docs")));
    }

    #[test]
    fn test_file_name_from_input() {
        let job = UploadJob::new("doc", "/doc-to-txt", "/docs/report.doc", "out.txt");
        assert_eq!(job.file_name(), "report.doc");

        let job = UploadJob::new("root", "/convert", "/", "out.pdf");
        assert_eq!(job.file_name(), "root");
    }
}
