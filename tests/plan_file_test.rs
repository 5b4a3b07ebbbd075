use anyhow::Result;
use doc_convert_smoke::utils::validation::Validate;
use doc_convert_smoke::{ConfigProvider, LocalStorage, PlanConfig, SmokeRunner};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_plan_file_drives_uploads() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let docs = temp_dir.path().join("docs");
    let out = temp_dir.path().join("out");
    std::fs::create_dir_all(&docs)?;
    std::fs::write(docs.join("sheet.xlsx"), b"PK sheet")?;

    let server = MockServer::start();
    std::env::set_var("DOC_CONVERT_SMOKE_PLAN_KEY", "plan-key");

    let normalized = |p: &std::path::Path| p.to_string_lossy().replace('\\', "/");
    let plan_content = format!(
        r#"
[target]
base_url = "{}"
api_key = "${{DOC_CONVERT_SMOKE_PLAN_KEY}}"
preflight = true

[output]
path = "{}"
echo = false

[[uploads]]
name = "xlsx"
endpoint = "/convert"
input = "{}"
output = "sheet.pdf"
"#,
        server.base_url(),
        normalized(&out),
        normalized(&docs.join("sheet.xlsx"))
    );
    let plan_path = temp_dir.path().join("smoke.toml");
    tokio::fs::write(&plan_path, plan_content).await?;

    let health = server.mock(|when, then| {
        when.method(GET).path("/").header("x-api-key", "plan-key");
        then.status(200).body("OK");
    });
    let convert = server.mock(|when, then| {
        when.method(POST)
            .path("/convert")
            .header("x-api-key", "plan-key")
            .body_contains("filename=\"sheet.xlsx\"");
        then.status(200).body("%PDF-sheet");
    });

    let plan = PlanConfig::from_file(&plan_path)?;
    plan.validate()?;
    assert!(plan.preflight());
    assert!(!plan.echo_body());

    let storage = LocalStorage::new(plan.output_path().to_string());
    let runner = SmokeRunner::new(storage, plan)?;
    let outcomes = runner.run().await?;

    health.assert();
    convert.assert();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(std::fs::read(out.join("sheet.pdf"))?, b"%PDF-sheet");

    Ok(())
}

#[test]
fn test_missing_plan_file_is_config_error() {
    let err = PlanConfig::from_file("/no/such/plan.toml").unwrap_err();
    assert!(matches!(
        err,
        doc_convert_smoke::SmokeError::ConfigError { .. }
    ));
}
