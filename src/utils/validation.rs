use crate::utils::error::{Result, SmokeError};
use reqwest::header::HeaderValue;
use std::collections::HashSet;
use std::path::{Component, Path};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SmokeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 端點必須是以 `/` 開頭的路徑，會接在 base URL 後面
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    if !endpoint.starts_with('/') {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint must be an absolute path starting with '/'".to_string(),
        });
    }
    Ok(())
}

/// API key 會原樣放進 header，不能含換行等控制字元
pub fn validate_header_value(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    HeaderValue::from_str(value).map_err(|_| SmokeError::InvalidConfigValueError {
        field: field_name.to_string(),
        // 不把 key 本身寫進錯誤訊息
        value: "<redacted>".to_string(),
        reason: "Value is not a valid HTTP header value".to_string(),
    })?;
    Ok(())
}

/// 輸出檔名必須留在輸出目錄內：不可為絕對路徑，也不可含 `..`
pub fn validate_output_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    let escapes = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Output must be a relative path inside the output directory".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        validate_non_empty_string(field_name, name)?;
        if !seen.insert(name) {
            return Err(SmokeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SmokeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SmokeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "http://localhost:80").is_ok());
        assert!(validate_url("base_url", "https://convert.example.com").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "localhost").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("endpoint", "/msg-to-txt").is_ok());
        assert!(validate_endpoint("endpoint", "convert").is_err());
        assert!(validate_endpoint("endpoint", "").is_err());
    }

    #[test]
    fn test_validate_output_name() {
        assert!(validate_output_name("output", "test.txt").is_ok());
        assert!(validate_output_name("output", "pdf/test_pptx.pdf").is_ok());
        assert!(validate_output_name("output", "/etc/passwd").is_err());
        assert!(validate_output_name("output", "../test.txt").is_err());
        assert!(validate_output_name("output", "pdf/../../test.txt").is_err());
        assert!(validate_output_name("output", "").is_err());
    }

    #[test]
    fn test_validate_header_value() {
        assert!(validate_header_value("api_key", "0f4b7a98e3c1").is_ok());
        assert!(validate_header_value("api_key", "   ").is_err());
        assert!(validate_header_value("api_key", "bad\nkey").is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("uploads.name", ["msg", "doc", "pptx"]).is_ok());
        assert!(validate_unique_names("uploads.name", ["msg", "msg"]).is_err());
        assert!(validate_unique_names("uploads.name", ["msg", ""]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("target.api_key", &missing),
            Err(SmokeError::MissingConfigError { .. })
        ));
        let present = Some("key".to_string());
        assert_eq!(validate_required_field("target.api_key", &present).unwrap(), "key");
    }
}
