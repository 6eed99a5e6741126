use crate::utils::error::{Result, TrackingError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> TrackingError {
    TrackingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// TOML 內沒被環境變數取代掉的 `${VAR}`
pub fn is_unresolved_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("${") && value.ends_with('}')
}

/// 選填憑證：空白或未解析的佔位字串都視為沒設定
pub fn usable_secret(value: Option<String>) -> Option<String> {
    value.filter(|secret| !secret.trim().is_empty() && !is_unresolved_placeholder(secret))
}

/// 必填憑證：錯誤訊息中不回顯原始值
pub fn validate_secret(field_name: &str, value: &str) -> Result<()> {
    if usable_secret(Some(value.to_string())).is_none() {
        return Err(TrackingError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_present(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

/// 上游 base URL 之後會直接接上路徑，所以不能帶 query 或 fragment
pub fn validate_base_url(field_name: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid(field_name, raw, format!("Invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            raw,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, raw, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            raw,
            "Base URL cannot carry a query string or fragment",
        ));
    }
    Ok(())
}

/// Admin API 版本：季度版 `YYYY-01|04|07|10` 或 `unstable`
pub fn validate_api_version(field_name: &str, version: &str) -> Result<()> {
    if version == "unstable" {
        return Ok(());
    }

    let quarterly = version
        .split_once('-')
        .filter(|(year, _)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        .is_some_and(|(_, month)| matches!(month, "01" | "04" | "07" | "10"));

    if !quarterly {
        return Err(invalid(
            field_name,
            version,
            "Expected a quarterly release such as 2024-01, or 'unstable'",
        ));
    }
    Ok(())
}

pub fn validate_timeout_seconds(field_name: &str, seconds: u64) -> Result<()> {
    const MAX_SECONDS: u64 = 300;

    if seconds == 0 || seconds > MAX_SECONDS {
        return Err(invalid(
            field_name,
            &seconds.to_string(),
            format!("Timeout must be between 1 and {} seconds", MAX_SECONDS),
        ));
    }
    Ok(())
}
