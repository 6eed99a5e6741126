use crate::domain::model::{Courier, TrackingEvent};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const DEFAULT_GLS_COUNTRY: &str = "Poland";

/// YunExpress `TrackingDetails` 的單筆紀錄
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct YunExpressDetail {
    #[serde(default, deserialize_with = "lenient_string")]
    pub process_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub process_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub process_location: Option<String>,
}

/// GLS 公開查詢 `tuStatus[].history[]` 的單筆紀錄
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlsHistoryEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub evt_dscr: Option<String>,
    #[serde(default, deserialize_with = "lenient_address")]
    pub address: Option<GlsAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlsAddress {
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
}

/// GLS 授權 API `events[]` 的單筆紀錄
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlsApiEvent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

/// 欄位型別不符（數字、物件等）時視同缺少，不讓整包回應解析失敗
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(value)) => Some(value),
        _ => None,
    })
}

fn lenient_address<'de, D>(deserializer: D) -> Result<Option<GlsAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<serde_json::Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

pub fn from_yunexpress(detail: YunExpressDetail) -> TrackingEvent {
    TrackingEvent {
        timestamp: detail.process_date.unwrap_or_default(),
        status: detail.process_content.unwrap_or_default(),
        location: detail.process_location.unwrap_or_default(),
        courier: Courier::YunExpress,
    }
}

pub fn from_gls_history(entry: GlsHistoryEntry) -> TrackingEvent {
    let address = entry.address.unwrap_or_default();
    let city = address.city.unwrap_or_default();
    let country = address
        .country
        .filter(|country| !country.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GLS_COUNTRY.to_string());

    TrackingEvent {
        timestamp: entry.date.unwrap_or_default(),
        status: entry.evt_dscr.unwrap_or_default(),
        location: format!("{}, {}", city, country).trim().to_string(),
        courier: Courier::Gls,
    }
}

pub fn from_gls_api(event: GlsApiEvent) -> TrackingEvent {
    TrackingEvent {
        timestamp: event.timestamp.unwrap_or_default(),
        status: event.description.unwrap_or_default(),
        location: event.location.unwrap_or_default(),
        courier: Courier::Gls,
    }
}

/// 解析各家物流商的時間字串。沒有時區資訊的一律視為 UTC。
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
