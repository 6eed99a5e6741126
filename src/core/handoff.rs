use crate::domain::model::TrackingEvent;
use regex::Regex;
use std::sync::LazyLock;

const HANDOFF_PHRASES: [&str; 2] = ["delivered to local carrier", "handed over"];

// GLS 包裹號為 11 位數字；格式來自實際轉運紀錄，換物流商時需重新確認
static LAST_MILE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{11}\b").expect("valid last-mile number pattern"));

/// 從主要物流商的事件中找出轉交給末端物流商的紀錄，並取出其中的 GLS 追蹤號。
///
/// 只檢查第一筆符合轉交字樣的事件；該事件若沒有 11 位數字則回傳 `None`。
pub fn extract_last_mile_number(events: &[TrackingEvent]) -> Option<String> {
    let handoff = events.iter().find(|event| is_handoff(&event.status))?;

    LAST_MILE_NUMBER
        .find(&handoff.status)
        .map(|m| m.as_str().to_string())
}

fn is_handoff(status: &str) -> bool {
    let status = status.to_lowercase();
    HANDOFF_PHRASES.iter().any(|phrase| status.contains(phrase))
}
