use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件來源標籤，序列化為前端使用的固定字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Courier {
    #[serde(rename = "Yuntexpress")]
    YunExpress,
    #[serde(rename = "GLS")]
    Gls,
    /// 尚未出貨時由商店本身產生的佔位事件
    #[serde(rename = "ZdrowaMed")]
    Storefront,
}

impl Courier {
    pub fn label(&self) -> &'static str {
        match self {
            Courier::YunExpress => "Yuntexpress",
            Courier::Gls => "GLS",
            Courier::Storefront => "ZdrowaMed",
        }
    }
}

impl fmt::Display for Courier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub timestamp: String,
    pub status: String,
    pub location: String,
    pub courier: Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    pub order_number: Option<String>,
    pub tracking_number: Option<String>,
    pub gls_tracking: Option<String>,
    pub events: Vec<TrackingEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShipmentStatus>,
}

/// 商店訂單（唯讀）
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub fulfillments: Vec<Fulfillment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fulfillment {
    #[serde(default)]
    pub tracking_number: Option<String>,
}

impl Order {
    /// 只看第一筆 fulfillment；空白字串視同沒有追蹤號
    pub fn tracking_number(&self) -> Option<&str> {
        self.fulfillments
            .first()
            .and_then(|f| f.tracking_number.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
