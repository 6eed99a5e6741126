use crate::domain::model::{Courier, Order, TrackingEvent};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// 物流商查詢失敗的原因，僅用於記錄與測試
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedReason {
    Transport(String),
    Status(u16),
    /// 回應中的 Success 旗標為 false
    Rejected,
    NoPayload,
    Decode(String),
}

impl fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradedReason::Transport(e) => write!(f, "transport error: {}", e),
            DegradedReason::Status(code) => write!(f, "HTTP {}", code),
            DegradedReason::Rejected => f.write_str("carrier reported failure"),
            DegradedReason::NoPayload => f.write_str("no tracking payload"),
            DegradedReason::Decode(e) => write!(f, "malformed response: {}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierOutcome {
    Events(Vec<TrackingEvent>),
    Degraded(DegradedReason),
}

impl CarrierOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, CarrierOutcome::Degraded(_))
    }

    pub fn into_events(self) -> Vec<TrackingEvent> {
        match self {
            CarrierOutcome::Events(events) => events,
            CarrierOutcome::Degraded(_) => Vec::new(),
        }
    }
}

/// 物流商查詢介面：永不回傳錯誤，失敗時降級
#[async_trait]
pub trait CarrierClient: Send + Sync {
    fn courier(&self) -> Courier;

    async fn track(&self, tracking_number: &str) -> CarrierOutcome;
}

#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn find_orders(&self, order_name: &str) -> Result<Vec<Order>>;
}
