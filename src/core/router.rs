use crate::core::aggregator::TrackingAggregator;
use crate::core::resolver::OrderResolver;
use crate::domain::model::TrackingResult;
use crate::domain::ports::{CarrierClient, OrderSource};
use crate::utils::error::TrackingError;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static SHORT_ORDER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,6}$").expect("valid order number pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingQuery {
    /// 已去掉 `#` 的訂單編號
    Order(String),
    Tracking(String),
}

/// `#` 開頭或 1~6 位純數字視為訂單編號，其餘視為物流追蹤號
pub fn classify(number: &str) -> TrackingQuery {
    if let Some(order_number) = number.strip_prefix('#') {
        TrackingQuery::Order(order_number.to_string())
    } else if SHORT_ORDER_NUMBER.is_match(number) {
        TrackingQuery::Order(number.to_string())
    } else {
        TrackingQuery::Tracking(number.to_string())
    }
}

/// 對外回應的錯誤；訊息固定，不洩漏內部細節
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing tracking number")]
    MissingNumber,

    #[error("Failed to fetch tracking data")]
    Failed(#[source] TrackingError),
}

impl RequestError {
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::MissingNumber => 400,
            RequestError::Failed(_) => 500,
        }
    }
}

pub struct TrackingService<O: OrderSource, P: CarrierClient, L: CarrierClient> {
    resolver: OrderResolver<O>,
    aggregator: TrackingAggregator<P, L>,
}

impl<O: OrderSource, P: CarrierClient, L: CarrierClient> TrackingService<O, P, L> {
    pub fn new(orders: O, primary: P, last_mile: L) -> Self {
        Self {
            resolver: OrderResolver::new(orders),
            aggregator: TrackingAggregator::new(primary, last_mile),
        }
    }

    pub async fn track(&self, number: Option<&str>) -> Result<TrackingResult, RequestError> {
        let number = number
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(RequestError::MissingNumber)?;

        let query = classify(number);
        tracing::info!("🔎 Tracking request {:?}", query);

        match query {
            TrackingQuery::Order(order_number) => self
                .resolver
                .resolve(&order_number, &self.aggregator)
                .await
                .map_err(|e| {
                    tracing::error!("❌ Order lookup for {} failed: {}", order_number, e);
                    RequestError::Failed(e)
                }),
            TrackingQuery::Tracking(tracking_number) => Ok(self
                .aggregator
                .combined_tracking(&tracking_number, None)
                .await),
        }
    }
}
