use crate::core::aggregator::TrackingAggregator;
use crate::domain::model::{Courier, ShipmentStatus, TrackingEvent, TrackingResult};
use crate::domain::ports::{CarrierClient, OrderSource};
use crate::utils::error::{Result, TrackingError};

/// 訂單編號 → 商店訂單 → 追蹤號 → 合併追蹤
pub struct OrderResolver<O: OrderSource> {
    orders: O,
}

impl<O: OrderSource> OrderResolver<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    /// `order_number` 不含開頭的 `#`
    pub async fn resolve<P: CarrierClient, L: CarrierClient>(
        &self,
        order_number: &str,
        aggregator: &TrackingAggregator<P, L>,
    ) -> Result<TrackingResult> {
        let orders = self.orders.find_orders(order_number).await?;
        let order = orders
            .into_iter()
            .next()
            .ok_or_else(|| TrackingError::OrderNotFound {
                order_number: order_number.to_string(),
            })?;

        match order.tracking_number() {
            Some(tracking_number) => {
                tracing::debug!(
                    "Order {} ships as {}",
                    order.name,
                    tracking_number
                );
                Ok(aggregator
                    .combined_tracking(tracking_number, Some(order_number))
                    .await)
            }
            None => {
                tracing::info!("Order {} has no tracking number yet", order.name);
                Ok(pending_result(order_number, &order.created_at))
            }
        }
    }
}

fn pending_result(order_number: &str, created_at: &str) -> TrackingResult {
    TrackingResult {
        order_number: Some(order_number.to_string()),
        tracking_number: None,
        gls_tracking: None,
        events: vec![TrackingEvent {
            timestamp: created_at.to_string(),
            status: "Order confirmed".to_string(),
            location: "Warehouse".to_string(),
            courier: Courier::Storefront,
        }],
        status: Some(ShipmentStatus::Pending),
    }
}
