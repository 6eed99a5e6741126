use crate::config::TrackingConfig;
use crate::domain::model::Order;
use crate::domain::ports::OrderSource;
use crate::utils::error::{Result, TrackingError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    #[serde(default)]
    orders: Vec<Order>,
}

/// Shopify Admin REST 訂單查詢
pub struct ShopifyClient {
    client: Client,
    orders_endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(client: Client, config: &TrackingConfig) -> Self {
        Self {
            client,
            orders_endpoint: format!(
                "{}/admin/api/{}/orders.json",
                config.shopify_base_url(),
                config.shopify.api_version
            ),
            access_token: config.shopify.access_token.clone(),
        }
    }
}

#[async_trait]
impl OrderSource for ShopifyClient {
    async fn find_orders(&self, order_name: &str) -> Result<Vec<Order>> {
        tracing::debug!("Looking up Shopify order {}", order_name);

        let response = self
            .client
            .get(&self.orders_endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .query(&[("name", order_name)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackingError::UpstreamStatus {
                service: "Shopify",
                status: status.as_u16(),
            });
        }

        let body: OrdersResponse = response.json().await?;
        tracing::debug!("Shopify returned {} order(s)", body.orders.len());
        Ok(body.orders)
    }
}
