use crate::adapters::fetch_carrier_json;
use crate::config::TrackingConfig;
use crate::core::normalize::{self, YunExpressDetail};
use crate::domain::model::Courier;
use crate::domain::ports::{CarrierClient, CarrierOutcome, DegradedReason};
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TrackInfoRequest<'a> {
    customer_code: &'a str,
    way_bill_number: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TrackInfoResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    item: Option<TrackInfoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TrackInfoItem {
    #[serde(default)]
    tracking_details: Option<Vec<YunExpressDetail>>,
}

/// YunExpress `GetTrackInfo` 客戶端
pub struct YunExpressClient {
    client: Client,
    endpoint: String,
    customer_code: String,
    authorization: String,
}

impl YunExpressClient {
    pub fn new(client: Client, config: &TrackingConfig) -> Self {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(config.yunexpress.api_key.as_bytes());

        Self {
            client,
            endpoint: format!(
                "{}/GetTrackInfo",
                config.yunexpress.base_url.trim_end_matches('/')
            ),
            customer_code: config.yunexpress.customer_code.clone(),
            authorization: format!("Basic {}", encoded),
        }
    }
}

#[async_trait]
impl CarrierClient for YunExpressClient {
    fn courier(&self) -> Courier {
        Courier::YunExpress
    }

    async fn track(&self, tracking_number: &str) -> CarrierOutcome {
        let request = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .json(&TrackInfoRequest {
                customer_code: &self.customer_code,
                way_bill_number: tracking_number,
            });

        let body: TrackInfoResponse = match fetch_carrier_json(request).await {
            Ok(body) => body,
            Err(reason) => return CarrierOutcome::Degraded(reason),
        };

        if !body.success {
            tracing::debug!(
                "YunExpress rejected {}: {}",
                tracking_number,
                body.message.as_deref().unwrap_or("no message")
            );
            return CarrierOutcome::Degraded(DegradedReason::Rejected);
        }

        match body.item {
            Some(item) => CarrierOutcome::Events(
                item.tracking_details
                    .unwrap_or_default()
                    .into_iter()
                    .map(normalize::from_yunexpress)
                    .collect(),
            ),
            None => CarrierOutcome::Degraded(DegradedReason::NoPayload),
        }
    }
}
