use crate::adapters::fetch_carrier_json;
use crate::config::TrackingConfig;
use crate::core::normalize::{self, GlsApiEvent, GlsHistoryEntry};
use crate::domain::model::Courier;
use crate::domain::ports::{CarrierClient, CarrierOutcome, DegradedReason};
use crate::utils::validation;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicTrackingResponse {
    #[serde(default)]
    tu_status: Vec<TuStatus>,
}

#[derive(Debug, Deserialize)]
struct TuStatus {
    #[serde(default)]
    history: Vec<GlsHistoryEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiTrackingRequest<'a> {
    parcel_number: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiTrackingResponse {
    #[serde(default)]
    events: Option<Vec<GlsApiEvent>>,
}

#[derive(Debug, Clone)]
enum GlsMode {
    /// `rstt001` 公開查詢
    Public { endpoint: String },
    Authenticated { endpoint: String, api_key: String },
}

/// GLS 末端配送查詢。設定了 API key 就使用授權版本，否則使用公開查詢。
pub struct GlsClient {
    client: Client,
    mode: GlsMode,
}

impl GlsClient {
    pub fn new(client: Client, config: &TrackingConfig) -> Self {
        let mode = match validation::usable_secret(config.gls.api_key.clone()) {
            Some(api_key) => GlsMode::Authenticated {
                endpoint: format!("{}/tracking", config.gls.api_base_url.trim_end_matches('/')),
                api_key,
            },
            None => GlsMode::Public {
                endpoint: format!("{}/rstt001", config.gls.base_url.trim_end_matches('/')),
            },
        };

        Self { client, mode }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.mode, GlsMode::Authenticated { .. })
    }

    async fn track_public(&self, endpoint: &str, parcel_number: &str) -> CarrierOutcome {
        let request = self.client.get(endpoint).query(&[("match", parcel_number)]);

        let body: PublicTrackingResponse = match fetch_carrier_json(request).await {
            Ok(body) => body,
            Err(reason) => return CarrierOutcome::Degraded(reason),
        };

        match body.tu_status.into_iter().next() {
            Some(status) => CarrierOutcome::Events(
                status
                    .history
                    .into_iter()
                    .map(normalize::from_gls_history)
                    .collect(),
            ),
            None => CarrierOutcome::Degraded(DegradedReason::NoPayload),
        }
    }

    async fn track_authenticated(
        &self,
        endpoint: &str,
        api_key: &str,
        parcel_number: &str,
    ) -> CarrierOutcome {
        let request = self
            .client
            .post(endpoint)
            .bearer_auth(api_key)
            .json(&ApiTrackingRequest { parcel_number });

        let body: ApiTrackingResponse = match fetch_carrier_json(request).await {
            Ok(body) => body,
            Err(reason) => return CarrierOutcome::Degraded(reason),
        };

        match body.events {
            Some(events) => {
                CarrierOutcome::Events(events.into_iter().map(normalize::from_gls_api).collect())
            }
            None => CarrierOutcome::Degraded(DegradedReason::NoPayload),
        }
    }
}

#[async_trait]
impl CarrierClient for GlsClient {
    fn courier(&self) -> Courier {
        Courier::Gls
    }

    async fn track(&self, tracking_number: &str) -> CarrierOutcome {
        match &self.mode {
            GlsMode::Public { endpoint } => self.track_public(endpoint, tracking_number).await,
            GlsMode::Authenticated { endpoint, api_key } => {
                self.track_authenticated(endpoint, api_key, tracking_number)
                    .await
            }
        }
    }
}
