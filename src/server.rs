use crate::adapters::{GlsClient, ShopifyClient, YunExpressClient};
use crate::config::TrackingConfig;
use crate::core::router::{RequestError, TrackingService};
use crate::domain::model::TrackingResult;
use crate::domain::ports::{CarrierClient, OrderSource};
use crate::utils::error::Result;
use axum::{
    extract::{RawQuery, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub type HttpTrackingService = TrackingService<ShopifyClient, YunExpressClient, GlsClient>;

/// 以同一個 reqwest 連線池建立三個上游客戶端
pub fn build_service(config: &TrackingConfig) -> Result<HttpTrackingService> {
    let client = config.http_client()?;

    let gls = GlsClient::new(client.clone(), config);
    if gls.is_authenticated() {
        tracing::info!("🔑 GLS authenticated tracking API enabled");
    }

    Ok(TrackingService::new(
        ShopifyClient::new(client.clone(), config),
        YunExpressClient::new(client, config),
        gls,
    ))
}

/// 取第一個 `number` 參數；重複或格式怪異的查詢字串不走 axum 的純文字拒絕
pub fn number_param(raw_query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(raw_query?.as_bytes())
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.into_owned())
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn app<O, P, L>(service: Arc<TrackingService<O, P, L>>) -> Router
where
    O: OrderSource + 'static,
    P: CarrierClient + 'static,
    L: CarrierClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/track", get(track::<O, P, L>).options(preflight))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn track<O, P, L>(
    State(service): State<Arc<TrackingService<O, P, L>>>,
    RawQuery(raw_query): RawQuery,
) -> std::result::Result<Json<TrackingResult>, RequestError>
where
    O: OrderSource + 'static,
    P: CarrierClient + 'static,
    L: CarrierClient + 'static,
{
    let number = number_param(raw_query.as_deref());
    service.track(number.as_deref()).await.map(Json)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
