// Adapters layer: HTTP clients for the carriers and the storefront.

pub mod gls;
pub mod shopify;
pub mod yunexpress;

pub use gls::GlsClient;
pub use shopify::ShopifyClient;
pub use yunexpress::YunExpressClient;

use crate::domain::ports::DegradedReason;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// 物流商呼叫共用：任何失敗都轉成降級原因
async fn fetch_carrier_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> std::result::Result<T, DegradedReason> {
    let response = request
        .send()
        .await
        .map_err(|e| DegradedReason::Transport(e.to_string()))?;

    tracing::debug!("Carrier response status: {}", response.status());

    let status = response.status();
    if !status.is_success() {
        return Err(DegradedReason::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| DegradedReason::Decode(e.to_string()))
}
