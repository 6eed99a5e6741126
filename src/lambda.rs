use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use parcel_track::utils::{logger, validation::Validate};
use parcel_track::{build_service, HttpTrackingService, TrackingConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway (REST) 事件中用得到的欄位
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<&'static str, &'static str>,
    pub body: String,
}

fn cors_headers() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
        ("Content-Type", "application/json"),
    ])
}

async fn function_handler(
    service: &HttpTrackingService,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    let request = event.payload;

    if request
        .http_method
        .as_deref()
        .is_some_and(|method| method.eq_ignore_ascii_case("OPTIONS"))
    {
        return Ok(Response {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        });
    }

    let number = request
        .query_string_parameters
        .as_ref()
        .and_then(|params| params.get("number"))
        .map(String::as_str);

    let (status_code, body) = match service.track(number).await {
        Ok(result) => (200, serde_json::to_string(&result)?),
        Err(e) => (
            e.status_code(),
            serde_json::json!({ "error": e.to_string() }).to_string(),
        ),
    };

    Ok(Response {
        status_code,
        headers: cors_headers(),
        body,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = TrackingConfig::from_env()?;
    config.validate()?;

    let service = build_service(&config)?;
    let service = &service;

    tracing::info!("🚀 parcel-track Lambda handler ready");
    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(service, event).await
    }))
    .await
}
