#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use parcel_track::TrackingConfig;

/// 三個上游共用一個 mock server，以路徑區分
pub fn config_for(server: &MockServer, gls_api_key: Option<&str>) -> TrackingConfig {
    let content = format!(
        r#"
[yunexpress]
api_key = "yt-secret"
customer_code = "C0001"
base_url = "{yunexpress}"

[shopify]
store_domain = "{shopify}"
access_token = "shpat_test"
api_version = "2024-01"

[gls]
base_url = "{gls}"
api_base_url = "{gls_api}"
"#,
        yunexpress = server.url("/yunexpress"),
        shopify = server.base_url(),
        gls = server.url("/gls/rest/PL/pl"),
        gls_api = server.url("/gls-api"),
    );

    let mut config = TrackingConfig::from_toml_str(&content).expect("valid test config");
    config.gls.api_key = gls_api_key.map(str::to_string);
    config
}

pub fn mock_yunexpress<'a>(
    server: &'a MockServer,
    waybill: &str,
    details: serde_json::Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/yunexpress/GetTrackInfo")
            .json_body_partial(format!(r#"{{"WayBillNumber": "{}"}}"#, waybill));
        then.status(200).json_body(serde_json::json!({
            "Success": true,
            "Item": { "TrackingDetails": details }
        }));
    })
}

pub fn mock_gls<'a>(server: &'a MockServer, parcel: &str, history: serde_json::Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/gls/rest/PL/pl/rstt001")
            .query_param("match", parcel);
        then.status(200).json_body(serde_json::json!({
            "tuStatus": [{ "history": history }]
        }));
    })
}

pub fn mock_shopify<'a>(
    server: &'a MockServer,
    order_name: &str,
    orders: serde_json::Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/admin/api/2024-01/orders.json")
            .query_param("name", order_name)
            .header("X-Shopify-Access-Token", "shpat_test");
        then.status(200).json_body(serde_json::json!({ "orders": orders }));
    })
}

pub fn handoff_details() -> serde_json::Value {
    serde_json::json!([
        {"ProcessDate": "2024-03-01T08:00:00", "ProcessContent": "Shipment information received", "ProcessLocation": "Shenzhen"},
        {"ProcessDate": "2024-03-04T10:00:00", "ProcessContent": "Delivered to local carrier, GLS no. 12345678901", "ProcessLocation": "Warszawa"},
        {"ProcessDate": "2024-03-02T16:30:00", "ProcessContent": "Departed from origin", "ProcessLocation": null}
    ])
}

pub fn gls_history() -> serde_json::Value {
    serde_json::json!([
        {"date": "2024-03-06T14:00:00+01:00", "evtDscr": "The parcel has been delivered.", "address": {"city": "Kraków", "country": "Polska"}},
        {"date": "2024-03-05T09:00:00+01:00", "evtDscr": "The parcel has reached the parcel center.", "address": {"city": "Piotrków Trybunalski"}}
    ])
}
