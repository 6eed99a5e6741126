mod common;

use common::*;
use httpmock::prelude::*;
use parcel_track::{build_service, Courier, RequestError, ShipmentStatus};

#[tokio::test]
async fn test_tracking_number_with_gls_handoff() {
    let server = MockServer::start();
    let yunexpress = mock_yunexpress(&server, "YT2403000000001", handoff_details());
    let gls = mock_gls(&server, "12345678901", gls_history());

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some("YT2403000000001")).await.unwrap();

    yunexpress.assert();
    gls.assert();

    assert_eq!(result.order_number.as_deref(), Some("YT2403000000001"));
    assert_eq!(result.tracking_number.as_deref(), Some("YT2403000000001"));
    assert_eq!(result.gls_tracking.as_deref(), Some("12345678901"));
    assert_eq!(result.status, None);
    assert_eq!(result.events.len(), 5);

    let sequence: Vec<(Courier, &str)> = result
        .events
        .iter()
        .map(|e| (e.courier, e.status.as_str()))
        .collect();
    assert_eq!(
        sequence,
        vec![
            (Courier::Gls, "The parcel has been delivered."),
            (Courier::Gls, "The parcel has reached the parcel center."),
            (
                Courier::YunExpress,
                "Delivered to local carrier, GLS no. 12345678901"
            ),
            (Courier::YunExpress, "Departed from origin"),
            (Courier::YunExpress, "Shipment information received"),
        ]
    );
    assert_eq!(result.events[1].location, "Piotrków Trybunalski, Poland");
}

#[tokio::test]
async fn test_tracking_without_handoff_never_calls_gls() {
    let server = MockServer::start();
    mock_yunexpress(
        &server,
        "YT2403000000002",
        serde_json::json!([
            {"ProcessDate": "2024-03-01T08:00:00", "ProcessContent": "Shipment information received", "ProcessLocation": "Shenzhen"}
        ]),
    );
    let gls = server.mock(|when, then| {
        when.path_contains("/gls");
        then.status(200);
    });

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some("YT2403000000002")).await.unwrap();

    gls.assert_hits(0);
    assert_eq!(result.gls_tracking, None);
    assert_eq!(result.events.len(), 1);
}

#[tokio::test]
async fn test_gls_failure_degrades_to_primary_events() {
    let server = MockServer::start();
    mock_yunexpress(&server, "YT2403000000003", handoff_details());
    let gls = server.mock(|when, then| {
        when.method(GET).path("/gls/rest/PL/pl/rstt001");
        then.status(503);
    });

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some("YT2403000000003")).await.unwrap();

    gls.assert();
    assert_eq!(result.gls_tracking.as_deref(), Some("12345678901"));
    assert_eq!(result.events.len(), 3);
    assert!(result
        .events
        .iter()
        .all(|e| e.courier == Courier::YunExpress));
    assert_eq!(result.events[0].timestamp, "2024-03-04T10:00:00");
}

#[tokio::test]
async fn test_primary_failure_returns_empty_events() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/yunexpress/GetTrackInfo");
        then.status(200)
            .json_body(serde_json::json!({"Success": false, "Message": "No data"}));
    });

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some("YT0000000000404")).await.unwrap();

    assert!(result.events.is_empty());
    assert_eq!(result.tracking_number.as_deref(), Some("YT0000000000404"));
    assert_eq!(result.gls_tracking, None);
}

#[tokio::test]
async fn test_authenticated_gls_variant() {
    let server = MockServer::start();
    mock_yunexpress(&server, "YT2403000000004", handoff_details());
    let gls_api = server.mock(|when, then| {
        when.method(POST)
            .path("/gls-api/tracking")
            .header("Authorization", "Bearer gls-token");
        then.status(200).json_body(serde_json::json!({
            "events": [
                {"timestamp": "2024-03-07T12:00:00Z", "description": "Delivered", "location": "Łódź"}
            ]
        }));
    });

    let service = build_service(&config_for(&server, Some("gls-token"))).unwrap();
    let result = service.track(Some("YT2403000000004")).await.unwrap();

    gls_api.assert();
    assert_eq!(result.events.len(), 4);
    assert_eq!(result.events[0].courier, Courier::Gls);
    assert_eq!(result.events[0].location, "Łódź");
}

#[tokio::test]
async fn test_order_number_resolves_to_combined_tracking() {
    let server = MockServer::start();
    let shopify = mock_shopify(
        &server,
        "12345",
        serde_json::json!([{
            "name": "#12345",
            "created_at": "2024-02-28T12:00:00+01:00",
            "fulfillments": [{"tracking_number": "YT999"}]
        }]),
    );
    mock_yunexpress(&server, "YT999", handoff_details());
    mock_gls(&server, "12345678901", gls_history());

    let service = build_service(&config_for(&server, None)).unwrap();
    let via_order = service.track(Some("#12345")).await.unwrap();
    let direct = service.track(Some("YT999")).await.unwrap();

    shopify.assert();
    assert_eq!(via_order.order_number.as_deref(), Some("12345"));
    assert_eq!(via_order.tracking_number, direct.tracking_number);
    assert_eq!(via_order.gls_tracking, direct.gls_tracking);
    assert_eq!(via_order.events, direct.events);
}

#[tokio::test]
async fn test_bare_short_number_is_order_lookup() {
    let server = MockServer::start();
    let shopify = mock_shopify(
        &server,
        "1001",
        serde_json::json!([{
            "name": "#1001",
            "created_at": "2024-02-28T12:00:00+01:00",
            "fulfillments": []
        }]),
    );

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some(" 1001 ")).await.unwrap();

    shopify.assert();
    assert_eq!(result.order_number.as_deref(), Some("1001"));
}

#[tokio::test]
async fn test_unfulfilled_order_is_pending() {
    let server = MockServer::start();
    mock_shopify(
        &server,
        "2002",
        serde_json::json!([{
            "name": "#2002",
            "created_at": "2024-03-10T08:30:00+01:00",
            "fulfillments": [{"tracking_number": null}]
        }]),
    );
    let yunexpress = server.mock(|when, then| {
        when.path_contains("/yunexpress");
        then.status(200);
    });

    let service = build_service(&config_for(&server, None)).unwrap();
    let result = service.track(Some("#2002")).await.unwrap();

    yunexpress.assert_hits(0);
    assert_eq!(result.tracking_number, None);
    assert_eq!(result.gls_tracking, None);
    assert_eq!(result.status, Some(ShipmentStatus::Pending));
    assert_eq!(result.events.len(), 1);

    let placeholder = &result.events[0];
    assert_eq!(placeholder.timestamp, "2024-03-10T08:30:00+01:00");
    assert_eq!(placeholder.status, "Order confirmed");
    assert_eq!(placeholder.location, "Warehouse");
    assert_eq!(placeholder.courier, Courier::Storefront);
}

#[tokio::test]
async fn test_unknown_order_fails() {
    let server = MockServer::start();
    mock_shopify(&server, "999999", serde_json::json!([]));

    let service = build_service(&config_for(&server, None)).unwrap();
    let err = service.track(Some("999999")).await.unwrap_err();

    assert!(matches!(err, RequestError::Failed(_)));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_missing_or_blank_number() {
    let server = MockServer::start();
    let service = build_service(&config_for(&server, None)).unwrap();

    assert!(matches!(
        service.track(None).await,
        Err(RequestError::MissingNumber)
    ));
    assert!(matches!(
        service.track(Some("   ")).await,
        Err(RequestError::MissingNumber)
    ));
}
