//! Integration tests for the composite chain's ordering guarantees.
//!
//! The chain must run IP → coordinates → flyover strictly in order and stop
//! at the first failure: a failed step means the later endpoints are never
//! contacted at all. The stub server's hit counters prove this.

mod helpers;

use helpers::{start_stub_server, CannedResponse};
use iss_flyover::{next_flyovers_for_my_location, FlyoverPass, LookupError};

const IP_BODY: &str = r#"{"ip":"1.2.3.4"}"#;
const GEO_BODY: &str = r#"{"data":{"latitude":"49.27670","longitude":"-123.13000"}}"#;
const FLYOVER_BODY: &str = r#"{"response":[{"risetime":1600000000,"duration":600}]}"#;

#[tokio::test]
async fn chain_yields_flyover_result_when_all_steps_succeed() {
    let (endpoints, counters) = start_stub_server(
        CannedResponse::ok(IP_BODY),
        CannedResponse::ok(GEO_BODY),
        CannedResponse::ok(FLYOVER_BODY),
    )
    .await;
    let client = reqwest::Client::new();

    let passes = next_flyovers_for_my_location(&client, &endpoints)
        .await
        .expect("chain should succeed");
    assert_eq!(
        passes,
        vec![FlyoverPass {
            risetime: 1600000000,
            duration: 600
        }]
    );

    assert_eq!(counters.ip_hits(), 1);
    assert_eq!(counters.geo_hits(), 1);
    assert_eq!(counters.flyover_hits(), 1);
}

#[tokio::test]
async fn chain_stops_before_geo_when_ip_lookup_fails() {
    let (endpoints, counters) = start_stub_server(
        CannedResponse::with_status(500, "ipify is down"),
        CannedResponse::ok(GEO_BODY),
        CannedResponse::ok(FLYOVER_BODY),
    )
    .await;
    let client = reqwest::Client::new();

    let err = next_flyovers_for_my_location(&client, &endpoints)
        .await
        .expect_err("chain should fail with step 1");
    assert!(matches!(err, LookupError::UnexpectedStatus { .. }));
    assert!(err.to_string().contains("500"));

    assert_eq!(counters.ip_hits(), 1);
    assert_eq!(counters.geo_hits(), 0, "geo must never be contacted");
    assert_eq!(counters.flyover_hits(), 0, "flyover must never be contacted");
}

#[tokio::test]
async fn chain_stops_before_flyover_when_geo_lookup_fails() {
    let (endpoints, counters) = start_stub_server(
        CannedResponse::ok(IP_BODY),
        CannedResponse::with_status(404, "unknown address"),
        CannedResponse::ok(FLYOVER_BODY),
    )
    .await;
    let client = reqwest::Client::new();

    let err = next_flyovers_for_my_location(&client, &endpoints)
        .await
        .expect_err("chain should fail with step 2");
    assert!(err.to_string().contains("404"));

    assert_eq!(counters.ip_hits(), 1);
    assert_eq!(counters.geo_hits(), 1);
    assert_eq!(counters.flyover_hits(), 0, "flyover must never be contacted");
}

#[tokio::test]
async fn chain_forwards_malformed_body_error_from_last_step() {
    let (endpoints, counters) = start_stub_server(
        CannedResponse::ok(IP_BODY),
        CannedResponse::ok(GEO_BODY),
        CannedResponse::ok(r#"{"message":"failure"}"#),
    )
    .await;
    let client = reqwest::Client::new();

    let err = next_flyovers_for_my_location(&client, &endpoints)
        .await
        .expect_err("chain should fail with step 3");
    assert!(matches!(err, LookupError::MalformedBody { .. }));

    assert_eq!(counters.ip_hits(), 1);
    assert_eq!(counters.geo_hits(), 1);
    assert_eq!(counters.flyover_hits(), 1);
}
