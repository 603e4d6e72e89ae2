//! Shared test helpers: a local stub server standing in for the three remote
//! APIs, with per-endpoint hit counters so tests can assert call order and
//! short-circuiting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use iss_flyover::Endpoints;

/// One canned reply for a stubbed endpoint.
#[derive(Clone)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub body: String,
}

impl CannedResponse {
    #[allow(dead_code)] // Used by other test files
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    #[allow(dead_code)] // Used by other test files
    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        }
    }
}

/// Per-endpoint request counters.
#[derive(Clone, Default)]
pub struct HitCounters {
    ip: Arc<AtomicUsize>,
    geo: Arc<AtomicUsize>,
    flyover: Arc<AtomicUsize>,
}

#[allow(dead_code)] // Used by other test files
impl HitCounters {
    pub fn ip_hits(&self) -> usize {
        self.ip.load(Ordering::SeqCst)
    }

    pub fn geo_hits(&self) -> usize {
        self.geo.load(Ordering::SeqCst)
    }

    pub fn flyover_hits(&self) -> usize {
        self.flyover.load(Ordering::SeqCst)
    }
}

/// Starts a stub server answering for all three endpoints.
///
/// Returns an `Endpoints` pointing at the stub plus the hit counters. The
/// server lives on a background task for the rest of the test process.
#[allow(dead_code)] // Used by other test files
pub async fn start_stub_server(
    ip: CannedResponse,
    geo: CannedResponse,
    flyover: CannedResponse,
) -> (Endpoints, HitCounters) {
    let counters = HitCounters::default();

    let app = Router::new()
        .route(
            "/ip",
            get({
                let counter = counters.ip.clone();
                move || {
                    let canned = ip.clone();
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        (canned.status, canned.body)
                    }
                }
            }),
        )
        .route(
            "/geo/{ip}",
            get({
                let counter = counters.geo.clone();
                move |Path(_ip): Path<String>| {
                    let canned = geo.clone();
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        (canned.status, canned.body)
                    }
                }
            }),
        )
        .route(
            "/iss-pass",
            get({
                let counter = counters.flyover.clone();
                move || {
                    let canned = flyover.clone();
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        (canned.status, canned.body)
                    }
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Stub server failed");
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    let base = format!("http://{}", addr);
    let endpoints = Endpoints {
        ip_url: format!("{}/ip", base),
        geo_url: format!("{}/geo", base),
        flyover_url: format!("{}/iss-pass", base),
    };

    (endpoints, counters)
}

/// Returns an `Endpoints` whose three URLs all point at a port nothing
/// listens on, so every request fails at the transport level.
#[allow(dead_code)] // Used by other test files
pub async fn unreachable_endpoints() -> Endpoints {
    // Bind and immediately drop a listener to find a port that is closed
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);

    let base = format!("http://{}", addr);
    Endpoints {
        ip_url: format!("{}/ip", base),
        geo_url: format!("{}/geo", base),
        flyover_url: format!("{}/iss-pass", base),
    }
}
