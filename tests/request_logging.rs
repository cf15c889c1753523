//! Request logging tests.
//!
//! Installs a capturing tracing layer as the thread's default subscriber and
//! checks what the logging middleware records. Kept in its own test binary so
//! no other test installs a subscriber concurrently.
//!
//! Run with: cargo test --test request_logging
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use healthcheck::routes::create_router;
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One recorded log event: level plus its fields rendered as strings.
#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    fields: HashMap<String, String>,
}

impl Captured {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldVisitor(HashMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

/// Send one request through the router and return every event it logged.
async fn logged_events(method: Method, path: &str) -> (StatusCode, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let events = layer.events.clone();
    let subscriber = tracing_subscriber::registry().with(layer);
    let _guard = tracing::subscriber::set_default(subscriber);

    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let response = create_router().oneshot(request).await.unwrap();

    let captured = events.lock().unwrap().clone();
    (response.status(), captured)
}

fn incoming(events: &[Captured]) -> Vec<&Captured> {
    events
        .iter()
        .filter(|e| e.field("message") == Some("Incoming request"))
        .collect()
}

#[tokio::test]
async fn test_health_request_logs_path_and_method_at_debug() {
    let (status, events) = logged_events(Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let incoming = incoming(&events);
    assert_eq!(incoming.len(), 1, "events: {:?}", events);
    assert_eq!(incoming[0].level, Level::DEBUG);
    assert_eq!(incoming[0].field("original_path"), Some("/health"));
    assert_eq!(incoming[0].field("method"), Some("GET"));

    let completed = events
        .iter()
        .find(|e| e.field("message") == Some("Health check completed"))
        .expect("health handler should log completion");
    assert_eq!(completed.level, Level::INFO);
    assert_eq!(completed.field("status"), Some("healthy"));
    assert!(completed.field("time").is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_unknown_path_is_still_logged() {
    let (status, events) = logged_events(Method::POST, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let incoming = incoming(&events);
    assert_eq!(incoming.len(), 1, "events: {:?}", events);
    assert_eq!(incoming[0].level, Level::DEBUG);
    assert_eq!(incoming[0].field("original_path"), Some("/unknown"));
    assert_eq!(incoming[0].field("method"), Some("POST"));
}
