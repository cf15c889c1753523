//! Lambda invocation adapter.
//!
//! `lambda_http` turns API Gateway / ALB events into `axum::http::Request`s. Health
//! paths are answered directly without touching the router; every other
//! request is converted into an axum request, run through the router and
//! converted back.
//!
//! REST API events carry the stage in front of the URI path (`/prod/health`),
//! so routing always uses the raw path the client requested.

use axum::http::{header, StatusCode, Uri};
use axum::Router;
use lambda_http::{service_fn, Body, Request, RequestExt, Response};
use tower::ServiceExt;

use crate::config::{HEALTH_PATHS, LAMBDA_MAX_BODY_BYTES};
use crate::error::AppError;
use crate::routes::health::HealthStatus;

/// Register the invocation callback with the Lambda runtime and block on it.
pub async fn start_managed(app: Router) -> Result<(), AppError> {
    lambda_http::run(service_fn(move |event: Request| {
        let app = app.clone();
        async move {
            handle_event(app, event)
                .await
                .map_err(lambda_http::Error::from)
        }
    }))
    .await
    .map_err(|e| AppError::Lambda(e.to_string()))
}

/// Answer one invocation event.
pub async fn handle_event(app: Router, event: Request) -> Result<Response<Body>, AppError> {
    let path = request_path(&event);
    tracing::info!(
        path = %path,
        method = %event.method(),
        source = "lambda",
        "Handling Lambda request"
    );

    if HEALTH_PATHS.contains(&path.as_str()) {
        return Ok(health_response());
    }

    proxy(app, event, &path).await.map_err(|e| {
        tracing::error!(error = %e, path = %path, "Failed to proxy request");
        e
    })
}

/// Path without any API Gateway stage prefix.
///
/// Requests that did not come from a Lambda event have no raw path recorded,
/// in which case the URI path is already the client's path.
fn request_path(event: &Request) -> String {
    match event.raw_http_path() {
        "" => event.uri().path().to_owned(),
        raw => raw.to_owned(),
    }
}

/// Build the health response without going through the router.
fn health_response() -> Response<Body> {
    let status = HealthStatus::now();
    let (code, body) = match status.to_json() {
        Ok(json) => (StatusCode::OK, Body::Text(json)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode health check response");
            (StatusCode::INTERNAL_SERVER_ERROR, Body::Empty)
        }
    };

    let mut response = Response::new(body);
    *response.status_mut() = code;
    if code == StatusCode::OK {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
    }
    response
}

/// Run the event through the router and translate the result back.
async fn proxy(app: Router, event: Request, path: &str) -> Result<Response<Body>, AppError> {
    let (mut parts, body) = event.into_parts();
    let path_and_query = match parts.uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_owned(),
    };
    parts.uri = path_and_query
        .parse::<Uri>()
        .map_err(|e| AppError::Adapter(format!("invalid request path {}: {}", path_and_query, e)))?;

    let request = axum::extract::Request::from_parts(parts, axum::body::Body::from(body.to_vec()));

    let response = app
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, LAMBDA_MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::Adapter(e.to_string()))?;

    let body = if bytes.is_empty() {
        Body::Empty
    } else {
        String::from_utf8(bytes.to_vec())
            .map(Body::Text)
            .unwrap_or_else(|e| Body::Binary(e.into_bytes()))
    };

    Ok(Response::from_parts(parts, body))
}
