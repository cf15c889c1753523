//! Health check service.
//!
//! Serves `GET /` and `GET /health` with a JSON liveness payload, either as a
//! standalone HTTP server or as an AWS Lambda function behind API Gateway.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
