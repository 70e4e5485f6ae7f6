//! Prometheus metrics for the create endpoint (default registry).

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter_vec, Encoder, Histogram, IntCounterVec, TextEncoder};
use tracing::error;

pub static CREATE_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "data_processor_create_total",
        "Create requests by outcome",
        &["outcome"]
    )
    .expect("register create_total")
});

pub static CREATE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "data_processor_create_duration_seconds",
        "Time spent persisting a record",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("register create_duration")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Invalid,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Invalid => "invalid",
            Outcome::Error => "error",
        }
    }
}

pub fn record(outcome: Outcome) {
    CREATE_TOTAL.with_label_values(&[outcome.as_str()]).inc();
}

/// Render the default registry in the text exposition format.
pub fn render() -> (StatusCode, String) {
    // 确保指标在首次抓取前已注册
    Lazy::force(&CREATE_TOTAL);
    Lazy::force(&CREATE_DURATION);

    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        error!(error = %e, "metrics encode failed");
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new());
    }
    match String::from_utf8(buf) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            error!(error = %e, "metrics not utf-8");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

pub async fn metrics_handler() -> impl IntoResponse {
    let (status, body) = render();
    (status, [(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())], body)
}
