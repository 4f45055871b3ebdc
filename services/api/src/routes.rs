use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use signal_risk::settings::{
    assess, band, classify, rules, RiskAssessment, SettingRule, SettingValues, Tier, Warning,
};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub(crate) struct WarningRequest {
    pub(crate) setting: String,
    pub(crate) value: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct WarningResponse {
    pub(crate) setting: String,
    pub(crate) warning: Option<Warning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tier: Option<Tier>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) settings: SettingValues,
}

pub(crate) fn settings_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/settings/rules", get(rules_endpoint))
        .route("/api/v1/settings/warning", post(warning_endpoint))
        .route("/api/v1/settings/assessment", post(assessment_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn rules_endpoint() -> Json<&'static [SettingRule]> {
    Json(rules())
}

pub(crate) async fn warning_endpoint(Json(payload): Json<WarningRequest>) -> Json<WarningResponse> {
    let WarningRequest { setting, value } = payload;
    let warning = classify(&setting, value);
    let tier = band(&setting, value);
    debug!(%setting, value, ?tier, "classified setting");

    Json(WarningResponse {
        setting,
        warning,
        tier,
    })
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Json<RiskAssessment> {
    let assessment = assess(&payload.settings);
    info!(
        settings = payload.settings.len(),
        score = assessment.score,
        level = assessment.level.label(),
        "assessed settings"
    );
    Json(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use signal_risk::settings::{RiskLevel, SettingKey, Severity};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(ready: bool) -> Router {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        settings_router().layer(Extension(AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(handle),
        }))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn warning_endpoint_classifies_known_settings() {
        let Json(body) = warning_endpoint(Json(WarningRequest {
            setting: "minWallets".to_string(),
            value: 1.0,
        }))
        .await;

        let warning = body.warning.expect("warning returned");
        assert_eq!(warning.severity, Severity::Danger);
        assert_eq!(body.tier, Some(Tier::SuperLow));
    }

    #[tokio::test]
    async fn warning_endpoint_returns_null_for_unknown_settings() {
        let Json(body) = warning_endpoint(Json(WarningRequest {
            setting: "slippage".to_string(),
            value: 0.0,
        }))
        .await;

        assert!(body.warning.is_none());
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["warning"], serde_json::Value::Null);
        assert!(json.get("tier").is_none());
    }

    #[tokio::test]
    async fn assessment_endpoint_scores_payload() {
        let settings = SettingValues::new()
            .with("minWallets", 1.0)
            .with("minFDV", 300_000.0);

        let Json(body) = assessment_endpoint(Json(AssessmentRequest { settings })).await;

        assert_eq!(body.score, 70);
        assert_eq!(body.level, RiskLevel::Medium);
        assert_eq!(body.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn router_serves_assessments_over_http() {
        let response = test_app(true)
            .oneshot(post_json(
                "/api/v1/settings/assessment",
                r#"{"settings": {"maxTopHolders": 1, "btcDropThreshold": 80}}"#,
            ))
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], 115);
        assert_eq!(body["level"], "High");
        assert_eq!(body["color"], "orange");
        assert_eq!(body["warnings"][0]["setting"], "maxTopHolders");
        assert_eq!(body["warnings"][1]["type"], "danger");
        assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn router_serves_warnings_over_http() {
        let response = test_app(true)
            .oneshot(post_json(
                "/api/v1/settings/warning",
                r#"{"setting": "minWallets", "value": 3}"#,
            ))
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["setting"], "minWallets");
        assert_eq!(body["warning"], serde_json::Value::Null);
        assert!(body.get("tier").is_none());

        let response = test_app(true)
            .oneshot(post_json(
                "/api/v1/settings/warning",
                r#"{"setting": "btcDropThreshold", "value": 85}"#,
            ))
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["warning"]["type"], "danger");
        assert_eq!(body["tier"], "high");
        assert!(body["warning"]["message"].is_string());
    }

    #[tokio::test]
    async fn router_exposes_prometheus_metrics() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }

    #[tokio::test]
    async fn router_rejects_non_numeric_values() {
        let response = test_app(true)
            .oneshot(post_json(
                "/api/v1/settings/assessment",
                r#"{"settings": {"minWallets": "one"}}"#,
            ))
            .await
            .expect("request handled");

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn router_lists_rules() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/settings/rules")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let rules = body.as_array().expect("rules array");
        assert_eq!(rules.len(), SettingKey::ordered().len());
        assert_eq!(rules[0]["setting"], "minWallets");
        assert_eq!(rules[0]["superLow"]["threshold"], 1.0);
        assert_eq!(rules[0]["riskPoints"]["superLow"], 60);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = test_app(false)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request handled");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "initializing");
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
