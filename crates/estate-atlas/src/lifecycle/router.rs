use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{LifecycleEntity, StageState};
use super::resolver::{resolve_stage_index, LifecycleProgress};

#[derive(Debug, Deserialize)]
pub(crate) struct StageParams {
    #[serde(default)]
    pub(crate) label: String,
}

#[derive(Debug, Serialize)]
pub struct StageStateView {
    pub stage: &'static str,
    pub state: StageState,
    pub state_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LifecycleProgressView {
    #[serde(flatten)]
    pub progress: LifecycleProgress,
    pub timeline: Vec<StageStateView>,
}

impl From<LifecycleProgress> for LifecycleProgressView {
    fn from(progress: LifecycleProgress) -> Self {
        let timeline = progress
            .stage_states()
            .into_iter()
            .map(|(stage, state)| StageStateView {
                stage,
                state,
                state_label: state.label(),
            })
            .collect();
        Self { progress, timeline }
    }
}

pub fn lifecycle_router() -> Router {
    Router::new().route("/api/v1/lifecycle/:entity", get(stage_handler))
}

pub(crate) async fn stage_handler(
    Path(entity): Path<String>,
    Query(params): Query<StageParams>,
) -> Response {
    match entity.parse::<LifecycleEntity>() {
        Ok(entity) => {
            let view = LifecycleProgressView::from(resolve_stage_index(entity, &params.label));
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = lifecycle_router()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn property_alias_resolves_over_http() {
        let (status, body) = get_json("/api/v1/lifecycle/property?label=Active").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entity"], "property");
        assert_eq!(body["current_index"], 2);
        assert_eq!(body["current_label"], "Approved");
        assert_eq!(body["matched"], true);
        assert_eq!(body["timeline"][2]["state"], "current");
        assert_eq!(body["timeline"][0]["state_label"], "Completed");
    }

    #[tokio::test]
    async fn tenant_labels_with_spaces_are_decoded() {
        let (status, body) = get_json("/api/v1/lifecycle/tenant?label=Past%20Tenant").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_index"], 3);
    }

    #[tokio::test]
    async fn missing_label_reports_unmatched_first_stage() {
        let (status, body) = get_json("/api/v1/lifecycle/tenant").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_index"], 0);
        assert_eq!(body["matched"], false);
    }

    #[tokio::test]
    async fn unknown_entity_is_rejected() {
        let (status, body) = get_json("/api/v1/lifecycle/agent?label=Rented").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "unknown lifecycle entity 'agent', expected 'tenant' or 'property'"
        );
    }
}
