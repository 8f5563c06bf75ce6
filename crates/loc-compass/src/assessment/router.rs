use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::page::AssessmentPage;

/// Shared handle to the single page session behind the HTTP surface. The
/// mutex serializes events so each handler runs to completion before the
/// next, mirroring the page's single-threaded event model.
pub type SharedPage = Arc<Mutex<AssessmentPage>>;

/// Ratings payload for the calculate action: one 1-5 value per competency
/// key.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub ratings: BTreeMap<String, u8>,
}

/// Router builder exposing the assessment page and its actions.
pub fn assessment_router(page: SharedPage) -> Router {
    Router::new()
        .route("/assessment", get(page_handler))
        .route("/api/v1/assessment/calculate", post(calculate_handler))
        .route("/api/v1/assessment/reset", post(reset_handler))
        .with_state(page)
}

pub(crate) async fn page_handler(State(page): State<SharedPage>) -> Response {
    let page = page.lock().expect("assessment page mutex poisoned");
    Html(page.render()).into_response()
}

pub(crate) async fn calculate_handler(
    State(page): State<SharedPage>,
    axum::Json(request): axum::Json<CalculateRequest>,
) -> Response {
    let mut page = page.lock().expect("assessment page mutex poisoned");

    if let Err(error) = page.apply_ratings(&request.ratings) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match page.calculate() {
        Ok(_) => Html(page.render()).into_response(),
        Err(_) => {
            let payload = json!({ "error": page.incomplete_alert() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn reset_handler(State(page): State<SharedPage>) -> Response {
    let mut page = page.lock().expect("assessment page mutex poisoned");
    page.reset();
    Html(page.render()).into_response()
}
