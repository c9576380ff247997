pub mod templates;
pub mod workout;

use axum::{
    Form, Router,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use templates::{render_landing_page, render_report, render_unknown_workout};
use tracing::Instrument;
use uuid::Uuid;
use workout::{PackageOutcome, parse_values, process_package};

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/calculate", post(handle_calculate))
        .route("/health", get(health))
}

/// Fields posted by the landing page form.
#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    pub workout_type: String,
    #[serde(default)]
    pub data: String,
}

async fn landing_page() -> Html<String> {
    Html(render_landing_page())
}

async fn health() -> &'static str {
    "ok"
}

async fn handle_calculate(Form(form): Form<CalculateForm>) -> impl IntoResponse {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("calculate", %request_id, workout_type = %form.workout_type);

    async move {
        let data = match parse_values(&form.data) {
            Ok(data) => data,
            Err(token) => {
                tracing::warn!(%token, "rejecting non-numeric reading");
                return (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid reading: {token:?} is not a number"),
                )
                    .into_response();
            }
        };

        match process_package(&form.workout_type, &data) {
            Ok(PackageOutcome::Report(info)) => Html(render_report(&info)).into_response(),
            Ok(PackageOutcome::UnknownWorkout(_)) => Html(render_unknown_workout()).into_response(),
            Err(err) => {
                tracing::warn!(error = %err, "calculation failed");
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
        }
    }
    .instrument(span)
    .await
}
