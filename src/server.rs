use crate::config::TimetableConfig;
use crate::data::DivisionTimetable;
use crate::solver::{self, SolveOutcome};
use axum::{Json, Router, routing::post};
use serde::Serialize;

/// Response body for the solve endpoint. A no-solution verdict is a normal
/// 200 outcome; only configuration and pool errors are HTTP errors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SolveResponse {
    #[serde(rename_all = "camelCase")]
    Solved { timetables: Vec<DivisionTimetable> },
    #[serde(rename_all = "camelCase")]
    NoSolution { reason: String },
}

async fn solve_handler(
    Json(config): Json<TimetableConfig>,
) -> Result<Json<SolveResponse>, (axum::http::StatusCode, String)> {
    match solver::generate_timetable(&config) {
        Ok(SolveOutcome::Solved(timetable)) => Ok(Json(SolveResponse::Solved {
            timetables: timetable.divisions,
        })),
        Ok(SolveOutcome::NoSolution(reason)) => Ok(Json(SolveResponse::NoSolution {
            reason: reason.to_string(),
        })),
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e.to_string())),
    }
}

pub async fn run_server() {
    let app = Router::new().route("/v1/timetable/solve", post(solve_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    println!("Server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
