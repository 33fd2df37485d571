#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    classification::Classification,
    engine::{CourseEntry, EngineConfig, GpaEngine, SemesterEntry},
    error::GpaError,
    grade::LetterGrade,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Engine used for every request.
    engine: Arc<GpaEngine>,
}

impl AppState {
    /// Creates handler state from calculation limits.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Arc::new(GpaEngine::new(config)),
        }
    }
}

/// Body of `POST /api/calculate-gpa/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaRequest {
    /// Grade symbols, one per course
    pub grades:  Vec<String>,
    /// Credit units, one per course
    pub credits: Vec<f64>,
}

/// Successful reply to `POST /api/calculate-gpa/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaResponse {
    /// Always `true`
    pub success:        bool,
    /// GPA rounded to 2 decimal places
    pub gpa:            f64,
    /// Sum of credit units
    pub total_credits:  f64,
    /// Sum of quality points
    pub total_points:   f64,
    /// Number of courses
    pub grades_count:   usize,
    /// Honours band of the GPA
    pub classification: String,
}

/// Body of `POST /api/calculate-cgpa/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaRequest {
    /// Semester GPAs and their credit totals
    pub semesters: Vec<SemesterEntry>,
}

/// Successful reply to `POST /api/calculate-cgpa/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaResponse {
    /// Always `true`
    pub success:         bool,
    /// CGPA rounded to 2 decimal places
    pub cgpa:            f64,
    /// Sum of credit units
    pub total_credits:   f64,
    /// Sum of GPA times credits
    pub total_points:    f64,
    /// Number of semesters
    pub semesters_count: usize,
    /// Honours band of the CGPA
    pub classification:  String,
}

/// Reply sent for any rejected request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// What was wrong with the request
    pub error:   String,
}

/// An enum to represent why a request could not be answered.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The calculation rejected the input.
    #[error(transparent)]
    Calculation(#[from] GpaError),
    /// The body is not JSON of the expected shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
    /// `grades` and `credits` differ in length.
    #[error("Received {grades} grades but {credits} credit values")]
    LengthMismatch {
        /// number of grades sent
        grades:  usize,
        /// number of credit values sent
        credits: usize,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected calculation request: {self}");
        let body = ErrorResponse {
            success: false,
            error:   self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Keeps body rejections in the JSON error shape.
fn malformed(rejection: JsonRejection) -> ApiError {
    ApiError::MalformedBody(rejection.body_text())
}

/// Handles `POST /api/calculate-gpa/`.
pub async fn calculate_gpa(
    State(state): State<AppState>,
    payload: Result<Json<GpaRequest>, JsonRejection>,
) -> Result<Json<GpaResponse>, ApiError> {
    let Json(request) = payload.map_err(malformed)?;
    if request.grades.len() != request.credits.len() {
        return Err(ApiError::LengthMismatch {
            grades:  request.grades.len(),
            credits: request.credits.len(),
        });
    }

    let courses = request
        .grades
        .iter()
        .zip(&request.credits)
        .map(|(grade, credits)| LetterGrade::parse(grade).map(|g| CourseEntry::new(g, *credits)))
        .collect::<Result<Vec<_>, GpaError>>()?;

    let result = state.engine.gpa(&courses)?;
    tracing::info!("GPA {:.2} over {} courses", result.value, result.entry_count);

    Ok(Json(GpaResponse {
        success:        true,
        gpa:            result.value,
        total_credits:  result.total_credits,
        total_points:   result.total_quality_points,
        grades_count:   result.entry_count,
        classification: result.classification.label().to_string(),
    }))
}

/// Handles `POST /api/calculate-cgpa/`.
pub async fn calculate_cgpa(
    State(state): State<AppState>,
    payload: Result<Json<CgpaRequest>, JsonRejection>,
) -> Result<Json<CgpaResponse>, ApiError> {
    let Json(request) = payload.map_err(malformed)?;
    let result = state.engine.cgpa(&request.semesters)?;
    tracing::info!("CGPA {:.2} over {} semesters", result.value, result.entry_count);

    Ok(Json(CgpaResponse {
        success:         true,
        cgpa:            result.value,
        total_credits:   result.total_credits,
        total_points:    result.total_quality_points,
        semesters_count: result.entry_count,
        classification:  result.classification.label().to_string(),
    }))
}

/// Reply to `GET /api/health/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` while the service is up
    pub status:  String,
    /// Service name
    pub service: String,
}

/// Handles `GET /api/health/`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// Reply to `GET /api/scale/`.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleResponse {
    /// `(grade, points)` pairs, best first
    pub grades: Vec<(LetterGrade, f64)>,
    /// `(lower bound, label)` pairs, highest first
    pub bands:  Vec<(f64, Classification)>,
}

/// Handles `GET /api/scale/`.
pub async fn scale() -> Json<ScaleResponse> {
    Json(ScaleResponse {
        grades: LetterGrade::ALL.iter().map(|g| (*g, g.points())).collect(),
        bands:  Classification::BANDS.to_vec(),
    })
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate-gpa/", post(calculate_gpa))
        .route("/api/calculate-cgpa/", post(calculate_cgpa))
        .route("/api/health/", get(health))
        .route("/api/scale/", get(scale))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, config: EngineConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    serve_on(listener, config).await
}

/// Serves on an already bound listener.
pub async fn serve_on(listener: tokio::net::TcpListener, config: EngineConfig) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Could not read the listener address")?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, router(AppState::new(config)))
        .await
        .context("Server stopped unexpectedly")
}
