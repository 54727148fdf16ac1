//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. The computations are pure and take microseconds, so they
//! run inline on the async worker.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::dto::{
    AntardashaData, BasicNumberData, DayDashaData, DayDashaQuery, DestinyNumberData, DobQuery,
    DobYearQuery, GridData, HealthResponse, MahadashaData, MahadashaQuery, MonthlyDashaData,
    NumerologyProfile, ProfileQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Query extraction that reports failures through [`AppError`].
type QueryResult<T> = Result<Query<T>, QueryRejection>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        service: "Numerology API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Numerology Endpoints
// =============================================================================

/// GET /numerology?dob=DD-MM-YYYY&year=YYYY[&end_year=YYYY]
///
/// Full profile.
#[tracing::instrument(skip_all)]
pub async fn get_numerology(
    State(state): State<AppState>,
    query: QueryResult<ProfileQuery>,
) -> HandlerResult<NumerologyProfile> {
    let Query(query) = query?;
    let end_year = query.end_year.unwrap_or_else(|| state.mahadasha_end_year());
    let data = services::get_profile(&query.dob, query.year, end_year)?;
    Ok(Json(data))
}

/// GET /basic-number?dob=DD-MM-YYYY
#[tracing::instrument(skip_all)]
pub async fn get_basic_number(query: QueryResult<DobQuery>) -> HandlerResult<BasicNumberData> {
    let Query(query) = query?;
    Ok(Json(services::get_basic_number(&query.dob)?))
}

/// GET /destiny-number?dob=DD-MM-YYYY
#[tracing::instrument(skip_all)]
pub async fn get_destiny_number(
    query: QueryResult<DobQuery>,
) -> HandlerResult<DestinyNumberData> {
    let Query(query) = query?;
    Ok(Json(services::get_destiny_number(&query.dob)?))
}

/// GET /grid?dob=DD-MM-YYYY
#[tracing::instrument(skip_all)]
pub async fn get_grid(query: QueryResult<DobQuery>) -> HandlerResult<GridData> {
    let Query(query) = query?;
    Ok(Json(services::get_grid(&query.dob)?))
}

/// GET /mahadasha?dob=DD-MM-YYYY[&end_year=YYYY]
#[tracing::instrument(skip_all)]
pub async fn get_mahadasha(
    State(state): State<AppState>,
    query: QueryResult<MahadashaQuery>,
) -> HandlerResult<MahadashaData> {
    let Query(query) = query?;
    let end_year = query.end_year.unwrap_or_else(|| state.mahadasha_end_year());
    Ok(Json(services::get_mahadasha(&query.dob, end_year)?))
}

/// GET /antardasha?dob=DD-MM-YYYY&year=YYYY
#[tracing::instrument(skip_all)]
pub async fn get_antardasha(query: QueryResult<DobYearQuery>) -> HandlerResult<AntardashaData> {
    let Query(query) = query?;
    Ok(Json(services::get_antardasha(&query.dob, query.year)?))
}

/// GET /monthly-dasha?dob=DD-MM-YYYY&year=YYYY
#[tracing::instrument(skip_all)]
pub async fn get_monthly_dasha(
    query: QueryResult<DobYearQuery>,
) -> HandlerResult<MonthlyDashaData> {
    let Query(query) = query?;
    Ok(Json(services::get_monthly_dasha(&query.dob, query.year)?))
}

/// GET /day-dasha?dob=DD-MM-YYYY&date=DD-MM-YYYY&month_num=N
#[tracing::instrument(skip_all)]
pub async fn get_day_dasha(query: QueryResult<DayDashaQuery>) -> HandlerResult<DayDashaData> {
    let Query(query) = query?;
    Ok(Json(services::get_day_dasha(
        &query.dob,
        &query.date,
        query.month_num,
    )?))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
