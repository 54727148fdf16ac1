//! Data Transfer Objects for the HTTP API.
//!
//! Query parameter types for each endpoint. Response bodies are the types
//! re-exported from [`crate::api`].

use serde::{Deserialize, Serialize};

pub use crate::api::{
    AntardashaData, BasicNumberData, DayDashaData, DestinyNumberData, GridData, MahadashaData,
    MonthlyDashaData, NumerologyProfile,
};

/// Query for endpoints that only need a date of birth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DobQuery {
    /// Date of birth, `DD-MM-YYYY`
    pub dob: String,
}

/// Query for endpoints keyed by a date of birth and a reference year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DobYearQuery {
    /// Date of birth, `DD-MM-YYYY`
    pub dob: String,
    /// Calendar year to evaluate
    pub year: i32,
}

/// Query parameters for the full profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub dob: String,
    pub year: i32,
    /// Overrides the configured mahadasha end year
    #[serde(default)]
    pub end_year: Option<i32>,
}

/// Query parameters for the mahadasha endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MahadashaQuery {
    pub dob: String,
    /// Overrides the configured mahadasha end year
    #[serde(default)]
    pub end_year: Option<i32>,
}

/// Query parameters for the day dasha endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDashaQuery {
    /// Date of birth, `DD-MM-YYYY`
    pub dob: String,
    /// Date whose day lord is wanted, `DD-MM-YYYY`
    pub date: String,
    /// Month number combined with the day lord (any integer)
    pub month_num: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Service name
    pub service: String,
    /// Version of the API
    pub version: String,
}
