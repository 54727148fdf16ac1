use serde::Serialize;

use crate::models::NumerologyGrid;

// =========================================================
// Basic number, destiny number and grid types + routes
// =========================================================

/// Basic number with the grid of the same date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicNumberData {
    #[serde(rename = "Basic_Number")]
    pub basic_number: u32,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

/// Destiny number with the grid of the same date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinyNumberData {
    #[serde(rename = "Destiny_Number")]
    pub destiny_number: u32,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

/// Grid only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridData {
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

pub const GET_BASIC_NUMBER: &str = "/basic-number";
pub const GET_DESTINY_NUMBER: &str = "/destiny-number";
pub const GET_GRID: &str = "/grid";
