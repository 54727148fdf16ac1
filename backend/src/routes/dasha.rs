use serde::Serialize;

use crate::models::{DayLordInfo, MahadashaStep, MonthlyDashaStep, NumerologyGrid};

// =========================================================
// Dasha types + routes
// =========================================================

/// Mahadasha sequence with the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MahadashaData {
    #[serde(rename = "Mahadasha")]
    pub mahadasha: Vec<MahadashaStep>,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

/// Antardasha year number with the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntardashaData {
    #[serde(rename = "Antardasha_Year_Number")]
    pub antardasha_year_number: u32,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

/// Monthly dasha sequence with the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyDashaData {
    #[serde(rename = "Monthly_Dasha")]
    pub monthly_dasha: Vec<MonthlyDashaStep>,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

/// Day lord of an arbitrary date, with the grid of the date of birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDashaData {
    #[serde(rename = "Day_Dasha")]
    pub day_dasha: DayLordInfo,
    #[serde(rename = "Grid")]
    pub grid: NumerologyGrid,
}

pub const GET_MAHADASHA: &str = "/mahadasha";
pub const GET_ANTARDASHA: &str = "/antardasha";
pub const GET_MONTHLY_DASHA: &str = "/monthly-dasha";
pub const GET_DAY_DASHA: &str = "/day-dasha";
