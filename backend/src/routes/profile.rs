use serde::Serialize;

use crate::models::{MahadashaStep, MonthlyDashaStep, NumerologyGrid};

// =========================================================
// Full profile types + route
// =========================================================

/// Complete numerology profile for a date of birth and a reference year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumerologyProfile {
    #[serde(rename = "Basic_Number")]
    pub basic_number: u32,
    #[serde(rename = "Destiny_Number")]
    pub destiny_number: u32,
    #[serde(rename = "Numerology_Grid")]
    pub grid: NumerologyGrid,
    #[serde(rename = "Mahadasha_Sequence")]
    pub mahadasha: Vec<MahadashaStep>,
    #[serde(rename = "Antardasha_Year_Number")]
    pub antardasha_year_number: u32,
    #[serde(rename = "Monthly_Dasha")]
    pub monthly_dasha: Vec<MonthlyDashaStep>,
}

/// Route path for the full profile
pub const GET_NUMEROLOGY: &str = "/numerology";
