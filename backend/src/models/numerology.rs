//! Value types produced by the numerology pipeline.
//!
//! Field names on the wire follow the public JSON contract
//! (`MD_Number`, `Start_Date`, ...), hence the explicit renames.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::planet::Planet;

/// Occurrence count of each digit 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "BTreeMap<u32, u32>")]
pub struct NumerologyGrid {
    counts: [u32; 9],
}

impl NumerologyGrid {
    /// Count every value in 1-9; anything else is ignored.
    pub fn from_values<I: IntoIterator<Item = u32>>(values: I) -> Self {
        let mut counts = [0u32; 9];
        for value in values {
            if (1..=9).contains(&value) {
                counts[(value - 1) as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Count for `digit`, zero outside 1-9.
    pub fn count(&self, digit: u32) -> u32 {
        if (1..=9).contains(&digit) {
            self.counts[(digit - 1) as usize]
        } else {
            0
        }
    }

    /// `(digit, count)` pairs for digits 1 through 9.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, count)| (idx as u32 + 1, *count))
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl From<NumerologyGrid> for BTreeMap<u32, u32> {
    fn from(grid: NumerologyGrid) -> Self {
        grid.iter().collect()
    }
}

/// One planetary period of the mahadasha sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MahadashaStep {
    #[serde(rename = "MD_Number")]
    pub number: u32,
    #[serde(rename = "Planet")]
    pub planet: Planet,
    #[serde(rename = "Start_Year")]
    pub start_year: i32,
    #[serde(rename = "End_Year")]
    pub end_year: i32,
}

/// One sub-interval of the monthly dasha sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyDashaStep {
    #[serde(rename = "Start_Number")]
    pub number: u32,
    #[serde(rename = "Days")]
    pub days: i64,
    #[serde(rename = "Start_Date", serialize_with = "serialize_day_month")]
    pub start_date: NaiveDate,
    #[serde(rename = "End_Date", serialize_with = "serialize_day_month")]
    pub end_date: NaiveDate,
}

/// Day lord details for a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLordInfo {
    #[serde(rename = "Date", serialize_with = "serialize_day_month_year")]
    pub date: NaiveDate,
    #[serde(rename = "Day_Lord")]
    pub day_lord: u32,
    #[serde(rename = "Month_Number")]
    pub month_number: i64,
    #[serde(rename = "Day_Number")]
    pub day_number: i64,
}

// e.g. "15-Aug"
fn serialize_day_month<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%d-%b"))
}

// e.g. "15-Aug-1990"
fn serialize_day_month_year<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%d-%b-%Y"))
}
