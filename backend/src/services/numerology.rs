//! Per-endpoint numerology composition.
//!
//! Each function validates its date input and recomputes everything it
//! returns, the grid included. Nothing is cached between calls.

use log::debug;

use crate::algorithms::{
    antardasha_year_number, basic_number, build_grid, check_end_year, day_lord, destiny_number,
    mahadasha_sequence, monthly_dasha_sequence,
};
use crate::api::{
    AntardashaData, BasicNumberData, DayDashaData, DestinyNumberData, GridData, MahadashaData,
    MonthlyDashaData, NumerologyProfile,
};
use crate::error::NumerologyResult;
use crate::models::{parse_date, BirthDate, NumerologyGrid};

/// Grid for `dob`, derived from freshly computed basic and destiny numbers.
pub fn compute_grid(dob: &BirthDate) -> NumerologyGrid {
    build_grid(dob, basic_number(dob), destiny_number(dob))
}

/// Full profile: numbers, grid, mahadasha up to `end_year`, and the
/// antardasha and monthly dasha of `year`.
pub fn get_profile(dob: &str, year: i32, end_year: i32) -> NumerologyResult<NumerologyProfile> {
    let dob = BirthDate::parse(dob)?;
    let end_year = check_end_year(end_year)?;
    let basic = basic_number(&dob);
    let destiny = destiny_number(&dob);
    let grid = build_grid(&dob, basic, destiny);
    let mahadasha = mahadasha_sequence(basic, dob.year(), end_year);
    let antardasha = antardasha_year_number(year, &dob, basic)?;
    let monthly_dasha = monthly_dasha_sequence(antardasha, &dob, year)?;

    debug!(
        "profile dob={} year={} basic={} destiny={} antardasha={} mahadasha_steps={}",
        dob,
        year,
        basic,
        destiny,
        antardasha,
        mahadasha.len()
    );

    Ok(NumerologyProfile {
        basic_number: basic,
        destiny_number: destiny,
        grid,
        mahadasha,
        antardasha_year_number: antardasha,
        monthly_dasha,
    })
}

pub fn get_basic_number(dob: &str) -> NumerologyResult<BasicNumberData> {
    let dob = BirthDate::parse(dob)?;
    Ok(BasicNumberData {
        basic_number: basic_number(&dob),
        grid: compute_grid(&dob),
    })
}

pub fn get_destiny_number(dob: &str) -> NumerologyResult<DestinyNumberData> {
    let dob = BirthDate::parse(dob)?;
    Ok(DestinyNumberData {
        destiny_number: destiny_number(&dob),
        grid: compute_grid(&dob),
    })
}

pub fn get_grid(dob: &str) -> NumerologyResult<GridData> {
    let dob = BirthDate::parse(dob)?;
    Ok(GridData {
        grid: compute_grid(&dob),
    })
}

/// Mahadasha sequence from the birth year through `end_year`.
pub fn get_mahadasha(dob: &str, end_year: i32) -> NumerologyResult<MahadashaData> {
    let dob = BirthDate::parse(dob)?;
    let end_year = check_end_year(end_year)?;
    let basic = basic_number(&dob);
    let mahadasha = mahadasha_sequence(basic, dob.year(), end_year);
    debug!("mahadasha dob={} end_year={} steps={}", dob, end_year, mahadasha.len());
    Ok(MahadashaData {
        mahadasha,
        grid: compute_grid(&dob),
    })
}

pub fn get_antardasha(dob: &str, year: i32) -> NumerologyResult<AntardashaData> {
    let dob = BirthDate::parse(dob)?;
    let basic = basic_number(&dob);
    Ok(AntardashaData {
        antardasha_year_number: antardasha_year_number(year, &dob, basic)?,
        grid: compute_grid(&dob),
    })
}

pub fn get_monthly_dasha(dob: &str, year: i32) -> NumerologyResult<MonthlyDashaData> {
    let dob = BirthDate::parse(dob)?;
    let basic = basic_number(&dob);
    let start = antardasha_year_number(year, &dob, basic)?;
    Ok(MonthlyDashaData {
        monthly_dasha: monthly_dasha_sequence(start, &dob, year)?,
        grid: compute_grid(&dob),
    })
}

/// Day lord of `date` combined with `month_number`, plus the grid of `dob`.
///
/// `date` is only format checked; the birth year range does not apply.
pub fn get_day_dasha(dob: &str, date: &str, month_number: i64) -> NumerologyResult<DayDashaData> {
    let dob = BirthDate::parse(dob)?;
    let date = parse_date("date", date)?;
    Ok(DayDashaData {
        day_dasha: day_lord(date, month_number),
        grid: compute_grid(&dob),
    })
}
