//! Mahadasha sequence: consecutive planetary periods from the birth year.

use crate::error::{NumerologyError, NumerologyResult};
use crate::models::{MahadashaStep, Planet, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};

/// Last year covered by the mahadasha sequence unless configured otherwise.
pub const DEFAULT_MAHADASHA_END_YEAR: i32 = 2030;

/// Earliest accepted mahadasha end year (inclusive).
pub const MIN_MAHADASHA_END_YEAR: i32 = MIN_BIRTH_YEAR;

/// Latest accepted mahadasha end year (inclusive).
pub const MAX_MAHADASHA_END_YEAR: i32 = MAX_BIRTH_YEAR + 300;

/// Reject an end year outside
/// [`MIN_MAHADASHA_END_YEAR`, `MAX_MAHADASHA_END_YEAR`].
pub fn check_end_year(end_year: i32) -> NumerologyResult<i32> {
    if (MIN_MAHADASHA_END_YEAR..=MAX_MAHADASHA_END_YEAR).contains(&end_year) {
        Ok(end_year)
    } else {
        Err(NumerologyError::year_out_of_range(
            "end_year",
            end_year,
            MIN_MAHADASHA_END_YEAR,
            MAX_MAHADASHA_END_YEAR,
        ))
    }
}

/// Walk the planetary cycle from `basic` starting at `birth_year`.
///
/// A step is emitted while its start year is `<= end_year`, so the last
/// step may run past `end_year`. Steps are contiguous: each step ends on
/// the year the next one starts. The walk stops early if a step's end year
/// would not fit in an `i32`.
///
/// # Arguments
///
/// * `basic` - Basic number (1-9) selecting the first planet
/// * `birth_year` - Start of the first period
/// * `end_year` - Last year a period may start in (inclusive)
pub fn mahadasha_sequence(basic: u32, birth_year: i32, end_year: i32) -> Vec<MahadashaStep> {
    let mut steps = Vec::new();
    let Some(mut planet) = Planet::from_number(basic) else {
        return steps;
    };
    let mut year = birth_year;

    while year <= end_year {
        let Some(next_year) = year.checked_add(planet.duration_years()) else {
            break;
        };
        steps.push(MahadashaStep {
            number: planet.number(),
            planet,
            start_year: year,
            end_year: next_year,
        });
        year = next_year;
        planet = planet.next();
    }

    steps
}
