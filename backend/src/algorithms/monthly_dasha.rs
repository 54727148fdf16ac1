//! Monthly dasha: nine consecutive sub-periods starting on the birthday.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{NumerologyError, NumerologyResult};
use crate::models::{next_in_cycle, BirthDate, MonthlyDashaStep};

/// Number of sub-periods in a monthly dasha sequence.
pub const MONTHLY_DASHA_STEPS: usize = 9;

/// Days each unit of a dasha number lasts.
pub const DAYS_PER_NUMBER: u32 = 8;

/// Build the monthly dasha sequence for `year`, starting on the birthday in
/// that year with `start_number` (normally the antardasha year number).
///
/// Always yields exactly [`MONTHLY_DASHA_STEPS`] steps; each spans
/// `number * 8` days and starts where the previous one ended.
pub fn monthly_dasha_sequence(
    start_number: u32,
    dob: &BirthDate,
    year: i32,
) -> NumerologyResult<Vec<MonthlyDashaStep>> {
    let mut start = dob.anniversary_in(year)?;
    let mut current = start_number;
    let mut steps = Vec::with_capacity(MONTHLY_DASHA_STEPS);

    for _ in 0..MONTHLY_DASHA_STEPS {
        let days = current * DAYS_PER_NUMBER;
        let end = add_days(start, days)?;
        steps.push(MonthlyDashaStep {
            number: current,
            days: i64::from(days),
            start_date: start,
            end_date: end,
        });
        start = end;
        current = next_in_cycle(current);
    }

    Ok(steps)
}

fn add_days(date: NaiveDate, days: u32) -> NumerologyResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| NumerologyError::invalid_calendar_date(date.year(), date.month(), date.day()))
}
