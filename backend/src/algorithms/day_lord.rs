//! Day lord of a calendar date.

use chrono::NaiveDate;

use super::reduction::reduce_wide;
use crate::models::{day_lord_code_of, DayLordInfo};

/// Day lord code of `date` and its reduction together with `month_number`.
///
/// `month_number` is not range checked. Totals below 10, negative ones
/// included, are returned as they are.
pub fn day_lord(date: NaiveDate, month_number: i64) -> DayLordInfo {
    let code = day_lord_code_of(date);
    let total = i64::from(code).saturating_add(month_number);
    let day_number = match u64::try_from(total) {
        Ok(wide) if wide >= 10 => i64::from(reduce_wide(wide, false)),
        _ => total,
    };
    DayLordInfo {
        date,
        day_lord: code,
        month_number,
        day_number,
    }
}
