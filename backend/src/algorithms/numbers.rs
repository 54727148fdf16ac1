//! Basic and destiny number derivation.

use super::reduction::{digit_sum, reduce, sum_ascii_digits};
use crate::models::BirthDate;

/// Basic number: the day of month reduced to one digit, zeros dropped.
pub fn basic_number(dob: &BirthDate) -> u32 {
    reduce(digit_sum(dob.day(), true), true)
}

/// Destiny number: every digit of the `DDMMYYYY` date summed and reduced.
pub fn destiny_number(dob: &BirthDate) -> u32 {
    let formatted = dob.date().format("%d%m%Y").to_string();
    reduce(sum_ascii_digits(&formatted), false)
}
