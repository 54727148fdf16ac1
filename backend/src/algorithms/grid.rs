//! Numerology grid: how often each digit 1-9 appears in a birth date.

use crate::models::{BirthDate, NumerologyGrid};

/// Whether the basic number is added to the grid for a given birth day.
///
/// Single-digit days and days 10, 20, 30 already show their basic number
/// in the date digits themselves.
pub fn includes_basic_number(day: u32) -> bool {
    day > 10 && day != 20 && day != 30
}

/// Non-zero digits of the date written as `DDMMYY`.
pub fn grid_digits(dob: &BirthDate) -> Vec<u32> {
    let yy = dob.year().rem_euclid(100);
    format!("{:02}{:02}{:02}", dob.day(), dob.month(), yy)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter(|d| *d != 0)
        .collect()
}

/// Build the grid from the date digits, the destiny number and, when
/// [`includes_basic_number`] holds, the basic number.
pub fn build_grid(dob: &BirthDate, basic: u32, destiny: u32) -> NumerologyGrid {
    let mut values = grid_digits(dob);
    values.push(destiny);
    if includes_basic_number(dob.day()) {
        values.push(basic);
    }
    NumerologyGrid::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::numbers::{basic_number, destiny_number};

    fn grid_for(s: &str) -> NumerologyGrid {
        let dob = BirthDate::parse(s).unwrap();
        build_grid(&dob, basic_number(&dob), destiny_number(&dob))
    }

    #[test]
    fn test_includes_basic_number() {
        assert!(!includes_basic_number(1));
        assert!(!includes_basic_number(10));
        assert!(includes_basic_number(11));
        assert!(includes_basic_number(19));
        assert!(!includes_basic_number(20));
        assert!(includes_basic_number(29));
        assert!(!includes_basic_number(30));
        assert!(includes_basic_number(31));
    }

    #[test]
    fn test_grid_digits_drop_zeros() {
        let dob = BirthDate::parse("10-01-2000").unwrap();
        assert_eq!(grid_digits(&dob), vec![1, 1]);
        let dob = BirthDate::parse("15-08-1990").unwrap();
        assert_eq!(grid_digits(&dob), vec![1, 5, 8, 9]);
    }

    #[test]
    fn test_grid_15_08_1990() {
        // digits 1,5,8,9 + destiny 6 + basic 6
        let grid = grid_for("15-08-1990");
        assert_eq!(grid.count(1), 1);
        assert_eq!(grid.count(5), 1);
        assert_eq!(grid.count(8), 1);
        assert_eq!(grid.count(9), 1);
        assert_eq!(grid.count(6), 2);
        assert_eq!(grid.total(), 6);
    }

    #[test]
    fn test_grid_day_ten_skips_basic() {
        // digits 1,1 + destiny 4; basic number (1) not added
        let grid = grid_for("10-01-2000");
        assert_eq!(grid.count(1), 2);
        assert_eq!(grid.count(4), 1);
        assert_eq!(grid.total(), 3);
    }

    #[test]
    fn test_grid_full_digit_date() {
        // 23-11-1987: digits 2,3,1,1,8,7 + destiny 5 + basic 5
        let grid = grid_for("23-11-1987");
        assert_eq!(grid.count(1), 2);
        assert_eq!(grid.count(5), 2);
        assert_eq!(grid.total(), 8);
    }
}
