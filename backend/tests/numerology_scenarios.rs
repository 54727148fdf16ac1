//! End-to-end numerology scenarios and properties over the public library API.

use chrono::NaiveDate;
use proptest::prelude::*;

use numerology_api::algorithms::{
    antardasha_year_number, basic_number, build_grid, day_lord, destiny_number,
    mahadasha_sequence, monthly_dasha_sequence, reduce,
};
use numerology_api::algorithms::grid::{grid_digits, includes_basic_number};
use numerology_api::api::{BirthDate, Planet};
use numerology_api::error::NumerologyError;
use numerology_api::services;

fn dob(s: &str) -> BirthDate {
    BirthDate::parse(s).unwrap()
}

// =========================================================
// Scenarios
// =========================================================

#[test]
fn test_basic_and_destiny_15_08_1990() {
    let d = dob("15-08-1990");
    assert_eq!(basic_number(&d), 6);
    assert_eq!(destiny_number(&d), 6);
}

#[test]
fn test_grid_10_01_2000_excludes_basic_number() {
    let d = dob("10-01-2000");
    let basic = basic_number(&d);
    let destiny = destiny_number(&d);
    assert!(!includes_basic_number(d.day()));

    let grid = build_grid(&d, basic, destiny);
    // digits 1,1 plus destiny 4 only
    assert_eq!(grid.count(1), 2);
    assert_eq!(grid.count(4), 1);
    assert_eq!(grid.total(), 3);
}

#[test]
fn test_mahadasha_from_sun_2000_to_2010() {
    let seq = mahadasha_sequence(1, 2000, 2010);
    assert_eq!((seq[0].number, seq[0].planet), (1, Planet::Sun));
    assert_eq!((seq[0].start_year, seq[0].end_year), (2000, 2001));
    assert_eq!((seq[1].number, seq[1].planet), (2, Planet::Moon));
    assert_eq!((seq[1].start_year, seq[1].end_year), (2001, 2003));
    assert!(seq.iter().all(|s| s.start_year <= 2010));
    assert!(seq.last().unwrap().end_year > 2010);
}

#[test]
fn test_antardasha_invalid_calendar_date() {
    let d = dob("29-02-2000");
    let err = antardasha_year_number(2021, &d, basic_number(&d)).unwrap_err();
    assert!(matches!(
        err,
        NumerologyError::InvalidCalendarDate {
            year: 2021,
            month: 2,
            day: 29
        }
    ));
}

#[test]
fn test_full_profile_23_11_1987() {
    let profile = services::get_profile("23-11-1987", 2025, 2030).unwrap();
    assert_eq!(profile.basic_number, 5);
    assert_eq!(profile.destiny_number, 5);
    assert_eq!(profile.antardasha_year_number, 6);

    let planets: Vec<Planet> = profile.mahadasha.iter().map(|s| s.planet).collect();
    assert_eq!(
        planets,
        vec![
            Planet::Mercury,
            Planet::Venus,
            Planet::Ketu,
            Planet::Saturn,
            Planet::Mars,
            Planet::Sun,
            Planet::Moon,
            Planet::Jupiter,
            Planet::Rahu,
        ]
    );
    assert_eq!(profile.mahadasha.last().unwrap().end_year, 2032);

    let first = &profile.monthly_dasha[0];
    assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2025, 11, 23).unwrap());
    assert_eq!(first.end_date, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
    let last = &profile.monthly_dasha[8];
    assert_eq!(last.number, 5);
    assert_eq!(last.end_date, NaiveDate::from_ymd_opt(2026, 11, 18).unwrap());
}

#[test]
fn test_grid_leap_day_birth() {
    let grid = services::get_grid("29-02-2000").unwrap().grid;
    assert_eq!(grid.count(2), 3);
    assert_eq!(grid.count(6), 1);
    assert_eq!(grid.count(9), 1);
    assert_eq!(grid.total(), 5);
}

#[test]
fn test_day_lord_christmas_2024() {
    // Wednesday (5) + 11 = 16 -> 7
    let info = day_lord(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(), 11);
    assert_eq!(info.day_lord, 5);
    assert_eq!(info.day_number, 7);
}

#[test]
fn test_basic_number_ignores_zero_destiny_counts_it() {
    // Day 10 and day 1 share a basic number, zeros never matter there
    assert_eq!(basic_number(&dob("10-05-1990")), basic_number(&dob("01-05-1990")));
    // 20 -> 2, 02 -> 2
    assert_eq!(basic_number(&dob("20-05-1990")), basic_number(&dob("02-05-1990")));
}

// =========================================================
// Properties
// =========================================================

fn any_birth_date() -> impl Strategy<Value = BirthDate> {
    (1900i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| BirthDate::from_ymd(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn prop_reduce_in_range(n in 1u32..u32::MAX) {
        let r = reduce(n, false);
        prop_assert!((1..=9).contains(&r));
        prop_assert_eq!(reduce(n, true), r);
    }

    #[test]
    fn prop_grid_total(d in any_birth_date()) {
        let basic = basic_number(&d);
        let destiny = destiny_number(&d);
        let grid = build_grid(&d, basic, destiny);
        let expected = grid_digits(&d).len() as u32
            + 1
            + u32::from(includes_basic_number(d.day()));
        prop_assert_eq!(grid.total(), expected);
        prop_assert!(grid.total() <= 8);
    }

    #[test]
    fn prop_mahadasha_contiguous_and_cycling(
        basic in 1u32..=9,
        birth_year in 1900i32..=2100,
        span in 0i32..200,
    ) {
        let end_year = birth_year + span;
        let seq = mahadasha_sequence(basic, birth_year, end_year);
        prop_assert!(!seq.is_empty());
        prop_assert_eq!(seq[0].number, basic);
        prop_assert_eq!(seq[0].start_year, birth_year);
        for pair in seq.windows(2) {
            prop_assert_eq!(pair[0].end_year, pair[1].start_year);
            let expected_next = if pair[0].number == 9 { 1 } else { pair[0].number + 1 };
            prop_assert_eq!(pair[1].number, expected_next);
        }
        for step in &seq {
            prop_assert!(step.start_year <= end_year);
            prop_assert_eq!(step.end_year - step.start_year, step.number as i32);
        }
        prop_assert!(seq.last().unwrap().end_year > end_year);
        prop_assert_eq!(seq, mahadasha_sequence(basic, birth_year, end_year));
    }

    #[test]
    fn prop_monthly_dasha_shape(
        d in any_birth_date(),
        start in 1u32..=9,
        year in 1900i32..=2200,
    ) {
        let seq = monthly_dasha_sequence(start, &d, year).unwrap();
        prop_assert_eq!(seq.len(), 9);
        for step in &seq {
            prop_assert_eq!(step.days, i64::from(step.number) * 8);
            prop_assert!(step.start_date < step.end_date);
        }
        for pair in seq.windows(2) {
            prop_assert_eq!(pair[0].end_date, pair[1].start_date);
        }
    }

    #[test]
    fn prop_antardasha_in_range(d in any_birth_date(), year in 1900i32..=2200) {
        let n = antardasha_year_number(year, &d, basic_number(&d)).unwrap();
        prop_assert!((1..=9).contains(&n));
    }
}
