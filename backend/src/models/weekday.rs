use chrono::{Datelike, NaiveDate, Weekday};

/// Numeric code of the planet ruling a weekday.
pub const fn day_lord_code(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Sun => 1,
        Weekday::Mon => 2,
        Weekday::Tue => 9,
        Weekday::Wed => 5,
        Weekday::Thu => 3,
        Weekday::Fri => 6,
        Weekday::Sat => 8,
    }
}

/// Day lord code of the weekday `date` falls on.
pub fn day_lord_code_of(date: NaiveDate) -> u32 {
    day_lord_code(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(day_lord_code(Weekday::Sun), 1);
        assert_eq!(day_lord_code(Weekday::Mon), 2);
        assert_eq!(day_lord_code(Weekday::Tue), 9);
        assert_eq!(day_lord_code(Weekday::Wed), 5);
        assert_eq!(day_lord_code(Weekday::Thu), 3);
        assert_eq!(day_lord_code(Weekday::Fri), 6);
        assert_eq!(day_lord_code(Weekday::Sat), 8);
    }

    #[test]
    fn test_code_of_date() {
        // 2024-01-01 was a Monday
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_lord_code_of(date), 2);
        // 1990-08-15 was a Wednesday
        let date = NaiveDate::from_ymd_opt(1990, 8, 15).unwrap();
        assert_eq!(day_lord_code_of(date), 5);
    }
}
