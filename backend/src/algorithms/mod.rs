//! Numerology derivations.
//!
//! Every function here is pure: the same inputs always produce the same
//! outputs, and the lookup tables they consult are constants.

pub mod antardasha;
pub mod day_lord;
pub mod grid;
pub mod mahadasha;
pub mod monthly_dasha;
pub mod numbers;
pub mod reduction;

pub use antardasha::antardasha_year_number;
pub use day_lord::day_lord;
pub use grid::build_grid;
pub use mahadasha::{
    check_end_year, mahadasha_sequence, DEFAULT_MAHADASHA_END_YEAR, MAX_MAHADASHA_END_YEAR,
    MIN_MAHADASHA_END_YEAR,
};
pub use monthly_dasha::monthly_dasha_sequence;
pub use numbers::{basic_number, destiny_number};
pub use reduction::{reduce, reduce_wide};
