//! Public API surface for the numerology backend.
//!
//! This file consolidates the response types served over HTTP.
//! All of them serialize to the JSON field names of the public contract.

pub use crate::routes::dasha::AntardashaData;
pub use crate::routes::dasha::DayDashaData;
pub use crate::routes::dasha::MahadashaData;
pub use crate::routes::dasha::MonthlyDashaData;
pub use crate::routes::numbers::BasicNumberData;
pub use crate::routes::numbers::DestinyNumberData;
pub use crate::routes::numbers::GridData;
pub use crate::routes::profile::NumerologyProfile;

pub use crate::models::{
    BirthDate, DayLordInfo, MahadashaStep, MonthlyDashaStep, NumerologyGrid, Planet,
};
