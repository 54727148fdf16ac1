//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the pure numerology
//! algorithms: they validate raw request input and assemble the response
//! types defined in [`crate::routes`].

pub mod numerology;

pub use numerology::{
    compute_grid, get_antardasha, get_basic_number, get_day_dasha, get_destiny_number, get_grid,
    get_mahadasha, get_monthly_dasha, get_profile,
};
