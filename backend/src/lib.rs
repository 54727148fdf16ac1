//! # Numerology Backend
//!
//! Numerology computations from a date of birth, served over a REST API.
//!
//! Given a `DD-MM-YYYY` date of birth (and, for some computations, a
//! reference year) the crate derives:
//!
//! - **Basic number**: the birth day reduced to a single digit
//! - **Destiny number**: every digit of the birth date reduced
//! - **Numerology grid**: how often each digit 1-9 appears
//! - **Mahadasha**: planetary periods from the birth year onward
//! - **Antardasha**: the year number for a calendar year
//! - **Monthly dasha**: nine sub-periods starting on that year's birthday
//! - **Day lord**: the weekday code of any date
//!
//! ## Architecture
//!
//! - [`algorithms`]: pure derivations
//! - [`models`]: validated inputs, lookup tables and result types
//! - [`services`]: per-endpoint composition
//! - [`routes`]: response types and route paths
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: TOML and environment configuration

pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
