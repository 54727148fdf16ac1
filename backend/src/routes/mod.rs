pub mod dasha;
pub mod numbers;
pub mod profile;
