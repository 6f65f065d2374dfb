//! Ferrous Authority Application Layer
pub mod services;
pub mod use_cases;
