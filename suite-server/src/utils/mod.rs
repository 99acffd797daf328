//! Helpers: logging, business-day time and input validation

pub mod logger;
pub mod time;
pub mod validation;
