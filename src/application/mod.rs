pub mod app_error;
pub mod geo;
pub mod ports;
pub mod use_cases;
pub mod validators;
