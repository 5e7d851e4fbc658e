pub mod country;
pub mod exchange;
pub mod news;
pub mod user;

/// Placeholder for a value no source could supply.
pub const NOT_AVAILABLE: &str = "N/A";
