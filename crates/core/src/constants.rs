//! Application-wide constants.

/// Branding used in receipts, confirmation messages, and backup exports.
pub const APP_NAME: &str = "Rentfolio";
