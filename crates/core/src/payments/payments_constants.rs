//! Payment ledger constants.

/// Prefix of every receipt number.
pub const RECEIPT_NUMBER_PREFIX: &str = "REC-";

/// Digits of the millisecond epoch kept in a receipt number.
pub const RECEIPT_NUMBER_DIGITS: usize = 6;

/// Bank choices offered when recording a bank payment.
pub const BANKS: [&str; 4] = [
    "Sonali Bank Plc",
    "IFIC Bank Plc",
    "Rupali Bank Plc",
    "Modhumoti bank Plc",
];

/// Branch choices offered when recording a bank payment.
pub const BRANCHES: [&str; 3] = ["Madaripur", "Shibchar", "Panchar"];
