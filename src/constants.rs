/// Decimal precision for budget percentage values
pub const PERCENTAGE_DECIMAL_PRECISION: u32 = 2;

/// ISO date format used for transaction date columns
pub const DATE_FORMAT: &str = "%Y-%m-%d";
