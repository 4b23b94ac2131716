/// Stored marker for transactions that add to the balance
pub const TRANSACTION_TYPE_INCOME: &str = "INCOME";

/// Stored marker for transactions that subtract from the balance
pub const TRANSACTION_TYPE_EXPENSE: &str = "EXPENSE";
