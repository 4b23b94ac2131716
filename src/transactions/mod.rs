// Module declarations
pub(crate) mod transactions_constants;
pub(crate) mod transactions_errors;
pub(crate) mod transactions_model;
pub(crate) mod transactions_repository;
pub(crate) mod transactions_service;
pub(crate) mod transactions_traits;

// Re-export the public interface
pub use transactions_constants::*;
pub use transactions_errors::TransactionError;
pub use transactions_model::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
pub use transactions_repository::TransactionRepository;
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
