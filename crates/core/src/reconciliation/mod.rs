//! Bank reconciliation.

pub mod bank;
pub mod error;

pub use bank::{BankReconciliation, LedgerComparison, reconciled_balance};
pub use error::ReconciliationError;
