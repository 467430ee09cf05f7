//! Double-entry bookkeeping logic.
//!
//! This module implements the ledger rules the course exercises rely on:
//! - Journal lines (debits and credits) and account categories
//! - Debit/credit balance checks
//! - Strict validation of journal entries

pub mod balance;
pub mod entry;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::{BalanceCheck, is_balanced};
pub use entry::{AccountCategory, EntryType, JournalLine, WorkedEntry};
pub use validation::{LedgerValidationError, validate_lines};
