//! Core logic for the LedgerLearn accounting course.
//!
//! This crate contains pure calculation and grading logic with no I/O.
//! All domain types, answer keys, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Journal lines, account categories and balance checks
//! - `depreciation` - Straight-line depreciation
//! - `lease` - Lease incentive amortization and its recurring entry
//! - `reconciliation` - Bank reconciliation
//! - `budget` - Property budget, forecast and variance
//! - `quiz` - Multiple-choice and journal entry grading
//! - `course` - Pages and the exercises on them

pub mod budget;
pub mod course;
pub mod depreciation;
pub mod error;
pub mod lease;
pub mod ledger;
pub mod quiz;
pub mod reconciliation;
