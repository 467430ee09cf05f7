//! Conversions from module errors into [`AppError`].

use ledgerlearn_shared::AppError;

use crate::budget::BudgetError;
use crate::course::CourseError;
use crate::depreciation::DepreciationError;
use crate::lease::LeaseError;
use crate::ledger::LedgerValidationError;
use crate::quiz::QuizError;
use crate::reconciliation::ReconciliationError;

impl From<LedgerValidationError> for AppError {
    fn from(err: LedgerValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<DepreciationError> for AppError {
    fn from(err: DepreciationError) -> Self {
        Self::NotComputed(err.to_string())
    }
}

impl From<LeaseError> for AppError {
    fn from(err: LeaseError) -> Self {
        Self::NotComputed(err.to_string())
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::NotComputed(err.to_string())
    }
}

impl From<ReconciliationError> for AppError {
    fn from(err: ReconciliationError) -> Self {
        Self::NotComputed(err.to_string())
    }
}

// Answer keys are fixed, so a bad definition is a defect, not bad input.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        Self::Internal(format!("{}: {err}", err.error_code()))
    }
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        Self::Internal(format!("{}: {err}", err.error_code()))
    }
}
