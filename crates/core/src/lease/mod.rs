//! Lease incentive amortization.
//!
//! A lease incentive (concession) is spread evenly over the lease term:
//! each month debits Concessions (Expense) and credits Rental Income
//! (Revenue) by `incentive / term`.

pub mod error;
pub mod incentive;
pub mod recurring;
pub mod schedule;
pub mod term;

#[cfg(test)]
mod schedule_props;

pub use error::LeaseError;
pub use incentive::{CONCESSIONS, LeaseIncentive, RENTAL_INCOME, monthly_adjustment};
pub use recurring::{Cadence, RecurringLine};
pub use schedule::{LeaseSchedule, ScheduleIter, ScheduleMonth};
pub use term::LeaseTerm;
