//! Domain model for shift task tracking.
//!
//! Tasks are opened during a shift, closed with an outcome, and drained into
//! a report when the shift ends. All infrastructure concerns stay outside of
//! the domain boundary.

mod bulk;
mod error;
mod ids;
mod ledger;
mod report;
mod task;

pub use bulk::parse_bulk;
pub use error::TaskDomainError;
pub use ids::{OperatorId, TaskNumber};
pub use ledger::ShiftLedger;
pub use report::ShiftReport;
pub use task::{ClosedTask, OpenTask, Outcome, PENDING_COMMENT, TaskClosure, TaskStatus};
