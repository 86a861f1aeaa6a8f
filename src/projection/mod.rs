//! Financial projection: loan amortization, tax, cash flow, and history

mod engine;
mod history;
mod loan;
mod result;

pub use engine::{ProjectionEngine, ProjectionConfig};
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use loan::{monthly_payment, LoanSchedule, LoanYearRow};
pub use result::ProjectionResult;
