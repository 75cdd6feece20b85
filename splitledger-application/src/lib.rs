#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger_processor;
pub mod model;
pub mod ports;
pub mod validation;

pub use error::{ExpenseSourceError, ExpenseValidationError, LedgerError};
pub use ledger_processor::{LedgerConfig, LedgerProcessor, ValidationMode};
pub use model::{GroupId, SettlementResult};
pub use ports::{ExpenseSource, ParticipantDirectory, SettlementStrategy};
pub use validation::ExpenseValidator;
