use crate::model::GroupId;
use splitledger_domain::{Money, ParticipantId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpenseSourceError {
    #[error("group {0} not found")]
    GroupNotFound(GroupId),
    #[error("expense source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("expense has no shares")]
    NoShares,
    #[error("shares add up to {shares} but the expense amount is {amount}")]
    ShareSumMismatch { amount: Money, shares: Money },
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Source(#[from] ExpenseSourceError),
    #[error("expense #{index} is invalid: {reason}")]
    InvalidExpense {
        index: usize,
        reason: ExpenseValidationError,
    },
}
