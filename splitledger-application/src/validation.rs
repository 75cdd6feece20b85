use crate::error::ExpenseValidationError;
use fxhash::FxHashSet;
use splitledger_domain::{ExpenseLine, ParticipantId};

/// Boundary checks for expense records before they reach the engine.
#[derive(Debug, Default)]
pub struct ExpenseValidator {
    roster: Option<FxHashSet<ParticipantId>>,
}

impl ExpenseValidator {
    /// Checks share sums only; any participant id is accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also rejects participants outside `roster`.
    pub fn with_roster<I>(roster: I) -> Self
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        Self {
            roster: Some(roster.into_iter().collect()),
        }
    }

    pub fn validate(&self, expense: &ExpenseLine) -> Result<(), ExpenseValidationError> {
        if let Some(roster) = &self.roster
            && let Some(unknown) = expense.participants().find(|id| !roster.contains(*id))
        {
            return Err(ExpenseValidationError::UnknownParticipant(unknown.clone()));
        }

        if expense.shares.is_empty() {
            return Err(ExpenseValidationError::NoShares);
        }

        let shares = expense.shares_total();
        if shares != expense.amount {
            return Err(ExpenseValidationError::ShareSumMismatch {
                amount: expense.amount,
                shares,
            });
        }

        Ok(())
    }
}
