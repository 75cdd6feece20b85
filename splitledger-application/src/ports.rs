use crate::{error::ExpenseSourceError, model::GroupId};
use indexmap::IndexMap;
use splitledger_domain::{Balances, ExpenseLine, ParticipantId, SettlementPlanner, Transfer};
use std::collections::HashMap;

/// Supplies a full snapshot of a group's expenses.
pub trait ExpenseSource: Send + Sync {
    fn expenses(&self, group: &GroupId) -> Result<Vec<ExpenseLine>, ExpenseSourceError>;

    /// Known participants of `group`, for sources that keep a roster.
    fn roster(&self, _group: &GroupId) -> Option<Vec<ParticipantId>> {
        None
    }
}

/// Turns net balances into suggested transfers.
///
/// Implementations must emit positive amounts between distinct participants
/// and, for zero-sum input, bring every balance to zero.
pub trait SettlementStrategy: Send + Sync {
    fn settle(&self, balances: &Balances) -> Vec<Transfer>;
}

impl SettlementStrategy for SettlementPlanner {
    fn settle(&self, balances: &Balances) -> Vec<Transfer> {
        self.suggest_transfers(balances)
    }
}

pub trait ParticipantDirectory: Send + Sync {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str> {
        self.get(participant).map(String::as_str)
    }
}

impl ParticipantDirectory for IndexMap<ParticipantId, String> {
    fn display_name(&self, participant: &ParticipantId) -> Option<&str> {
        self.get(participant).map(String::as_str)
    }
}
