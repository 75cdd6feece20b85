use indexmap::{IndexMap, map::Entry};
use serde::{Deserialize, Serialize};
use splitledger_application::{ExpenseSource, ExpenseSourceError, GroupId};
use splitledger_domain::{ExpenseLine, Money, ParticipantId, Share};
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("group {0} appears in more than one snapshot")]
    DuplicateGroup(GroupId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub id: ParticipantId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidForRecord {
    pub participant: ParticipantId,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default)]
    pub title: Option<String>,
    pub amount: Money,
    pub paid_by: ParticipantId,
    #[serde(default)]
    pub paid_for: Vec<PaidForRecord>,
}

impl From<&ExpenseRecord> for ExpenseLine {
    fn from(record: &ExpenseRecord) -> Self {
        ExpenseLine {
            amount: record.amount,
            payer: record.paid_by.clone(),
            shares: record
                .paid_for
                .iter()
                .map(|paid_for| Share {
                    participant: paid_for.participant.clone(),
                    amount: paid_for.amount,
                })
                .collect(),
        }
    }
}

/// One exported group: roster, currency and expenses in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    pub group_id: GroupId,
    pub group_name: String,
    pub currency: String,
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl GroupSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn expense_lines(&self) -> Vec<ExpenseLine> {
        self.expenses.iter().map(ExpenseLine::from).collect()
    }

    /// Participant id to display name, in roster order.
    pub fn directory(&self) -> IndexMap<ParticipantId, String> {
        self.participants
            .iter()
            .map(|participant| (participant.id.clone(), participant.name.clone()))
            .collect()
    }
}

/// [`ExpenseSource`] backed by in-memory group snapshots.
#[derive(Debug, Default)]
pub struct JsonExpenseSource {
    groups: IndexMap<GroupId, GroupSnapshot>,
}

impl JsonExpenseSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snapshot: GroupSnapshot) -> Result<&GroupSnapshot, SnapshotError> {
        match self.groups.entry(snapshot.group_id.clone()) {
            Entry::Occupied(_) => Err(SnapshotError::DuplicateGroup(snapshot.group_id)),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    group = %snapshot.group_id,
                    expenses = snapshot.expenses.len(),
                    "registered group snapshot"
                );
                Ok(slot.insert(snapshot))
            }
        }
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&GroupSnapshot, SnapshotError> {
        let snapshot = GroupSnapshot::from_path(path)?;
        self.insert(snapshot)
    }

    pub fn group(&self, group: &GroupId) -> Option<&GroupSnapshot> {
        self.groups.get(group)
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupSnapshot> + '_ {
        self.groups.values()
    }
}

impl ExpenseSource for JsonExpenseSource {
    fn expenses(&self, group: &GroupId) -> Result<Vec<ExpenseLine>, ExpenseSourceError> {
        self.groups
            .get(group)
            .map(GroupSnapshot::expense_lines)
            .ok_or_else(|| ExpenseSourceError::GroupNotFound(group.clone()))
    }

    /// Snapshots without a participant list have no roster.
    fn roster(&self, group: &GroupId) -> Option<Vec<ParticipantId>> {
        let snapshot = self.groups.get(group)?;
        if snapshot.participants.is_empty() {
            return None;
        }
        Some(
            snapshot
                .participants
                .iter()
                .map(|participant| participant.id.clone())
                .collect(),
        )
    }
}
