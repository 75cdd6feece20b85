use arcstr::ArcStr;
use serde::{Deserialize, Serialize};
use splitledger_domain::{Balances, Money, Transfer};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(ArcStr);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(ArcStr::from(id))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementResult {
    /// Net balances straight from the expenses.
    pub balances: Balances,
    pub transfers: Vec<Transfer>,
    pub public_balances: Balances,
    /// Sum of all balances. Non-zero only when some expense's shares do not
    /// add up to its amount; that much stays unsettled.
    pub unbalanced_total: Money,
}

impl SettlementResult {
    pub fn is_fully_settled(&self) -> bool {
        self.unbalanced_total.is_zero()
    }
}
