#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const BALANCES_TITLE: &str = "収支";
    pub const REIMBURSEMENTS_TITLE: &str = "おすすめの精算";
    pub const NO_BALANCES: &str = "表示する収支はありません";
    pub const NO_REIMBURSEMENTS: &str = "精算は不要です";
    pub const SPENDING_TITLE: &str = "支出の統計";
    pub const TOTAL_SPENT: &str = "合計";
    pub const EXPENSE_COUNT: &str = "件数";
    pub const PARTICIPANT_COUNT: &str = "参加者数";
    pub const AVERAGE_EXPENSE: &str = "平均";
    pub const HIGHEST_EXPENSE: &str = "最高額";
    pub const TOP_PAYERS: &str = "支払いの多いメンバー";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const BALANCES_TITLE: &str = "Balances";
    pub const REIMBURSEMENTS_TITLE: &str = "Suggested Reimbursements";
    pub const NO_BALANCES: &str = "No balances to display";
    pub const NO_REIMBURSEMENTS: &str = "No reimbursements needed";
    pub const SPENDING_TITLE: &str = "Group Statistics";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const EXPENSE_COUNT: &str = "Expenses";
    pub const PARTICIPANT_COUNT: &str = "Participants";
    pub const AVERAGE_EXPENSE: &str = "Average expense";
    pub const HIGHEST_EXPENSE: &str = "Highest expense";
    pub const TOP_PAYERS: &str = "Top payers";
}

pub use strings::*;

pub struct UnsettledResidualMessage {
    amount: String,
}

pub struct UnknownGroupMessage {
    group: String,
}

/// `amount` is expected to be already formatted for display.
pub fn unsettled_residual(amount: impl Into<String>) -> UnsettledResidualMessage {
    UnsettledResidualMessage {
        amount: amount.into(),
    }
}

pub fn unknown_group(group: impl std::fmt::Display) -> UnknownGroupMessage {
    UnknownGroupMessage {
        group: group.to_string(),
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for UnsettledResidualMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "内訳の合計が支出額と一致しません。{} が精算されずに残ります。",
            self.amount
        )
    }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for UnknownGroupMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "グループ '{}' が見つかりません", self.group)
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for UnsettledResidualMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expense shares do not add up to their amounts; {} remains unsettled.",
            self.amount
        )
    }
}

#[cfg(not(feature = "ja"))]
impl std::fmt::Display for UnknownGroupMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group '{}' not found", self.group)
    }
}
