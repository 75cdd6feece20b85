use crate::model::{ExpenseLine, Money, ParticipantId, participants_in};
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Reverse;

const TOP_PAYER_LIMIT: usize = 5;

/// Aggregate spending figures for a group's expenses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    pub total: Money,
    pub expense_count: usize,
    /// Distinct payers and share participants.
    pub participant_count: usize,
    /// Rounded half away from zero to a whole minor unit.
    pub average: Money,
    pub highest: Money,
    /// Largest total paid first, at most five entries.
    pub top_payers: Vec<(ParticipantId, Money)>,
}

impl SpendingSummary {
    pub fn from_expenses(expenses: &[ExpenseLine]) -> Self {
        let total: Money = expenses.iter().map(|expense| expense.amount).sum();
        let expense_count = expenses.len();
        let highest = expenses.iter().map(|expense| expense.amount).max();

        let mut paid: IndexMap<ParticipantId, Money> = IndexMap::new();
        for expense in expenses {
            *paid.entry(expense.payer.clone()).or_insert(Money::ZERO) += expense.amount;
        }

        let average = i64::try_from(expense_count)
            .ok()
            .and_then(|count| total.div_round(count))
            .unwrap_or(Money::ZERO);

        let mut top_payers: Vec<(ParticipantId, Money)> = paid.into_iter().collect();
        top_payers.sort_by_key(|(_, amount)| Reverse(*amount));
        top_payers.truncate(TOP_PAYER_LIMIT);

        Self {
            total,
            expense_count,
            participant_count: participants_in(expenses).len(),
            average,
            highest: highest.unwrap_or(Money::ZERO),
            top_payers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: i64) -> Money {
        Money::from_i64(value)
    }

    #[test]
    fn empty_expenses_produce_zeroed_summary() {
        let summary = SpendingSummary::from_expenses(&[]);
        assert_eq!(summary, SpendingSummary::default());
    }

    #[test]
    fn summarizes_totals_and_payers() {
        let expenses = [
            ExpenseLine::new(money(1000), "A").with_share("B", money(1000)),
            ExpenseLine::new(money(2501), "B").with_share("A", money(2501)),
            ExpenseLine::new(money(500), "A").with_share("A", money(500)),
        ];

        let summary = SpendingSummary::from_expenses(&expenses);

        assert_eq!(summary.total, money(4001));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.participant_count, 2);
        assert_eq!(summary.average, money(1334));
        assert_eq!(summary.highest, money(2501));
        assert_eq!(
            summary.top_payers,
            vec![
                (ParticipantId::from("B"), money(2501)),
                (ParticipantId::from("A"), money(1500)),
            ]
        );
    }

    #[test]
    fn top_payers_are_capped_and_stable() {
        let expenses: Vec<ExpenseLine> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|payer| ExpenseLine::new(money(100), payer).with_share(payer, money(100)))
            .collect();

        let summary = SpendingSummary::from_expenses(&expenses);

        let payers: Vec<&str> = summary
            .top_payers
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(payers, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(summary.participant_count, 6);
    }

    #[test]
    fn beneficiaries_count_as_participants() {
        let expenses = [
            ExpenseLine::new(money(900), "A")
                .with_share("B", money(300))
                .with_share("C", money(300))
                .with_share("A", money(300)),
            ExpenseLine::new(money(100), "B").with_share("D", money(100)),
        ];

        let summary = SpendingSummary::from_expenses(&expenses);

        assert_eq!(summary.participant_count, 4);
        assert_eq!(summary.top_payers.len(), 2);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let expenses = [
            ExpenseLine::new(money(i64::MAX), "A"),
            ExpenseLine::new(money(i64::MAX), "B"),
        ];

        let summary = SpendingSummary::from_expenses(&expenses);

        assert_eq!(summary.total, money(i64::MAX));
        assert_eq!(summary.highest, money(i64::MAX));
    }
}
