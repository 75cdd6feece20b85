use crate::model::{Balances, ExpenseLine, Money};

/// Folds expenses into net balances one at a time.
///
/// Participants get an entry the first time they are mentioned, so anyone
/// absent from every expense is absent from the result.
#[derive(Debug, Default)]
pub struct BalanceAccumulator {
    balances: Balances,
}

impl BalanceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits the payer with the full amount and debits every share.
    pub fn apply(&mut self, expense: &ExpenseLine) {
        *self
            .balances
            .entry(expense.payer.clone())
            .or_insert(Money::ZERO) += expense.amount;

        for share in &expense.shares {
            *self
                .balances
                .entry(share.participant.clone())
                .or_insert(Money::ZERO) -= share.amount;
        }
    }

    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    pub fn into_balances(self) -> Balances {
        self.balances
    }
}

/// Balance aggregation service
pub struct BalanceCalculator;

impl BalanceCalculator {
    pub fn calculate<'a, I>(&self, expenses: I) -> Balances
    where
        I: IntoIterator<Item = &'a ExpenseLine>,
    {
        let mut accumulator = BalanceAccumulator::new();
        for expense in expenses {
            accumulator.apply(expense);
        }
        accumulator.into_balances()
    }
}
