use crate::{
    error::LedgerError,
    model::{GroupId, SettlementResult},
    ports::{ExpenseSource, SettlementStrategy},
    validation::ExpenseValidator,
};
use splitledger_domain::{
    BalanceCalculator, Balances, ExpenseLine, Money, Settlement, SpendingSummary, public_balances,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Malformed expenses are folded in as-is and show up as skew.
    #[default]
    Lenient,
    /// Every expense must pass [`ExpenseValidator`] first, checked against
    /// the source's roster when it has one.
    Strict,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LedgerConfig {
    pub validation: ValidationMode,
}

#[derive(Clone, Copy)]
pub struct LedgerProcessor<'a> {
    source: &'a dyn ExpenseSource,
    strategy: &'a dyn SettlementStrategy,
    config: LedgerConfig,
}

impl<'a> LedgerProcessor<'a> {
    pub fn new(source: &'a dyn ExpenseSource, strategy: &'a dyn SettlementStrategy) -> Self {
        Self::with_config(source, strategy, LedgerConfig::default())
    }

    pub fn with_config(
        source: &'a dyn ExpenseSource,
        strategy: &'a dyn SettlementStrategy,
        config: LedgerConfig,
    ) -> Self {
        Self {
            source,
            strategy,
            config,
        }
    }

    pub fn compute_balances(&self, expenses: &[ExpenseLine]) -> Balances {
        BalanceCalculator.calculate(expenses)
    }

    pub fn compute_settlement(&self, balances: &Balances) -> Settlement {
        let transfers = self.strategy.settle(balances);
        let public_balances = public_balances(&transfers);
        Settlement {
            transfers,
            public_balances,
        }
    }

    pub fn settle_group(&self, group: &GroupId) -> Result<SettlementResult, LedgerError> {
        let expenses = self.load_expenses(group)?;
        let balances = self.compute_balances(&expenses);
        let unbalanced_total: Money = balances.values().sum();
        if !unbalanced_total.is_zero() {
            tracing::warn!(
                group = %group,
                unbalanced_total = unbalanced_total.amount(),
                "expense shares do not cover their amounts"
            );
        }

        let Settlement {
            transfers,
            public_balances,
        } = self.compute_settlement(&balances);

        tracing::info!(
            group = %group,
            expenses = expenses.len(),
            participants = balances.len(),
            transfers = transfers.len(),
            "computed settlement"
        );

        Ok(SettlementResult {
            balances,
            transfers,
            public_balances,
            unbalanced_total,
        })
    }

    pub fn summarize_group(&self, group: &GroupId) -> Result<SpendingSummary, LedgerError> {
        let expenses = self.load_expenses(group)?;
        Ok(SpendingSummary::from_expenses(&expenses))
    }

    fn load_expenses(&self, group: &GroupId) -> Result<Vec<ExpenseLine>, LedgerError> {
        let expenses = self.source.expenses(group)?;

        if self.config.validation == ValidationMode::Strict {
            let validator = self
                .source
                .roster(group)
                .map_or_else(ExpenseValidator::new, ExpenseValidator::with_roster);
            for (index, expense) in expenses.iter().enumerate() {
                validator
                    .validate(expense)
                    .map_err(|reason| LedgerError::InvalidExpense { index, reason })?;
            }
        }

        tracing::debug!(group = %group, expenses = expenses.len(), "loaded expenses");
        Ok(expenses)
    }
}
