use proptest::prelude::*;
use splitledger_domain::{
    BalanceCalculator, Balances, ExpenseLine, Money, ParticipantId, SettlementPlanner,
};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn even_split(amount: i64, payer: usize, beneficiaries: &[usize]) -> ExpenseLine {
    let mut line = ExpenseLine::new(Money::from_i64(amount), NAMES[payer]);
    let count = beneficiaries.len() as i64;
    let base = amount / count;
    let remainder = (amount % count) as usize;
    for (idx, &beneficiary) in beneficiaries.iter().enumerate() {
        let share = if idx < remainder { base + 1 } else { base };
        line = line.with_share(NAMES[beneficiary], Money::from_i64(share));
    }
    line
}

fn expense_strategy() -> impl Strategy<Value = ExpenseLine> {
    (
        0i64..=100_000,
        0usize..NAMES.len(),
        prop::collection::vec(0usize..NAMES.len(), 1..=NAMES.len()),
    )
        .prop_map(|(amount, payer, beneficiaries)| even_split(amount, payer, &beneficiaries))
}

fn expenses_strategy() -> impl Strategy<Value = Vec<ExpenseLine>> {
    prop::collection::vec(expense_strategy(), 0..=30)
}

fn apply_transfers(balances: &Balances, planner: &SettlementPlanner) -> Balances {
    let mut remaining = balances.clone();
    for transfer in planner.suggest_transfers(balances) {
        *remaining.entry(transfer.from).or_insert(Money::ZERO) += transfer.amount;
        *remaining.entry(transfer.to).or_insert(Money::ZERO) -= transfer.amount;
    }
    remaining
}

proptest! {
    #[test]
    fn balances_sum_to_zero(expenses in expenses_strategy()) {
        let balances = BalanceCalculator.calculate(&expenses);
        let total: Money = balances.values().sum();
        prop_assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn balances_ignore_expense_order(
        (expenses, shuffled) in expenses_strategy()
            .prop_flat_map(|expenses| (Just(expenses.clone()), Just(expenses).prop_shuffle()))
    ) {
        let original = BalanceCalculator.calculate(&expenses);
        let permuted = BalanceCalculator.calculate(&shuffled);
        prop_assert_eq!(original, permuted);
    }

    #[test]
    fn settlement_zeroes_every_balance(expenses in expenses_strategy()) {
        let balances = BalanceCalculator.calculate(&expenses);
        let remaining = apply_transfers(&balances, &SettlementPlanner);
        for (participant, balance) in &remaining {
            prop_assert!(balance.is_zero(), "{participant} left with {balance}");
        }
    }

    #[test]
    fn transfers_are_positive_and_between_distinct_nonzero_participants(
        expenses in expenses_strategy()
    ) {
        let balances = BalanceCalculator.calculate(&expenses);
        for transfer in SettlementPlanner.suggest_transfers(&balances) {
            prop_assert!(transfer.amount.is_positive());
            prop_assert_ne!(&transfer.from, &transfer.to);
            prop_assert!(balances[&transfer.from].is_negative());
            prop_assert!(balances[&transfer.to].is_positive());
        }
    }

    #[test]
    fn public_balances_match_settled_participants(expenses in expenses_strategy()) {
        let balances = BalanceCalculator.calculate(&expenses);
        let settlement = SettlementPlanner.plan(&balances);

        for (participant, balance) in &balances {
            let public = settlement
                .public_balances
                .get(participant)
                .copied()
                .unwrap_or(Money::ZERO);
            prop_assert_eq!(public, *balance);
        }
        prop_assert!(settlement
            .public_balances
            .keys()
            .all(|participant| balances.contains_key(participant)));
    }
}

proptest! {
    #[test]
    fn planner_terminates_on_imbalanced_input(
        raw in prop::collection::vec(-10_000i64..=10_000, 0..=NAMES.len())
    ) {
        let balances: Balances = raw
            .iter()
            .enumerate()
            .map(|(idx, &amount)| (ParticipantId::from(NAMES[idx]), Money::from_i64(amount)))
            .collect();

        let transfers = SettlementPlanner.suggest_transfers(&balances);

        prop_assert!(transfers.len() < balances.len().max(1));
        for transfer in &transfers {
            prop_assert!(transfer.amount.is_positive());
        }
    }
}

#[test]
fn empty_expenses_settle_to_nothing() {
    let expenses: Vec<ExpenseLine> = Vec::new();
    let balances = BalanceCalculator.calculate(&expenses);
    let settlement = SettlementPlanner.plan(&balances);

    assert!(balances.is_empty());
    assert!(settlement.transfers.is_empty());
    assert!(settlement.public_balances.is_empty());
}

#[test]
fn three_way_dinner_settles_to_payer() {
    let expenses = [ExpenseLine::new(Money::from_i64(3000), "A")
        .with_share("A", Money::from_i64(1000))
        .with_share("B", Money::from_i64(1000))
        .with_share("C", Money::from_i64(1000))];

    let balances = BalanceCalculator.calculate(&expenses);
    let settlement = SettlementPlanner.plan(&balances);

    let described: Vec<(&str, &str, i64)> = settlement
        .transfers
        .iter()
        .map(|t| (t.from.as_str(), t.to.as_str(), t.amount.amount()))
        .collect();
    assert_eq!(described, vec![("B", "A", 1000), ("C", "A", 1000)]);
}
