use crate::model::{Balances, Money, ParticipantId, Settlement, Transfer};
use std::cmp::Reverse;

/// Greedy largest-debtor / largest-creditor settlement planning.
///
/// Not guaranteed to produce the fewest possible transfers, but it is
/// deterministic for a given balance order and runs in `O(n log n)`.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Suggested transfers plus the balances they imply.
    pub fn plan(&self, balances: &Balances) -> Settlement {
        let transfers = self.suggest_transfers(balances);
        let public_balances = public_balances(&transfers);

        Settlement {
            transfers,
            public_balances,
        }
    }

    /// Matches debtors against creditors, largest first on both sides.
    ///
    /// Zero balances never take part. Ties keep the iteration order of
    /// `balances` (both sorts are stable).
    pub fn suggest_transfers(&self, balances: &Balances) -> Vec<Transfer> {
        let mut debtors: Vec<(ParticipantId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_negative())
            .map(|(id, balance)| (id.clone(), *balance))
            .collect();
        let mut creditors: Vec<(ParticipantId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_positive())
            .map(|(id, balance)| (id.clone(), *balance))
            .collect();

        debtors.sort_by_key(|(_, balance)| *balance);
        creditors.sort_by_key(|(_, balance)| Reverse(*balance));

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let mut i = 0;
        let mut j = 0;

        while i < debtors.len() && j < creditors.len() {
            let (debtor, debt) = &mut debtors[i];
            let (creditor, credit) = &mut creditors[j];

            let amount = Money::from_i64(debt.abs().min(credit.amount()));
            if amount.is_positive() {
                transfers.push(Transfer {
                    from: debtor.clone(),
                    to: creditor.clone(),
                    amount,
                });
            }

            *debt += amount;
            *credit -= amount;

            // Sub-unit threshold rather than `== 0`; identical for integers.
            if debt.abs() < 1 {
                i += 1;
            }
            if credit.amount() < 1 {
                j += 1;
            }
        }

        let residual: Money = debtors[i..]
            .iter()
            .chain(&creditors[j..])
            .map(|(_, balance)| *balance)
            .sum();
        if !residual.is_zero() {
            tracing::warn!(
                residual = residual.amount(),
                unmatched_debtors = debtors.len() - i,
                unmatched_creditors = creditors.len() - j,
                "balances do not sum to zero; residual left unsettled"
            );
        }

        tracing::debug!(
            debtors = debtors.len(),
            creditors = creditors.len(),
            transfers = transfers.len(),
            "planned settlement"
        );

        transfers
    }
}

/// Replays `transfers` from zero: `from` is debited, `to` is credited.
pub fn public_balances(transfers: &[Transfer]) -> Balances {
    let mut balances = Balances::with_capacity(transfers.len());
    for transfer in transfers {
        *balances
            .entry(transfer.from.clone())
            .or_insert(Money::ZERO) -= transfer.amount;
        *balances.entry(transfer.to.clone()).or_insert(Money::ZERO) += transfer.amount;
    }
    balances
}
