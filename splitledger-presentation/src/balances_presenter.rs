use crate::{
    currency::CurrencyFormatter,
    text_table::{Alignment, TextTableBuilder, combine_sections},
};
use serde::Serialize;
use splitledger_application::{ParticipantDirectory, SettlementResult};
use splitledger_domain::{Balances, Money, Transfer};
use splitledger_i18n as i18n;
use std::borrow::Cow;

const BAR_WIDTH: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of(money: Money) -> Self {
        match money.signum() {
            1 => Trend::Up,
            -1 => Trend::Down,
            _ => Trend::Neutral,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BalanceRow {
    pub name: String,
    pub balance: Money,
    pub formatted: String,
    pub trend: Trend,
    /// Share of the largest absolute balance, 0 to 100.
    pub bar_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReimbursementRow {
    pub from: String,
    pub to: String,
    pub amount: Money,
    pub formatted: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BalancesView {
    pub balances: Vec<BalanceRow>,
    pub reimbursements: Vec<ReimbursementRow>,
}

pub struct BalancesPresenter<'a> {
    directory: &'a dyn ParticipantDirectory,
    formatter: &'a CurrencyFormatter,
}

impl<'a> BalancesPresenter<'a> {
    pub fn new(directory: &'a dyn ParticipantDirectory, formatter: &'a CurrencyFormatter) -> Self {
        Self {
            directory,
            formatter,
        }
    }

    pub fn present(&self, result: &SettlementResult) -> BalancesView {
        BalancesView {
            balances: self.balance_rows(&result.public_balances),
            reimbursements: self.reimbursement_rows(&result.transfers),
        }
    }

    /// Participants missing from the directory are left out.
    pub fn balance_rows(&self, balances: &Balances) -> Vec<BalanceRow> {
        let known: Vec<(&str, Money)> = balances
            .iter()
            .filter_map(|(id, balance)| Some((self.directory.display_name(id)?, *balance)))
            .collect();

        let max_abs = known
            .iter()
            .map(|(_, balance)| balance.abs())
            .max()
            .unwrap_or(0)
            .max(1);

        known
            .into_iter()
            .map(|(name, balance)| BalanceRow {
                name: name.to_owned(),
                balance,
                formatted: self.formatter.format_signed(balance),
                trend: Trend::of(balance),
                bar_percent: bar_percent(balance.abs(), max_abs),
            })
            .collect()
    }

    pub fn reimbursement_rows(&self, transfers: &[Transfer]) -> Vec<ReimbursementRow> {
        transfers
            .iter()
            .filter_map(|transfer| {
                let from = self.directory.display_name(&transfer.from)?;
                let to = self.directory.display_name(&transfer.to)?;
                Some(ReimbursementRow {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    amount: transfer.amount,
                    formatted: self.formatter.format(transfer.amount),
                })
            })
            .collect()
    }
}

fn bar_percent(abs: i64, max_abs: i64) -> u8 {
    let percent = i128::from(abs) * 100 / i128::from(max_abs);
    u8::try_from(percent.clamp(0, 100)).unwrap_or(100)
}

impl BalancesView {
    pub fn render_text(&self) -> String {
        let balances = self.render_balance_section();
        let reimbursements = self.render_reimbursement_section();
        combine_sections(&[&balances, &reimbursements]).unwrap_or_default()
    }

    fn render_balance_section(&self) -> String {
        if self.balances.is_empty() {
            return format!("{}\n{}\n", i18n::BALANCES_TITLE, i18n::NO_BALANCES);
        }

        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Left])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::BALANCE),
                Cow::Borrowed(""),
            ])
            .rows(self.balances.iter().map(|row| {
                [
                    Cow::Borrowed(row.name.as_str()),
                    Cow::Borrowed(row.formatted.as_str()),
                    Cow::Owned(bar(row)),
                ]
            }))
            .build();

        format!("{}\n{table}", i18n::BALANCES_TITLE)
    }

    fn render_reimbursement_section(&self) -> String {
        if self.reimbursements.is_empty() {
            return format!(
                "{}\n{}\n",
                i18n::REIMBURSEMENTS_TITLE,
                i18n::NO_REIMBURSEMENTS
            );
        }

        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(self.reimbursements.iter().map(|row| {
                [
                    Cow::Borrowed(row.from.as_str()),
                    Cow::Borrowed(row.to.as_str()),
                    Cow::Borrowed(row.formatted.as_str()),
                ]
            }))
            .build();

        format!("{}\n{table}", i18n::REIMBURSEMENTS_TITLE)
    }
}

fn bar(row: &BalanceRow) -> String {
    let filled = usize::from(row.bar_percent) * BAR_WIDTH / 100;
    let glyph = match row.trend {
        Trend::Up => '+',
        Trend::Down => '-',
        Trend::Neutral => return String::new(),
    };
    std::iter::repeat_n(glyph, filled).collect()
}
