#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Balances, ExpenseLine, Money, ParticipantId, Settlement, Share, Transfer, participants_in,
};
pub use services::{
    BalanceAccumulator, BalanceCalculator, SettlementPlanner, SpendingSummary, public_balances,
};
