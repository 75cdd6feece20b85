#![warn(clippy::uninlined_format_args)]

pub mod balances_presenter;
pub mod currency;
pub mod spending_presenter;
pub mod text_table;

pub use balances_presenter::{BalanceRow, BalancesPresenter, BalancesView, ReimbursementRow, Trend};
pub use currency::CurrencyFormatter;
pub use spending_presenter::SpendingPresenter;
pub use text_table::{Alignment, TextTableBuilder, combine_sections};
