pub mod balance_calculator;
pub mod settlement_planner;
pub mod spending_summary;

pub use balance_calculator::{BalanceAccumulator, BalanceCalculator};
pub use settlement_planner::{SettlementPlanner, public_balances};
pub use spending_summary::SpendingSummary;
