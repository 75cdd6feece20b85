use splitledger_domain::Money;

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// Renders minor-unit amounts as `-$1,234.56`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
    minor_digits: u32,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            minor_digits: 2,
        }
    }

    pub fn with_minor_digits(mut self, minor_digits: u32) -> Self {
        self.minor_digits = minor_digits;
        self
    }

    pub fn format(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        let magnitude = money.amount().unsigned_abs();
        let scale = 10u64.pow(self.minor_digits);
        let major = group_thousands(magnitude / scale);

        if self.minor_digits == 0 {
            return format!("{sign}{}{major}", self.symbol);
        }

        let minor = magnitude % scale;
        let width = self.minor_digits as usize;
        format!(
            "{sign}{}{major}{DECIMAL_SEPARATOR}{minor:0width$}",
            self.symbol
        )
    }

    /// Like [`format`](Self::format) but always shows `+` on positive amounts.
    pub fn format_signed(&self, money: Money) -> String {
        let formatted = self.format(money);
        if money.is_positive() {
            format!("+{formatted}")
        } else {
            formatted
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}
