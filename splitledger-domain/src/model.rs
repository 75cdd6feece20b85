use arcstr::ArcStr;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(ArcStr);

impl ParticipantId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(ArcStr::from(id))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed amount in minor currency units (e.g. cents).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    /// Magnitude in minor units. Saturates for `i64::MIN`.
    pub fn abs(self) -> i64 {
        self.0.saturating_abs()
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    /// `self - rhs`, clamped to the `i64` range.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    fn saturating_from_i128(value: i128) -> Self {
        Self(i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX }))
    }

    /// Divides by `divisor`, rounding half away from zero.
    ///
    /// Returns `None` when `divisor` is zero.
    pub fn div_round(self, divisor: i64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let quotient = self.0 / divisor;
        let remainder = self.0 % divisor;
        if remainder.unsigned_abs().saturating_mul(2) >= divisor.unsigned_abs() {
            let step = if (self.0 < 0) == (divisor < 0) { 1 } else { -1 };
            Some(Self(quotient + step))
        } else {
            Some(Self(quotient))
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Totals across participants or shares are accumulated in `i128` and
/// clamped to the `i64` range, so summing never overflows.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::saturating_from_i128(iter.map(|money| i128::from(money.0)).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The part of an expense owed by one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub participant: ParticipantId,
    pub amount: Money,
}

/// One recorded expense with already-resolved per-participant shares.
///
/// The shares are expected to sum to `amount`. Nothing here enforces that;
/// see [`ExpenseLine::skew`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub amount: Money,
    pub payer: ParticipantId,
    pub shares: Vec<Share>,
}

impl ExpenseLine {
    pub fn new(amount: Money, payer: impl Into<ParticipantId>) -> Self {
        Self {
            amount,
            payer: payer.into(),
            shares: Vec::new(),
        }
    }

    pub fn with_share(mut self, participant: impl Into<ParticipantId>, amount: Money) -> Self {
        self.shares.push(Share {
            participant: participant.into(),
            amount,
        });
        self
    }

    pub fn shares_total(&self) -> Money {
        self.shares.iter().map(|share| share.amount).sum()
    }

    /// `amount - shares_total`; zero for a well-formed expense.
    pub fn skew(&self) -> Money {
        self.amount.saturating_sub(self.shares_total())
    }

    /// Payer first, then share participants in order. May repeat ids.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        std::iter::once(&self.payer).chain(self.shares.iter().map(|share| &share.participant))
    }
}

/// Net balance per participant, in first-appearance order.
///
/// Positive: the group owes the participant. Negative: the participant owes
/// the group.
pub type Balances = IndexMap<ParticipantId, Money>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub transfers: Vec<Transfer>,
    /// Balances implied by replaying `transfers` from zero.
    pub public_balances: Balances,
}

pub fn participants_in<'a, I>(expenses: I) -> IndexSet<ParticipantId>
where
    I: IntoIterator<Item = &'a ExpenseLine>,
{
    expenses
        .into_iter()
        .flat_map(ExpenseLine::participants)
        .cloned()
        .collect()
}
