use std::{
    fmt,
    iter::Sum,
    num::NonZeroU64,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use rust_decimal::Decimal;

/// Integer currency amount (e.g. yen). Signed so that a leftover can be
/// reported even after manual adjustments overshoot the total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Saturates at `i64::MAX`.
    pub fn from_u64(value: u64) -> Self {
        Self(i64::try_from(value).unwrap_or(i64::MAX))
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }

    pub fn times(self, count: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(count)))
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
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Smallest denomination a share is rounded down to. Never larger than
/// [`RoundingUnit::MAX`], so one unit is always a representable [`Money`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoundingUnit(NonZeroU64);

impl RoundingUnit {
    pub const DEFAULT: Self = Self(NonZeroU64::new(1000).expect("1000 is non-zero"));
    pub const MAX: u64 = i64::MAX as u64;

    /// `None` for zero and for anything above [`Self::MAX`].
    pub fn new(value: u64) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    pub fn as_money(self) -> Money {
        Money::from_u64(self.get())
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.get())
    }

    pub fn multiple(self, units: i64) -> Money {
        Money::from_i64(units.saturating_mul(self.as_money().amount()))
    }

    /// Rounds `value` down to a multiple of this unit. Negative input yields zero.
    pub fn floor(self, value: Money) -> Money {
        if value.is_negative() {
            return Money::ZERO;
        }
        let unit = self.as_money().amount();
        Money::from_i64(value.amount() / unit * unit)
    }
}

impl Default for RoundingUnit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a manual `+` / `-` adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// One roster slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticipantEntry {
    pub name: Option<String>,
    /// Share ratio; only consulted by the weighted split.
    pub weight: Option<Decimal>,
    /// Number of people this slot stands for. Zero means inactive.
    pub count: u32,
    /// Per-person amount owed, a multiple of the rounding unit when written.
    pub amount: Money,
}

impl ParticipantEntry {
    pub fn is_active(&self) -> bool {
        self.count > 0
    }

    /// `amount * count`, what this slot pays in total.
    pub fn subtotal(&self) -> Money {
        self.amount.times(self.count)
    }
}

/// The serializable form of a participant weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightRecord {
    pub name: String,
    pub weight: Decimal,
}

impl WeightRecord {
    pub fn new(name: impl Into<String>, weight: Decimal) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Records with an empty name or a zero weight count as unset.
    pub fn is_set(&self) -> bool {
        !self.name.is_empty() && !self.weight.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{len} weight records exceed the roster capacity of {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
    #[error("Rounding unit must be a positive integer")]
    ZeroRoundingUnit,
    #[error("Rounding unit {value} exceeds the largest amount of {max}")]
    RoundingUnitTooLarge { value: u64, max: u64 },
    #[error("Roster capacity must be at least 1")]
    EmptyRoster,
}
