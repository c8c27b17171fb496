use std::ops::{Div, DivAssign, Sub};

use serde::{Deserialize, Serialize};

/// Numeric types usable as `Lim` bounds.
pub trait LimValue: Copy + PartialEq + Div<Output = Self> + DivAssign {
    const ZERO: Self;
}

macro_rules! impl_lim_value {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(impl LimValue for $ty {
            const ZERO: Self = $zero;
        })*
    };
}

impl_lim_value!(
    f32 => 0.0,
    f64 => 0.0,
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
);

/// Min/max pair of one axis.
///
/// The bounds are independent: nothing forces `min <= max`, so an inverted
/// pair is representable and kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lim<T> {
    pub min: T,
    pub max: T,
}

/// Limits over `f32`, the type axis limits are stored in.
pub type LimF = Lim<f32>;

impl<T: LimValue> Lim<T> {
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `false` only when both bounds are zero, i.e. the limits were never set.
    #[must_use]
    pub fn is_non_zero(self) -> bool {
        self.min != T::ZERO || self.max != T::ZERO
    }

    #[must_use]
    pub fn is_min_or_max_zero(self) -> bool {
        self.min == T::ZERO || self.max == T::ZERO
    }
}

impl<T: LimValue + Sub<Output = T>> Lim<T> {
    #[must_use]
    pub fn span(self) -> T {
        self.max - self.min
    }
}

impl<T: LimValue> From<Lim<T>> for bool {
    fn from(lim: Lim<T>) -> Self {
        lim.is_non_zero()
    }
}

impl<T: LimValue> Div<T> for Lim<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.min / rhs, self.max / rhs)
    }
}

impl<T: LimValue> DivAssign<T> for Lim<T> {
    fn div_assign(&mut self, rhs: T) {
        self.min /= rhs;
        self.max /= rhs;
    }
}

impl LimF {
    /// Widens to `f64` for pixel math.
    #[must_use]
    pub fn to_f64(self) -> Lim<f64> {
        Lim::new(f64::from(self.min), f64::from(self.max))
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}
