//! Arbitrary-precision fixed-point decimal used for every ratio and reward
//! amount in the module.
//!
//! A [`Dec`] stores its value as a `BigInt` scaled by 10^18, so gas totals
//! never overflow and ratios keep 18 fractional digits. Multiplication and
//! division round the 18th digit half-to-even; conversion back to token
//! amounts truncates toward zero.

use {
    crate::constants::DEC_PRECISION,
    num_bigint::{BigInt, BigUint, Sign},
    num_traits::{Signed, Zero},
    std::{
        cmp::Ordering,
        fmt,
        iter::Sum,
        ops::{Add, Mul, Sub},
        str::FromStr,
        sync::OnceLock,
    },
    thiserror::Error,
};

static PRECISION_MULTIPLIER: OnceLock<BigInt> = OnceLock::new();

/// 10^18, built once.
fn precision_multiplier() -> &'static BigInt {
    PRECISION_MULTIPLIER.get_or_init(|| BigInt::from(10u64.pow(DEC_PRECISION)))
}

/// Fixed-point decimal with 18 fractional digits.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigInt);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDecError {
    #[error("empty decimal string")]
    Empty,
    #[error("invalid decimal digits: {0}")]
    InvalidDigits(String),
    #[error("too many fractional digits ({0} > 18)")]
    TooPrecise(usize),
}

impl Dec {
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn one() -> Self {
        Self(precision_multiplier().clone())
    }

    /// Wraps an already-scaled value (units of 10^-18).
    pub fn from_atomics(raw: BigInt) -> Self {
        Self(raw)
    }

    pub fn from_uint(value: &BigUint) -> Self {
        Self(BigInt::from_biguint(Sign::Plus, value.clone()) * precision_multiplier())
    }

    /// Scaled representation (units of 10^-18).
    pub fn atomics(&self) -> &BigInt {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Multiplies by an integer without rounding.
    pub fn mul_int(&self, factor: u64) -> Self {
        Self(&self.0 * BigInt::from(factor))
    }

    /// Divides by an integer, truncating toward zero. `None` on zero.
    pub fn quo_int(&self, divisor: u64) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        Some(Self(&self.0 / BigInt::from(divisor)))
    }

    /// Divides by another decimal, rounding half-to-even. `None` on zero.
    pub fn checked_quo(&self, divisor: &Dec) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        let multiplier = precision_multiplier();
        let widened = &self.0 * multiplier * multiplier;
        Some(Self(chop_precision_and_round(widened / &divisor.0)))
    }

    /// Integer part, truncated toward zero.
    pub fn truncate_int(&self) -> BigInt {
        &self.0 / precision_multiplier()
    }

    /// Integer part as an unsigned amount; `None` if the value is negative.
    pub fn truncate_uint(&self) -> Option<BigUint> {
        self.truncate_int().to_biguint()
    }
}

/// Drops the extra 18 digits produced by a widened product or quotient,
/// rounding the remainder half-to-even.
fn chop_precision_and_round(value: BigInt) -> BigInt {
    if value.is_negative() {
        return -chop_precision_and_round(-value);
    }
    let multiplier = precision_multiplier();
    let quo = &value / multiplier;
    let rem = &value % multiplier;
    if rem.is_zero() {
        return quo;
    }
    let half = multiplier / BigInt::from(2u8);
    match rem.cmp(&half) {
        Ordering::Less => quo,
        Ordering::Greater => quo + BigInt::from(1u8),
        Ordering::Equal => {
            if (&quo % BigInt::from(2u8)).is_zero() {
                quo
            } else {
                quo + BigInt::from(1u8)
            }
        }
    }
}

impl From<u64> for Dec {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value) * precision_multiplier())
    }
}

impl Add for Dec {
    type Output = Dec;

    fn add(self, rhs: Dec) -> Dec {
        Dec(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Dec> for &'a Dec {
    type Output = Dec;

    fn add(self, rhs: &'a Dec) -> Dec {
        Dec(&self.0 + &rhs.0)
    }
}

impl<'a> Sub<&'a Dec> for &'a Dec {
    type Output = Dec;

    fn sub(self, rhs: &'a Dec) -> Dec {
        Dec(&self.0 - &rhs.0)
    }
}

impl<'a> Mul<&'a Dec> for &'a Dec {
    type Output = Dec;

    fn mul(self, rhs: &'a Dec) -> Dec {
        Dec(chop_precision_and_round(&self.0 * &rhs.0))
    }
}

impl Sum for Dec {
    fn sum<I: Iterator<Item = Dec>>(iter: I) -> Dec {
        iter.fold(Dec::zero(), |acc, value| acc + value)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let multiplier = precision_multiplier();
        let abs = self.0.abs();
        let sign = if self.0.is_negative() { "-" } else { "" };
        let integer = &abs / multiplier;
        let fraction = (&abs % multiplier).to_string();
        write!(
            f,
            "{sign}{integer}.{fraction:0>width$}",
            width = DEC_PRECISION as usize
        )
    }
}

impl FromStr for Dec {
    type Err = ParseDecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDecError::Empty);
        }
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
        let precision = DEC_PRECISION as usize;
        if fraction.len() > precision {
            return Err(ParseDecError::TooPrecise(fraction.len()));
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(ParseDecError::InvalidDigits(s.to_string()));
        }
        let combined = format!("{integer}{fraction:0<precision$}");
        let raw = BigInt::from_str(&combined)
            .map_err(|_| ParseDecError::InvalidDigits(s.to_string()))?;
        Ok(Self(if negative { -raw } else { raw }))
    }
}
