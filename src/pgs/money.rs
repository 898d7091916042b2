use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while parsing {0:?}")]
    Overflow(String),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point decimal value with four decimal places, `Money(240000)` is `24`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    const SCALE: i64 = 10000;

    /// Whole units, `Money::units(24)` is `24.0000`
    pub const fn units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        let units = match parts.next() {
            Some(units) if !units.is_empty() => units,
            _ => Err(MoneyError::Parse("Missing whole units", string.to_string()))?,
        };

        let fraction = parts.next().unwrap_or("");

        if !is_digits(units) || (unsigned.contains('.') && !is_digits(fraction)) {
            Err(MoneyError::Parse("Expected ASCII digits", string.to_string()))?
        }

        // extra precision beyond four places is truncated
        let fraction = format!("{:0<4}", fraction)[..4].to_string();

        let units: i64 = units.parse()?;
        let fraction: i64 = fraction.parse()?;

        let value = units
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Overflow(string.to_string()))?;

        if negative {
            return Ok(Money(-value));
        }

        return Ok(Money(value));
    }
}

fn is_digits(digits: &str) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();

        let units = abs / Self::SCALE as u64;
        let fraction = abs % Self::SCALE as u64;

        if fraction == 0 {
            return write!(f, "{sign}{units}");
        }

        let fraction = format!("{fraction:04}");
        return write!(f, "{sign}{units}.{}", fraction.trim_end_matches('0'));
    }
}
