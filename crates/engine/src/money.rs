use std::{fmt, str::FromStr};

use crate::EngineError;

/// An amount of naira held as whole kobo.
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!(Money::new(123_450).to_string(), "₦1,234.50");
/// assert_eq!("12,5".parse::<Money>().unwrap().minor(), 1_250);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const fn new(kobo: i64) -> Self {
        Self(kobo)
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Sum of kobo amounts, pinned at the `i64` bounds instead of wrapping.
    pub fn saturating_sum<I: IntoIterator<Item = i64>>(amounts: I) -> Self {
        Self(amounts.into_iter().fold(0_i64, i64::saturating_add))
    }

    pub const fn saturating_sub(self, rhs: Money) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kobo = self.0.unsigned_abs();
        let naira = (kobo / 100).to_string();

        let mut grouped = String::with_capacity(naira.len() + naira.len() / 3);
        for (i, digit) in naira.chars().enumerate() {
            if i > 0 && (naira.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "₦{grouped}.{:02}", kobo % 100)
    }
}

fn digits(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Money {
    type Err = EngineError;

    /// Reads `1234`, `1234.5` or `1234,50`, optionally signed. At most two
    /// decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidAmount(format!("\"{}\" is not an amount", s.trim()));

        let text = s.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let (naira, kobo) = match unsigned.split_once(['.', ',']) {
            None => (digits(unsigned).ok_or_else(invalid)?, 0),
            Some((naira, fraction)) => {
                let naira = digits(naira).ok_or_else(invalid)?;
                let kobo = match fraction.len() {
                    0 => 0,
                    1 => digits(fraction).ok_or_else(invalid)? * 10,
                    2 => digits(fraction).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                };
                (naira, kobo)
            }
        };

        let total = naira
            .checked_mul(100)
            .and_then(|v| v.checked_add(kobo))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }
}
