use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DIGITS, ModelError};

/// Minimum width of the zero-padded numeric suffix.
///
/// This is a floor, not a cap: a slot with more decimal digits than the width is
/// rendered in full. Zero is rejected at construction so a valid `Digits` always
/// produces at least one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32")]
#[serde(into = "u32")]
pub struct Digits(u32);

impl Digits {
    /// Creates a new width, rejecting `0`.
    ///
    /// # Examples
    /// ```
    /// use fleettag_model::Digits;
    ///
    /// assert_eq!(Digits::new(3).unwrap().get(), 3);
    /// assert!(Digits::new(0).is_err());
    /// ```
    pub fn new(n: u32) -> Result<Self, ModelError> {
        Self::try_from(n)
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Width as `usize`, for use in format specifiers.
    #[inline]
    pub fn width(&self) -> usize {
        self.0 as usize
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self(DEFAULT_DIGITS)
    }
}

impl TryFrom<u32> for Digits {
    type Error = ModelError;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(ModelError::InvalidDigits(n));
        }
        Ok(Digits(n))
    }
}

impl From<Digits> for u32 {
    fn from(d: Digits) -> Self {
        d.0
    }
}

impl FromStr for Digits {
    type Err = ModelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<u32>()
            .map_err(|e| ModelError::Invalid(format!("digits {s:?}: {e}")))?;
        Self::try_from(n)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two() {
        assert_eq!(Digits::default().get(), 2);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(Digits::new(0), Err(ModelError::InvalidDigits(0))));
        assert!(matches!(
            "0".parse::<Digits>(),
            Err(ModelError::InvalidDigits(0))
        ));
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("3".parse::<Digits>().unwrap().width(), 3);
        assert_eq!(" 4 ".parse::<Digits>().unwrap().width(), 4);

        for bad in ["", "-1", "two", "1.5"] {
            assert!(bad.parse::<Digits>().is_err(), "expected error for {bad:?}");
        }
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let d: Digits = serde_json::from_str("5").unwrap();
        assert_eq!(d.get(), 5);
        assert_eq!(serde_json::to_string(&d).unwrap(), "5");
        assert!(serde_json::from_str::<Digits>("0").is_err());
    }
}
