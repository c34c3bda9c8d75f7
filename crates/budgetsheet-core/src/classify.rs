//! Token classification
//!
//! Price list tokens and table cells arrive as text. This module decides
//! whether a token reads as a whole number, a decimal number, or plain text,
//! and whether an entire column agrees on one of those.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static TWO_PLACE_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").unwrap());

/// Classification tag of a token or a column of tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Unsigned whole number, e.g. `220`
    Integer,
    /// Unsigned number with a fractional part, e.g. `19.99`
    Decimal,
    /// Anything else, including the empty string
    String,
    /// No value, or a column whose elements disagree
    Null,
}

impl ValueKind {
    /// Whether the tag denotes a number
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Decimal => write!(f, "Decimal"),
            Self::String => write!(f, "String"),
            Self::Null => write!(f, "None"),
        }
    }
}

/// Classify a single token
///
/// The decimal pattern is tested before the integer pattern.
///
/// # Examples
/// ```
/// use budgetsheet_core::classify::{classify, ValueKind};
///
/// assert_eq!(classify(Some("19.99")), ValueKind::Decimal);
/// assert_eq!(classify(Some("220")), ValueKind::Integer);
/// assert_eq!(classify(Some("-5")), ValueKind::String);
/// assert_eq!(classify(None), ValueKind::Null);
/// ```
pub fn classify(token: Option<&str>) -> ValueKind {
    match token {
        None => ValueKind::Null,
        Some(token) if DECIMAL.is_match(token) => ValueKind::Decimal,
        Some(token) if INTEGER.is_match(token) => ValueKind::Integer,
        Some(_) => ValueKind::String,
    }
}

/// Classify a column of tokens, unanimously
///
/// Returns `Decimal` when every element is a decimal, `String` when every
/// element is text, and `Null` otherwise. Integers never make a column
/// unanimous. An empty column counts as all-decimal.
///
/// # Examples
/// ```
/// use budgetsheet_core::classify::{classify_all, ValueKind};
///
/// assert_eq!(classify_all([Some("1.50"), Some("2.25")]), ValueKind::Decimal);
/// assert_eq!(classify_all([Some("Coat"), Some("Boots")]), ValueKind::String);
/// assert_eq!(classify_all([Some("Coat"), Some("2.25")]), ValueKind::Null);
/// ```
pub fn classify_all<'a, I>(tokens: I) -> ValueKind
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut all_decimal = true;
    let mut all_string = true;

    for token in tokens {
        match classify(token) {
            ValueKind::Decimal => all_string = false,
            ValueKind::String => all_decimal = false,
            _ => {
                all_decimal = false;
                all_string = false;
            }
        }
        if !all_decimal && !all_string {
            break;
        }
    }

    if all_decimal {
        ValueKind::Decimal
    } else if all_string {
        ValueKind::String
    } else {
        ValueKind::Null
    }
}

/// Whether `token` is a currency-style decimal with exactly two places
///
/// This is the shape every price cell of a formatted table takes.
pub fn is_two_place_decimal(token: &str) -> bool {
    TWO_PLACE_DECIMAL.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_before_integer() {
        assert_eq!(classify(Some("0.5")), ValueKind::Decimal);
        assert_eq!(classify(Some("180")), ValueKind::Integer);
        assert_eq!(classify(Some("007")), ValueKind::Integer);
    }

    #[test]
    fn test_malformed_numbers_are_strings() {
        for token in ["", " ", "1.", ".5", "1.2.3", "+5", "-5", "$4.00", "1,000", "12a"] {
            assert_eq!(classify(Some(token)), ValueKind::String, "token {token:?}");
        }
    }

    #[test]
    fn test_non_ascii_digits_are_strings() {
        assert_eq!(classify(Some("٣")), ValueKind::String);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for token in ["Coat", "220", "248.60", ""] {
            assert_eq!(classify(Some(token)), classify(Some(token)));
        }
    }

    #[test]
    fn test_classify_all_requires_unanimity() {
        assert_eq!(
            classify_all([Some("1.00"), Some("2"), Some("3.00")]),
            ValueKind::Null
        );
        assert_eq!(classify_all([Some("1"), Some("2")]), ValueKind::Null);
        assert_eq!(classify_all([Some("a"), None]), ValueKind::Null);
        assert_eq!(classify_all(Vec::<Option<&str>>::new()), ValueKind::Decimal);
    }

    #[test]
    fn test_two_place_decimal() {
        assert!(is_two_place_decimal("220.00"));
        assert!(is_two_place_decimal("0.05"));
        assert!(!is_two_place_decimal("220.0"));
        assert!(!is_two_place_decimal("220.000"));
        assert!(!is_two_place_decimal("220"));
        assert!(!is_two_place_decimal("$220.00"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ValueKind::Null.to_string(), "None");
        assert_eq!(ValueKind::Decimal.to_string(), "Decimal");
        assert!(ValueKind::Integer.is_numeric());
        assert!(!ValueKind::String.is_numeric());
    }
}
