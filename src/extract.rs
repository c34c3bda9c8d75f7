//! Price list extraction
//!
//! A price list is a flat text file alternating item names and prices,
//! separated either by commas or by newlines:
//!
//! ```text
//! Laptop, 400, Desk, 220, Headphones, 120
//! ```
//!
//! ```text
//! A Shoes From New York
//! 40
//! Mug
//! 2
//! ```
//!
//! # Examples
//!
//! ```
//! use budgetsheet::extract::extract_pairs;
//!
//! let pairs = extract_pairs("Laptop, 400, Desk, 220")?;
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[1].item, "Desk");
//! assert_eq!(pairs[1].price, "220");
//! # Ok::<(), budgetsheet::BudgetError>(())
//! ```

use crate::error::{BudgetError, Result};
use budgetsheet_core::types::ItemPair;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// How a price list separates its tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Newline,
}

impl Delimiter {
    /// Detect the delimiter of `content`
    ///
    /// Any comma makes the content comma-delimited, even when it also has
    /// newlines. Content with neither is unrecognized.
    pub fn detect(content: &str) -> Option<Self> {
        if content.contains(',') {
            Some(Self::Comma)
        } else if content.contains('\n') {
            Some(Self::Newline)
        } else {
            None
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Newline => '\n',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comma => write!(f, "comma"),
            Self::Newline => write!(f, "newline"),
        }
    }
}

/// Split `content` into ordered item/price pairs
///
/// Tokens are trimmed and empty tokens dropped before pairing. An unpaired
/// trailing token is dropped with a warning.
///
/// # Errors
///
/// Returns [`BudgetError::Format`] when the content has neither commas nor
/// newlines.
pub fn extract_pairs(content: &str) -> Result<Vec<ItemPair>> {
    let delimiter = Delimiter::detect(content).ok_or(BudgetError::Format)?;

    let tokens: Vec<&str> = content
        .split(delimiter.as_char())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let chunks = tokens.chunks_exact(2);
    if let [leftover] = chunks.remainder() {
        warn!("Dropping unpaired trailing token {:?}", leftover);
    }
    let pairs: Vec<ItemPair> = chunks
        .map(|pair| ItemPair::new(pair[0], pair[1]))
        .collect();

    debug!(
        "Extracted {} pairs from {} {}-delimited tokens",
        pairs.len(),
        tokens.len(),
        delimiter
    );
    Ok(pairs)
}

/// Read a price list file and extract its pairs
///
/// # Errors
///
/// Returns [`BudgetError::FileAccess`] when the file cannot be read as UTF-8
/// text, and [`BudgetError::Format`] when its content is unrecognized.
pub fn load_pairs(path: &Path) -> Result<Vec<ItemPair>> {
    let content = std::fs::read_to_string(path).map_err(|source| BudgetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    extract_pairs(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_tuples(pairs: &[ItemPair]) -> Vec<(&str, &str)> {
        pairs
            .iter()
            .map(|p| (p.item.as_str(), p.price.as_str()))
            .collect()
    }

    #[test]
    fn test_comma_delimited() {
        let pairs = extract_pairs("Laptop, 400, Desk, 220, Headphones, 120").unwrap();
        assert_eq!(
            as_tuples(&pairs),
            vec![("Laptop", "400"), ("Desk", "220"), ("Headphones", "120")]
        );
    }

    #[test]
    fn test_newline_delimited() {
        let pairs = extract_pairs("A\n40\nB\n2").unwrap();
        assert_eq!(as_tuples(&pairs), vec![("A", "40"), ("B", "2")]);

        let pairs = extract_pairs("A Shoes From New York\n40\nMug\n2\nSweater\n40").unwrap();
        assert_eq!(
            as_tuples(&pairs),
            vec![("A Shoes From New York", "40"), ("Mug", "2"), ("Sweater", "40")]
        );
    }

    #[test]
    fn test_odd_trailing_token_dropped() {
        let pairs = extract_pairs("A\n40\nB\n2\nC").unwrap();
        assert_eq!(as_tuples(&pairs), vec![("A", "40"), ("B", "2")]);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let pairs = extract_pairs("\r\nCoat\r\n\r\n220\r\n  Boots  \r\n180\r\n").unwrap();
        assert_eq!(as_tuples(&pairs), vec![("Coat", "220"), ("Boots", "180")]);
    }

    #[test]
    fn test_comma_wins_over_newline() {
        let pairs = extract_pairs("Coat, 220,\nBoots, 180\n").unwrap();
        assert_eq!(as_tuples(&pairs), vec![("Coat", "220"), ("Boots", "180")]);
    }

    #[test]
    fn test_unrecognized_format() {
        assert!(matches!(extract_pairs("Coat 220"), Err(BudgetError::Format)));
        assert!(matches!(extract_pairs(""), Err(BudgetError::Format)));
    }

    #[test]
    fn test_delimiters_only() {
        assert!(extract_pairs(",,,").unwrap().is_empty());
        assert!(extract_pairs("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_pairs_missing_file() {
        let result = load_pairs(Path::new("/definitely/not/here/prices.txt"));
        match result {
            Err(BudgetError::FileAccess { path, .. }) => {
                assert_eq!(path, Path::new("/definitely/not/here/prices.txt"));
            }
            other => panic!("Expected FileAccess, got {other:?}"),
        }
    }
}
