//! Cost calculator module for computing tax-adjusted prices
//!
//! This module turns extracted item/price pairs into [`PriceRecord`]s: the
//! gross price parsed from its token, the price after the fixed sales tax,
//! and the tax paid.
//!
//! # Examples
//!
//! ```
//! use budgetsheet_core::types::ItemPair;
//! use budgetsheet_pricing::cost_calculator::{CostCalculator, PricePolicy};
//!
//! let pairs = vec![ItemPair::new("Coat", "220"), ItemPair::new("Scarf", "19.99")];
//!
//! let calculator = CostCalculator::new(PricePolicy::Strict);
//! let records = calculator.compute_costs(&pairs)?;
//!
//! assert_eq!(records.len(), 2);
//! assert!((records[0].after_tax_price() - 248.6).abs() < 1e-9);
//! # Ok::<(), budgetsheet_core::BudgetError>(())
//! ```

use budgetsheet_core::classify::{ValueKind, classify};
use budgetsheet_core::error::{BudgetError, Result};
use budgetsheet_core::types::{Amount, ItemPair, PriceRecord, TAX_RATE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// What to do with a price token that is not a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricePolicy {
    /// Treat the item as costing nothing and keep going
    #[default]
    Permissive,
    /// Reject the whole run
    Strict,
}

/// Computes tax-adjusted price records at a fixed rate
#[derive(Debug, Clone, Copy)]
pub struct CostCalculator {
    tax_rate: f64,
    policy: PricePolicy,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(PricePolicy::default())
    }
}

impl CostCalculator {
    /// Create a calculator using the fixed [`TAX_RATE`]
    pub fn new(policy: PricePolicy) -> Self {
        Self {
            tax_rate: TAX_RATE,
            policy,
        }
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn policy(&self) -> PricePolicy {
        self.policy
    }

    /// Parse a price token into an [`Amount`]
    ///
    /// Returns `None` when the token does not classify as a number, or is
    /// too long to be a finite `f64`. Whole numbers too large for `i64` are
    /// kept as decimals.
    pub fn parse_price(token: &str) -> Option<Amount> {
        let finite_decimal = || {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Amount::Decimal)
        };

        match classify(Some(token)) {
            ValueKind::Integer => token.parse::<i64>().ok().map(Amount::Integer).or_else(finite_decimal),
            ValueKind::Decimal => finite_decimal(),
            _ => None,
        }
    }

    /// Compute the record for a single pair
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::NonNumericPrice`] when the price token is not a
    /// number and the policy is [`PricePolicy::Strict`].
    pub fn compute_record(&self, pair: &ItemPair) -> Result<PriceRecord> {
        let gross = match (Self::parse_price(&pair.price), self.policy) {
            (Some(amount), _) => amount,
            (None, PricePolicy::Permissive) => zero_price(pair),
            (None, PricePolicy::Strict) => {
                return Err(BudgetError::NonNumericPrice {
                    item: pair.item.clone(),
                    token: pair.price.clone(),
                });
            }
        };

        let record = PriceRecord::new(pair.item.as_str(), gross, self.tax_rate);
        debug!(
            "Computed '{}': gross {} -> after tax {:.6}, tax {:.6}",
            record.item(),
            gross,
            record.after_tax_price(),
            record.tax_paid()
        );
        Ok(record)
    }

    /// Compute records for every pair, in input order
    ///
    /// No rounding happens here; the records keep full precision.
    pub fn compute_costs(&self, pairs: &[ItemPair]) -> Result<Vec<PriceRecord>> {
        pairs.iter().map(|pair| self.compute_record(pair)).collect()
    }
}

/// Compute records under the permissive policy
///
/// Non-numeric prices count as zero, so this never fails.
pub fn compute_costs(pairs: &[ItemPair]) -> Vec<PriceRecord> {
    pairs
        .iter()
        .map(|pair| {
            let gross = CostCalculator::parse_price(&pair.price).unwrap_or_else(|| zero_price(pair));
            PriceRecord::new(pair.item.as_str(), gross, TAX_RATE)
        })
        .collect()
}

fn zero_price(pair: &ItemPair) -> Amount {
    warn!(
        "Price {:?} for '{}' is not a number, counting it as 0",
        pair.price, pair.item
    );
    Amount::default()
}
