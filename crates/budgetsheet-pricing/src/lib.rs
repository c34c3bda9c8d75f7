//! Tax-adjusted cost calculator for budgetsheet
//!
//! This crate parses price tokens and computes after-tax prices and tax paid
//! at the fixed sales tax rate.

pub mod cost_calculator;

pub use cost_calculator::{CostCalculator, PricePolicy, compute_costs};
