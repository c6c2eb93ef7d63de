//! Deterministic calculation engine for Thailand personal income tax.
//!
//! Given a [`TaxpayerInput`] and a year-specific [`TaxRulesConfig`], the
//! engine produces a complete [`TaxCalculationResult`]: capped deduction
//! buckets, taxable income, the progressive bracket breakdown, and the
//! final payable-or-refund position. Every function is pure and
//! synchronous; identical inputs always yield bit-identical results.
//!
//! Rules configurations are external data. This crate never performs I/O;
//! see the `thaitax-rules` crate for the year-keyed rules provider.

pub mod calculations;
pub mod models;

pub use calculations::{
    MaximizeBenefit, ProgressiveSchedule, ProgressiveTaxResult, TaxImpact,
    calculate_maximize_benefit, calculate_tax, compare_scenarios,
};
pub use models::*;

#[cfg(test)]
pub(crate) mod testing;
