//! Progressive bracket tax.
//!
//! The schedule walks the ordered bracket table and taxes the slice of
//! income falling inside each bracket at that bracket's rate. Brackets
//! the income never reaches are still recorded as zero rows so a consumer
//! can render the complete table. The marginal rate ends up as the rate
//! of the highest bracket actually reached, even when that rate is zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use thaitax_core::calculations::ProgressiveSchedule;
//! use thaitax_core::models::TaxBracket;
//!
//! let brackets = vec![
//!     TaxBracket { min_income: dec!(0), max_income: Some(dec!(150000)), rate: dec!(0) },
//!     TaxBracket { min_income: dec!(150000), max_income: Some(dec!(300000)), rate: dec!(0.05) },
//!     TaxBracket { min_income: dec!(300000), max_income: None, rate: dec!(0.10) },
//! ];
//!
//! let result = ProgressiveSchedule::new(&brackets).calculate(dec!(300000));
//!
//! assert_eq!(result.total_tax, dec!(7500.00));
//! assert_eq!(result.marginal_rate, dec!(0.05));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::min;
use crate::models::{TaxBracket, TaxBracketCalculation};

/// Result of applying the progressive schedule to one taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTaxResult {
    pub total_tax: Decimal,
    pub bracket_breakdown: Vec<TaxBracketCalculation>,
    pub marginal_rate: Decimal,
}

/// Progressive tax calculator over an ordered, validated bracket table.
///
/// The table must satisfy the invariants checked by
/// [`TaxRulesConfig::validate`](crate::models::TaxRulesConfig::validate):
/// contiguous, ascending, non-overlapping, last bracket unbounded.
#[derive(Debug, Clone)]
pub struct ProgressiveSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> ProgressiveSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Applies the schedule to a non-negative taxable income.
    ///
    /// For any income >= 0, every per-bracket value is >= 0 and the
    /// per-bracket taxes sum exactly to `total_tax`.
    pub fn calculate(
        &self,
        taxable_income: Decimal,
    ) -> ProgressiveTaxResult {
        let mut bracket_breakdown = Vec::with_capacity(self.brackets.len());
        let mut total_tax = Decimal::ZERO;
        let mut marginal_rate = Decimal::ZERO;

        for bracket in self.brackets {
            if taxable_income <= bracket.min_income {
                // Zero row kept for display completeness.
                bracket_breakdown.push(TaxBracketCalculation {
                    bracket: bracket.clone(),
                    taxable_in_bracket: Decimal::ZERO,
                    tax_in_bracket: Decimal::ZERO,
                    cumulative_tax: total_tax,
                });
                continue;
            }

            let reach = match bracket.max_income {
                Some(max_income) => min(taxable_income, max_income),
                None => taxable_income,
            };
            let taxable_in_bracket = reach - bracket.min_income;
            let tax_in_bracket = taxable_in_bracket * bracket.rate;
            total_tax += tax_in_bracket;

            if taxable_in_bracket > Decimal::ZERO {
                marginal_rate = bracket.rate;
            }

            bracket_breakdown.push(TaxBracketCalculation {
                bracket: bracket.clone(),
                taxable_in_bracket,
                tax_in_bracket,
                cumulative_tax: total_tax,
            });
        }

        ProgressiveTaxResult {
            total_tax,
            bracket_breakdown,
            marginal_rate,
        }
    }
}
