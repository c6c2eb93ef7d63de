//! Benefit maximizer: allocates the discretionary retirement instruments
//! (SSF, pension insurance, RMF) to exhaust the remaining combined
//! retirement capacity, then prices the allocation by re-running the full
//! engine on both the unmodified and the optimized input.
//!
//! The fill order — SSF first, then pension insurance, then RMF absorbing
//! the rest — is a fixed smallest-cap-first policy choice, not a result
//! derived from an optimality proof. Under a ruleset with unusual
//! per-instrument caps a different order could exhaust more capacity; the
//! shipped rules do not have that shape, and the order is kept stable so
//! the suggestion is predictable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, min};
use crate::calculations::engine::calculate_tax;
use crate::calculations::income::gross_income;
use crate::calculations::retirement::{
    combined_retirement_cap, pension_insurance_cap, ssf_cap,
};
use crate::models::{TaxCalculationResult, TaxRulesConfig, TaxpayerInput};

/// Suggested allocation of the three discretionary retirement instruments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaximizeBenefit {
    pub optimal_rmf: Decimal,
    pub optimal_ssf: Decimal,
    pub optimal_pension_insurance: Decimal,
    /// Combined retirement deduction when the suggestion is applied,
    /// including the fixed contributions already in the input.
    pub max_deduction_used: Decimal,
    /// Tax before credits saved versus the unmodified input.
    pub tax_saved: Decimal,
}

/// Difference between two already-computed results (e.g. a baseline and a
/// what-if scenario).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxImpact {
    pub tax_reduction: Decimal,
    pub additional_refund: Decimal,
    pub payable_difference: Decimal,
    pub refund_difference: Decimal,
}

/// Compares a candidate result against a baseline.
pub fn compare_scenarios(
    baseline: &TaxCalculationResult,
    candidate: &TaxCalculationResult,
) -> TaxImpact {
    let additional_refund = candidate.refund_amount - baseline.refund_amount;

    TaxImpact {
        tax_reduction: baseline.tax_before_credits - candidate.tax_before_credits,
        additional_refund,
        payable_difference: baseline.final_tax_payable - candidate.final_tax_payable,
        refund_difference: additional_refund,
    }
}

/// Computes the allocation that exhausts the remaining combined retirement
/// capacity and the tax it would save.
///
/// Purely advisory: the caller's input is not modified, and the caller
/// decides whether to apply the suggested amounts.
pub fn calculate_maximize_benefit(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> MaximizeBenefit {
    let eligible_income = gross_income(input);
    let cap = combined_retirement_cap(eligible_income, rules);

    // The non-discretionary contributions stay as entered.
    let current_fixed =
        input.provident_fund + input.government_pension_fund + input.nsf_contribution;
    let remaining_capacity = max(Decimal::ZERO, cap.max_deduction - current_fixed);

    let mut remaining = remaining_capacity;
    let optimal_ssf = min(remaining, ssf_cap(eligible_income, rules));
    remaining -= optimal_ssf;
    let optimal_pension_insurance = min(remaining, pension_insurance_cap(eligible_income, rules));
    remaining -= optimal_pension_insurance;
    // RMF has no individual cap beyond the combined ceiling.
    let optimal_rmf = remaining;

    let optimized_input = TaxpayerInput {
        rmf_investment: optimal_rmf,
        ssf_investment: optimal_ssf,
        pension_insurance: optimal_pension_insurance,
        ..input.clone()
    };

    let baseline_result = calculate_tax(input, rules);
    let optimized_result = calculate_tax(&optimized_input, rules);

    MaximizeBenefit {
        optimal_rmf,
        optimal_ssf,
        optimal_pension_insurance,
        max_deduction_used: optimal_rmf
            + optimal_ssf
            + optimal_pension_insurance
            + current_fixed,
        tax_saved: baseline_result.tax_before_credits - optimized_result.tax_before_credits,
    }
}
