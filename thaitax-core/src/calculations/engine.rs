//! The tax orchestrator: one strict sequential pipeline from raw inputs
//! to the final payable-or-refund position.
//!
//! # Pipeline
//!
//! | Step | Computation |
//! |------|-------------|
//! | 1    | Gross income = salary + bonus + other income |
//! | 2    | Employment expense deduction, net income after expense |
//! | 3    | Personal allowances |
//! | 4    | Retirement bucket (gross income as eligible income) |
//! | 5    | Life insurance, then health insurance (combined ceiling) |
//! | 6    | Parent health insurance, social security |
//! | 7    | Other deductions (home loan interest, Easy E-Receipt) |
//! | 8    | Net income before donations |
//! | 9    | Donations (layered caps against step 8) |
//! | 10   | Taxable income = max(0, net after expense - total deductions) |
//! | 11   | Progressive bracket tax |
//! | 12   | Withholding reconciliation: payable or refund |
//!
//! The two ordering dependencies (life before health, every other bucket
//! before donations) are explicit in the function signatures of the
//! bucket modules; this module merely threads the values through.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::allowances::calculate_personal_allowances;
use crate::calculations::brackets::ProgressiveSchedule;
use crate::calculations::common::max;
use crate::calculations::donations::calculate_donations;
use crate::calculations::income::{employment_expense_deduction, gross_income};
use crate::calculations::insurance::{
    calculate_health_insurance_bucket, calculate_life_insurance_bucket,
    calculate_parent_health_insurance_bucket, calculate_social_security_bucket,
};
use crate::calculations::other_deductions::calculate_other_deductions;
use crate::calculations::retirement::calculate_retirement_bucket;
use crate::models::{DeductionSummary, TaxCalculationResult, TaxRulesConfig, TaxpayerInput};

/// Computes the complete tax breakdown for one taxpayer under one
/// year's rules.
///
/// Pure and infallible: all inputs are clamped against the policy caps,
/// never rejected, and identical `(input, rules)` pairs always produce
/// bit-identical results. The rules must already be validated.
pub fn calculate_tax(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> TaxCalculationResult {
    let gross_income = gross_income(input);
    let expense_deduction = employment_expense_deduction(gross_income, rules);
    let net_income_after_expense = gross_income - expense_deduction;

    let personal_allowances = calculate_personal_allowances(input, rules);

    let retirement = calculate_retirement_bucket(input, gross_income, rules);
    let life_insurance = calculate_life_insurance_bucket(input, rules);
    let health_insurance =
        calculate_health_insurance_bucket(input, life_insurance.effective_deduction, rules);
    let parent_health_insurance = calculate_parent_health_insurance_bucket(input, rules);
    let social_security = calculate_social_security_bucket(input, rules);
    let other = calculate_other_deductions(input, rules);

    let total_deductions_before_donations = personal_allowances.total
        + retirement.total_effective_deduction
        + life_insurance.effective_deduction
        + health_insurance.effective_deduction
        + parent_health_insurance.effective_deduction
        + social_security.effective_deduction
        + other.total;

    let net_income_before_donations =
        net_income_after_expense - total_deductions_before_donations;
    let donations = calculate_donations(input, net_income_before_donations, rules);

    let total_deductions = total_deductions_before_donations + donations.total;
    let taxable_income = max(Decimal::ZERO, net_income_after_expense - total_deductions);

    let tax = ProgressiveSchedule::new(&rules.tax_brackets).calculate(taxable_income);

    let final_tax_payable = max(Decimal::ZERO, tax.total_tax - input.withholding_tax_paid);
    let refund_amount = max(Decimal::ZERO, input.withholding_tax_paid - tax.total_tax);
    let effective_tax_rate = if gross_income > Decimal::ZERO {
        tax.total_tax / gross_income
    } else {
        Decimal::ZERO
    };

    debug!(
        %gross_income,
        %taxable_income,
        total_tax = %tax.total_tax,
        "tax pipeline complete"
    );

    TaxCalculationResult {
        gross_income,
        employment_expense_deduction: expense_deduction,
        net_income_after_expense,
        personal_allowances,
        deductions: DeductionSummary {
            retirement,
            life_insurance,
            health_insurance,
            parent_health_insurance,
            social_security,
            other,
            donations,
            total_deductions,
        },
        taxable_income,
        tax_before_credits: tax.total_tax,
        bracket_breakdown: tax.bracket_breakdown,
        withholding_tax_paid: input.withholding_tax_paid,
        final_tax_payable,
        refund_amount,
        is_refund: refund_amount > Decimal::ZERO,
        effective_tax_rate,
        marginal_tax_rate: tax.marginal_rate,
    }
}
