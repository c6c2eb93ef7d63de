//! Gross income and the employment expense deduction.

use rust_decimal::Decimal;

use crate::calculations::common::min;
use crate::models::{TaxRulesConfig, TaxpayerInput};

/// Sum of all assessable income: salary, bonus, and other income.
///
/// This figure doubles as the "eligible income" base for every
/// percentage-of-income cap in the deduction buckets.
pub fn gross_income(input: &TaxpayerInput) -> Decimal {
    input.annual_salary + input.bonus + input.other_income
}

/// Employment expense deduction: a flat percentage of gross income up to
/// an absolute cap (50% capped at 100,000 baht in the 2567 ruleset).
pub fn employment_expense_deduction(
    gross_income: Decimal,
    rules: &TaxRulesConfig,
) -> Decimal {
    min(
        gross_income * rules.employment_expense.rate,
        rules.employment_expense.max_amount,
    )
}

/// Gross income less the employment expense deduction.
pub fn net_income_after_expense(
    gross_income: Decimal,
    rules: &TaxRulesConfig,
) -> Decimal {
    gross_income - employment_expense_deduction(gross_income, rules)
}
