use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual financial inputs for one taxpayer.
///
/// This is the sole mutable state the engine operates on. It is constructed
/// fresh per session with [`Default`] (all amounts zero, all flags false)
/// and edited field by field; the engine itself never mutates it.
///
/// Amounts are annual figures in Thai Baht. All deduction inputs are
/// clamped against the policy caps during calculation, never rejected, so
/// any combination of non-negative values is a valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxpayerInput {
    // Income
    pub annual_salary: Decimal,
    pub bonus: Decimal,
    pub other_income: Decimal,

    // Family status
    pub has_spouse: bool,
    pub spouse_has_income: bool,
    pub number_of_children: u32,
    /// Children born in 2561 BE (2018) or later; each of these earns the
    /// additional per-child bonus on top of the base allowance.
    pub children_born_from_2018: u32,
    pub number_of_parents: u32,
    pub number_of_disabled_dependents: u32,

    // Retirement contributions
    pub provident_fund: Decimal,
    pub government_pension_fund: Decimal,
    pub rmf_investment: Decimal,
    pub ssf_investment: Decimal,
    pub pension_insurance: Decimal,
    pub nsf_contribution: Decimal,

    // Insurance premiums
    pub life_insurance: Decimal,
    pub spouse_life_insurance: Decimal,
    pub health_insurance: Decimal,
    pub parent_health_insurance: Decimal,
    pub social_security: Decimal,

    // Other deductions
    pub home_loan_interest: Decimal,
    pub easy_e_receipt: Decimal,

    // Donations
    pub education_donation: Decimal,
    pub general_donation: Decimal,
    pub political_donation: Decimal,

    // Tax already collected at source
    pub withholding_tax_paid: Decimal,
}
