use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::rules::TaxBracket;

/// Which of the competing caps actually limits a deduction's effective
/// value. `None` means no cap was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingConstraint {
    /// A percentage-of-income cap binds.
    Percentage,
    /// An absolute cap binds.
    Absolute,
    /// A per-component cap binds.
    Individual,
    /// A ceiling shared with another bucket binds.
    Combined,
    /// No cap reached; the raw input counts in full.
    None,
}

/// The six instruments sharing the combined retirement ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementComponent {
    ProvidentFund,
    GovernmentPensionFund,
    Rmf,
    Ssf,
    PensionInsurance,
    Nsf,
}

impl RetirementComponent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProvidentFund => "provident fund",
            Self::GovernmentPensionFund => "government pension fund",
            Self::Rmf => "RMF",
            Self::Ssf => "SSF",
            Self::PensionInsurance => "pension insurance",
            Self::Nsf => "NSF",
        }
    }
}

/// Per-component breakdown inside the retirement bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCalculation {
    pub component: RetirementComponent,
    pub input_amount: Decimal,
    pub effective_amount: Decimal,
    pub individual_cap: Decimal,
    pub is_at_individual_limit: bool,
}

/// Retirement bucket summary: the combined two-sided cap, the six
/// component breakdowns, and the capacity still unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementBucketSummary {
    pub total_input: Decimal,
    /// Sum of component effective amounts, clamped to the combined cap.
    pub total_effective_deduction: Decimal,
    pub percentage_limit: Decimal,
    pub absolute_limit: Decimal,
    /// The smaller of the two combined-cap sides.
    pub max_deduction: Decimal,
    pub binding_constraint: BindingConstraint,
    pub constraint_explanation: String,
    pub remaining_capacity: Decimal,
    pub monthly_remaining_capacity: Decimal,
    pub components: Vec<ComponentCalculation>,
}

/// The simple capped buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionBucket {
    LifeInsurance,
    HealthInsurance,
    ParentHealthInsurance,
    SocialSecurity,
}

impl DeductionBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LifeInsurance => "life insurance",
            Self::HealthInsurance => "health insurance",
            Self::ParentHealthInsurance => "parent health insurance",
            Self::SocialSecurity => "social security",
        }
    }
}

/// Normalized shape shared by every capped deduction bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCalculation {
    pub bucket: DeductionBucket,
    pub input_amount: Decimal,
    pub effective_deduction: Decimal,
    pub cap_amount: Decimal,
    pub remaining_capacity: Decimal,
    pub monthly_remaining_capacity: Decimal,
    pub binding_constraint: BindingConstraint,
    pub constraint_explanation: String,
    pub is_at_limit: bool,
}

/// The five allowance components and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalAllowanceBreakdown {
    pub self_allowance: Decimal,
    pub spouse: Decimal,
    pub children: Decimal,
    pub parents: Decimal,
    pub disabled: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDeductionSummary {
    pub home_loan_interest: Decimal,
    pub easy_e_receipt: Decimal,
    pub total: Decimal,
}

/// One donation category: raw input, post-cap amount, and the cap that
/// applied (for education this caps the multiplied amount).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationLine {
    pub input_amount: Decimal,
    pub effective_amount: Decimal,
    pub cap_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationSummary {
    pub education: DonationLine,
    pub general: DonationLine,
    pub political: DonationLine,
    pub total: Decimal,
}

/// Every deduction bucket plus the grand total counted against income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub retirement: RetirementBucketSummary,
    pub life_insurance: BucketCalculation,
    pub health_insurance: BucketCalculation,
    pub parent_health_insurance: BucketCalculation,
    pub social_security: BucketCalculation,
    pub other: OtherDeductionSummary,
    pub donations: DonationSummary,
    pub total_deductions: Decimal,
}

/// One row of the progressive breakdown. Brackets the income never
/// reaches are still recorded with zero values for display completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketCalculation {
    pub bracket: TaxBracket,
    pub taxable_in_bracket: Decimal,
    pub tax_in_bracket: Decimal,
    pub cumulative_tax: Decimal,
}

/// The full derived output of one engine run. Never mutated after
/// construction; recomputed in full on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub gross_income: Decimal,
    pub employment_expense_deduction: Decimal,
    pub net_income_after_expense: Decimal,
    pub personal_allowances: PersonalAllowanceBreakdown,
    pub deductions: DeductionSummary,
    pub taxable_income: Decimal,
    pub tax_before_credits: Decimal,
    pub bracket_breakdown: Vec<TaxBracketCalculation>,
    pub withholding_tax_paid: Decimal,
    pub final_tax_payable: Decimal,
    pub refund_amount: Decimal,
    pub is_refund: bool,
    pub effective_tax_rate: Decimal,
    pub marginal_tax_rate: Decimal,
}
