mod result;
mod rules;
mod taxpayer_input;

pub use result::{
    BindingConstraint, BucketCalculation, ComponentCalculation, DeductionBucket,
    DeductionSummary, DonationLine, DonationSummary, OtherDeductionSummary,
    PersonalAllowanceBreakdown, RetirementBucketSummary, RetirementComponent,
    TaxBracketCalculation, TaxCalculationResult,
};
pub use rules::{
    ChildAllowanceRule, ComponentRule, DonationRules, EducationDonationRule,
    EmploymentExpenseRule, GeneralDonationRule, HealthInsuranceRule, LifeInsuranceRule,
    OtherDeductionRules, ParentCareRule, PersonalAllowanceRules, RetirementComponentRules,
    RetirementRules, RulesValidationError, SimpleCapRule, TaxBracket, TaxRulesConfig,
};
pub use taxpayer_input::TaxpayerInput;
