//! Shared test fixtures. The 2567 BE ruleset here mirrors the published
//! parameters used by the shipped `TH-2567.json` document.

use rust_decimal_macros::dec;

use crate::models::{
    ChildAllowanceRule, ComponentRule, DonationRules, EducationDonationRule,
    EmploymentExpenseRule, GeneralDonationRule, HealthInsuranceRule, LifeInsuranceRule,
    OtherDeductionRules, ParentCareRule, PersonalAllowanceRules, RetirementComponentRules,
    RetirementRules, SimpleCapRule, TaxBracket, TaxRulesConfig,
};

pub(crate) fn rules_2567() -> TaxRulesConfig {
    TaxRulesConfig {
        tax_year: 2567,
        employment_expense: EmploymentExpenseRule {
            rate: dec!(0.5),
            max_amount: dec!(100000),
        },
        personal_allowances: PersonalAllowanceRules {
            self_amount: dec!(60000),
            spouse_amount: dec!(60000),
            child: ChildAllowanceRule {
                amount_per_child: dec!(30000),
                additional_from_2018: dec!(30000),
            },
            parent_care: ParentCareRule {
                amount_per_parent: dec!(30000),
                max_parents: 4,
            },
            disabled_amount_per_person: dec!(60000),
        },
        retirement: RetirementRules {
            percentage_rate: dec!(0.30),
            absolute_limit: dec!(500000),
            components: RetirementComponentRules {
                provident_fund: ComponentRule {
                    percentage_of_income_cap: Some(dec!(0.15)),
                    individual_cap: None,
                },
                government_pension_fund: ComponentRule {
                    percentage_of_income_cap: Some(dec!(0.15)),
                    individual_cap: None,
                },
                rmf: ComponentRule {
                    percentage_of_income_cap: Some(dec!(0.30)),
                    individual_cap: None,
                },
                ssf: ComponentRule {
                    percentage_of_income_cap: Some(dec!(0.30)),
                    individual_cap: Some(dec!(200000)),
                },
                pension_insurance: ComponentRule {
                    percentage_of_income_cap: Some(dec!(0.15)),
                    individual_cap: Some(dec!(200000)),
                },
                nsf: ComponentRule {
                    percentage_of_income_cap: None,
                    individual_cap: Some(dec!(30000)),
                },
            },
        },
        life_insurance: LifeInsuranceRule {
            self_limit: dec!(100000),
            spouse_limit: dec!(10000),
        },
        health_insurance: HealthInsuranceRule {
            own_limit: dec!(25000),
            combined_with_life_limit: dec!(100000),
        },
        parent_health_insurance: SimpleCapRule {
            absolute_limit: dec!(15000),
        },
        social_security: SimpleCapRule {
            absolute_limit: dec!(9000),
        },
        other_deductions: OtherDeductionRules {
            home_loan_interest: SimpleCapRule {
                absolute_limit: dec!(100000),
            },
            easy_e_receipt: SimpleCapRule {
                absolute_limit: dec!(50000),
            },
        },
        donations: DonationRules {
            education: EducationDonationRule {
                multiplier: dec!(2),
                max_percent_of_net_income: dec!(0.10),
            },
            general: GeneralDonationRule {
                max_percent_of_net_income: dec!(0.10),
            },
            political_party: SimpleCapRule {
                absolute_limit: dec!(10000),
            },
        },
        tax_brackets: vec![
            bracket(dec!(0), Some(dec!(150000)), dec!(0)),
            bracket(dec!(150000), Some(dec!(300000)), dec!(0.05)),
            bracket(dec!(300000), Some(dec!(500000)), dec!(0.10)),
            bracket(dec!(500000), Some(dec!(750000)), dec!(0.15)),
            bracket(dec!(750000), Some(dec!(1000000)), dec!(0.20)),
            bracket(dec!(1000000), Some(dec!(2000000)), dec!(0.25)),
            bracket(dec!(2000000), Some(dec!(5000000)), dec!(0.30)),
            bracket(dec!(5000000), None, dec!(0.35)),
        ],
    }
}

fn bracket(
    min_income: rust_decimal::Decimal,
    max_income: Option<rust_decimal::Decimal>,
    rate: rust_decimal::Decimal,
) -> TaxBracket {
    TaxBracket {
        min_income,
        max_income,
        rate,
    }
}
