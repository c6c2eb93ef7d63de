//! The retirement deduction bucket.
//!
//! Retirement instruments share a two-level cap structure:
//!
//! 1. A combined ceiling over all six components:
//!    `min(eligible income x percentage rate, absolute limit)`. Which side
//!    binds is reported for explanatory text; a tie resolves to the
//!    percentage side.
//! 2. Per-component caps, applied independently before the combined clamp:
//!
//! | Component               | Percentage cap            | Individual cap |
//! |-------------------------|---------------------------|----------------|
//! | Provident fund          | 15% of salary (default)   | —              |
//! | Government pension fund | 15% of salary (default)   | —              |
//! | RMF                     | 30% of income (default)   | none by default|
//! | SSF                     | 30% of income (default)   | 200,000 default|
//! | Pension insurance       | 15% of income (default)   | 200,000 default|
//! | NSF                     | —                         | 30,000 default |
//!
//! The final clamp of the component sum to the combined ceiling is
//! non-attributive: it truncates the total without deciding which
//! component "loses" the excess.

use rust_decimal::Decimal;

use crate::calculations::common::{max, min, round_half_up};
use crate::models::{
    BindingConstraint, ComponentCalculation, ComponentRule, RetirementBucketSummary,
    RetirementComponent, TaxRulesConfig, TaxpayerInput,
};

// Statutory fallbacks for component rules that leave a cap unspecified.
fn default_salary_cap_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn default_income_cap_rate() -> Decimal {
    Decimal::new(30, 2)
}

fn default_instrument_cap() -> Decimal {
    Decimal::from(200_000)
}

fn default_nsf_cap() -> Decimal {
    Decimal::from(30_000)
}

/// The combined (level-1) retirement ceiling and which side of it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedRetirementCap {
    pub percentage_limit: Decimal,
    pub absolute_limit: Decimal,
    pub max_deduction: Decimal,
    pub binding_constraint: BindingConstraint,
    pub explanation: String,
}

/// Computes the combined retirement ceiling for the given eligible income.
pub fn combined_retirement_cap(
    eligible_income: Decimal,
    rules: &TaxRulesConfig,
) -> CombinedRetirementCap {
    let retirement = &rules.retirement;
    let percentage_limit = eligible_income * retirement.percentage_rate;
    let absolute_limit = retirement.absolute_limit;
    let max_deduction = min(percentage_limit, absolute_limit);

    // Tie resolves to the percentage side.
    let binding_constraint = if percentage_limit <= absolute_limit {
        BindingConstraint::Percentage
    } else {
        BindingConstraint::Absolute
    };

    let percent_display = retirement.percentage_rate * Decimal::ONE_HUNDRED;
    let explanation = match binding_constraint {
        BindingConstraint::Percentage => format!(
            "limited to {percent_display}% of income ({percentage_limit} baht), \
             below the {absolute_limit} baht ceiling"
        ),
        _ => format!(
            "limited to the {absolute_limit} baht ceiling, below {percent_display}% \
             of income ({percentage_limit} baht)"
        ),
    };

    CombinedRetirementCap {
        percentage_limit,
        absolute_limit,
        max_deduction,
        binding_constraint,
        explanation,
    }
}

/// Cap for the SSF component under the given rules.
pub fn ssf_cap(
    eligible_income: Decimal,
    rules: &TaxRulesConfig,
) -> Decimal {
    let rule = &rules.retirement.components.ssf;
    min(
        eligible_income
            * rule
                .percentage_of_income_cap
                .unwrap_or_else(default_income_cap_rate),
        rule.individual_cap.unwrap_or_else(default_instrument_cap),
    )
}

/// Cap for the pension insurance component under the given rules.
pub fn pension_insurance_cap(
    eligible_income: Decimal,
    rules: &TaxRulesConfig,
) -> Decimal {
    let rule = &rules.retirement.components.pension_insurance;
    min(
        eligible_income
            * rule
                .percentage_of_income_cap
                .unwrap_or_else(default_salary_cap_rate),
        rule.individual_cap.unwrap_or_else(default_instrument_cap),
    )
}

fn salary_based_cap(
    salary: Decimal,
    rule: &ComponentRule,
) -> Decimal {
    salary
        * rule
            .percentage_of_income_cap
            .unwrap_or_else(default_salary_cap_rate)
}

fn rmf_cap(
    eligible_income: Decimal,
    rule: &ComponentRule,
) -> Decimal {
    let percentage_cap = eligible_income
        * rule
            .percentage_of_income_cap
            .unwrap_or_else(default_income_cap_rate);
    match rule.individual_cap {
        Some(cap) => min(percentage_cap, cap),
        None => percentage_cap,
    }
}

fn component(
    kind: RetirementComponent,
    input_amount: Decimal,
    individual_cap: Decimal,
) -> ComponentCalculation {
    ComponentCalculation {
        component: kind,
        input_amount,
        effective_amount: min(input_amount, individual_cap),
        individual_cap,
        is_at_individual_limit: input_amount >= individual_cap,
    }
}

/// Computes the full retirement bucket: six independently capped
/// components whose sum is then clamped to the combined ceiling.
pub fn calculate_retirement_bucket(
    input: &TaxpayerInput,
    eligible_income: Decimal,
    rules: &TaxRulesConfig,
) -> RetirementBucketSummary {
    let cap = combined_retirement_cap(eligible_income, rules);
    let components_rules = &rules.retirement.components;

    let components = vec![
        component(
            RetirementComponent::ProvidentFund,
            input.provident_fund,
            salary_based_cap(input.annual_salary, &components_rules.provident_fund),
        ),
        component(
            RetirementComponent::GovernmentPensionFund,
            input.government_pension_fund,
            salary_based_cap(input.annual_salary, &components_rules.government_pension_fund),
        ),
        component(
            RetirementComponent::Rmf,
            input.rmf_investment,
            rmf_cap(eligible_income, &components_rules.rmf),
        ),
        component(
            RetirementComponent::Ssf,
            input.ssf_investment,
            ssf_cap(eligible_income, rules),
        ),
        component(
            RetirementComponent::PensionInsurance,
            input.pension_insurance,
            pension_insurance_cap(eligible_income, rules),
        ),
        component(
            RetirementComponent::Nsf,
            input.nsf_contribution,
            components_rules
                .nsf
                .individual_cap
                .unwrap_or_else(default_nsf_cap),
        ),
    ];

    let total_input: Decimal = components.iter().map(|c| c.input_amount).sum();
    let total_component_effective: Decimal =
        components.iter().map(|c| c.effective_amount).sum();

    // Non-attributive clamp to the combined ceiling.
    let total_effective_deduction = min(total_component_effective, cap.max_deduction);
    let remaining_capacity = max(Decimal::ZERO, cap.max_deduction - total_effective_deduction);

    RetirementBucketSummary {
        total_input,
        total_effective_deduction,
        percentage_limit: cap.percentage_limit,
        absolute_limit: cap.absolute_limit,
        max_deduction: cap.max_deduction,
        binding_constraint: cap.binding_constraint,
        constraint_explanation: cap.explanation,
        remaining_capacity,
        monthly_remaining_capacity: round_half_up(remaining_capacity / Decimal::from(12)),
        components,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::testing::rules_2567;

    fn find(
        summary: &RetirementBucketSummary,
        kind: RetirementComponent,
    ) -> ComponentCalculation {
        summary
            .components
            .iter()
            .find(|c| c.component == kind)
            .cloned()
            .unwrap()
    }

    #[test]
    fn combined_cap_binds_on_percentage_for_modest_income() {
        let rules = rules_2567();

        let cap = combined_retirement_cap(dec!(600000), &rules);

        assert_eq!(cap.percentage_limit, dec!(180000));
        assert_eq!(cap.absolute_limit, dec!(500000));
        assert_eq!(cap.max_deduction, dec!(180000));
        assert_eq!(cap.binding_constraint, BindingConstraint::Percentage);
    }

    #[test]
    fn combined_cap_binds_on_absolute_for_high_income() {
        let rules = rules_2567();

        let cap = combined_retirement_cap(dec!(2000000), &rules);

        assert_eq!(cap.percentage_limit, dec!(600000));
        assert_eq!(cap.max_deduction, dec!(500000));
        assert_eq!(cap.binding_constraint, BindingConstraint::Absolute);
    }

    #[test]
    fn combined_cap_tie_resolves_to_percentage() {
        let mut rules = rules_2567();
        rules.retirement.absolute_limit = dec!(180000);

        let cap = combined_retirement_cap(dec!(600000), &rules);

        assert_eq!(cap.binding_constraint, BindingConstraint::Percentage);
    }

    #[test]
    fn components_within_limits_pass_through() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(1000000),
            provident_fund: dec!(100000),
            rmf_investment: dec!(100000),
            ssf_investment: dec!(100000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(1000000), &rules);

        assert_eq!(summary.max_deduction, dec!(300000));
        assert_eq!(summary.total_input, dec!(300000));
        assert_eq!(summary.total_effective_deduction, dec!(300000));
        assert_eq!(summary.remaining_capacity, dec!(0));
    }

    #[test]
    fn ssf_clamps_at_individual_cap() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(2000000),
            ssf_investment: dec!(300000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(2000000), &rules);
        let ssf = find(&summary, RetirementComponent::Ssf);

        assert_eq!(ssf.effective_amount, dec!(200000));
        assert!(ssf.is_at_individual_limit);
    }

    #[test]
    fn provident_fund_clamps_at_salary_percentage() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(600000),
            provident_fund: dec!(120000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(600000), &rules);
        let pvd = find(&summary, RetirementComponent::ProvidentFund);

        // 15% of 600,000
        assert_eq!(pvd.individual_cap, dec!(90000));
        assert_eq!(pvd.effective_amount, dec!(90000));
        assert!(pvd.is_at_individual_limit);
    }

    #[test]
    fn rmf_has_no_individual_cap_in_default_rules() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(2000000),
            rmf_investment: dec!(550000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(2000000), &rules);
        let rmf = find(&summary, RetirementComponent::Rmf);

        // Only the 30% percentage cap applies: 600,000.
        assert_eq!(rmf.individual_cap, dec!(600000));
        assert_eq!(rmf.effective_amount, dec!(550000));
        assert!(!rmf.is_at_individual_limit);
    }

    #[test]
    fn nsf_uses_flat_cap_without_percentage() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            nsf_contribution: dec!(50000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(600000), &rules);
        let nsf = find(&summary, RetirementComponent::Nsf);

        assert_eq!(nsf.effective_amount, dec!(30000));
        assert_eq!(nsf.individual_cap, dec!(30000));
        assert!(nsf.is_at_individual_limit);
    }

    #[test]
    fn component_sum_clamps_to_combined_cap_without_redistribution() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(2000000),
            rmf_investment: dec!(400000),
            ssf_investment: dec!(200000),
            pension_insurance: dec!(200000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(2000000), &rules);

        // Components individually pass (400k + 200k + 200k = 800k) but the
        // combined ceiling truncates the total to 500k.
        let component_sum: Decimal =
            summary.components.iter().map(|c| c.effective_amount).sum();
        assert_eq!(component_sum, dec!(800000));
        assert_eq!(summary.total_effective_deduction, dec!(500000));
        assert_eq!(summary.remaining_capacity, dec!(0));
    }

    #[test]
    fn remaining_capacity_reports_monthly_equivalent() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            annual_salary: dec!(600000),
            ssf_investment: dec!(60000),
            ..TaxpayerInput::default()
        };

        let summary = calculate_retirement_bucket(&input, dec!(600000), &rules);

        assert_eq!(summary.remaining_capacity, dec!(120000));
        assert_eq!(summary.monthly_remaining_capacity, dec!(10000.00));
    }
}
