//! Personal and family allowances.
//!
//! Every input here is clamped rather than rejected: excess parents beyond
//! the policy maximum are ignored, and a from-2018 child count larger than
//! the total child count saturates to zero regular children.

use rust_decimal::Decimal;

use crate::models::{PersonalAllowanceBreakdown, TaxRulesConfig, TaxpayerInput};

/// Computes the five allowance components and their sum.
///
/// The self allowance is always granted. The spouse allowance applies only
/// when the taxpayer has a spouse with no income of their own. Children
/// born in 2561 BE (2018) or later earn the base amount plus the statutory
/// bonus; older children earn the base amount alone.
pub fn calculate_personal_allowances(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> PersonalAllowanceBreakdown {
    let allowances = &rules.personal_allowances;

    let self_allowance = allowances.self_amount;

    let spouse = if input.has_spouse && !input.spouse_has_income {
        allowances.spouse_amount
    } else {
        Decimal::ZERO
    };

    let regular_children = input
        .number_of_children
        .saturating_sub(input.children_born_from_2018);
    let boosted_per_child =
        allowances.child.amount_per_child + allowances.child.additional_from_2018;
    let children = Decimal::from(regular_children) * allowances.child.amount_per_child
        + Decimal::from(input.children_born_from_2018) * boosted_per_child;

    let counted_parents = input
        .number_of_parents
        .min(allowances.parent_care.max_parents);
    let parents = Decimal::from(counted_parents) * allowances.parent_care.amount_per_parent;

    let disabled =
        Decimal::from(input.number_of_disabled_dependents) * allowances.disabled_amount_per_person;

    PersonalAllowanceBreakdown {
        self_allowance,
        spouse,
        children,
        parents,
        disabled,
        total: self_allowance + spouse + children + parents + disabled,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::testing::rules_2567;

    #[test]
    fn self_allowance_is_always_granted() {
        let rules = rules_2567();
        let input = TaxpayerInput::default();

        let breakdown = calculate_personal_allowances(&input, &rules);

        assert_eq!(breakdown.self_allowance, dec!(60000));
        assert_eq!(breakdown.total, dec!(60000));
    }

    #[test]
    fn spouse_allowance_requires_spouse_without_income() {
        let rules = rules_2567();
        let eligible = TaxpayerInput {
            has_spouse: true,
            spouse_has_income: false,
            ..TaxpayerInput::default()
        };
        let ineligible = TaxpayerInput {
            has_spouse: true,
            spouse_has_income: true,
            ..TaxpayerInput::default()
        };

        assert_eq!(
            calculate_personal_allowances(&eligible, &rules).spouse,
            dec!(60000)
        );
        assert_eq!(
            calculate_personal_allowances(&ineligible, &rules).spouse,
            dec!(0)
        );
    }

    #[test]
    fn children_from_2018_earn_the_bonus() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            number_of_children: 3,
            children_born_from_2018: 2,
            ..TaxpayerInput::default()
        };

        let breakdown = calculate_personal_allowances(&input, &rules);

        // 1 x 30,000 + 2 x (30,000 + 30,000)
        assert_eq!(breakdown.children, dec!(150000));
    }

    #[test]
    fn from_2018_count_above_total_children_saturates() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            number_of_children: 1,
            children_born_from_2018: 3,
            ..TaxpayerInput::default()
        };

        let breakdown = calculate_personal_allowances(&input, &rules);

        // 0 regular children, 3 boosted.
        assert_eq!(breakdown.children, dec!(180000));
    }

    #[test]
    fn parents_beyond_the_cap_are_ignored() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            number_of_parents: 6,
            ..TaxpayerInput::default()
        };

        let breakdown = calculate_personal_allowances(&input, &rules);

        assert_eq!(breakdown.parents, dec!(120000));
    }

    #[test]
    fn disabled_dependents_are_unbounded() {
        let rules = rules_2567();
        let input = TaxpayerInput {
            number_of_disabled_dependents: 5,
            ..TaxpayerInput::default()
        };

        let breakdown = calculate_personal_allowances(&input, &rules);

        assert_eq!(breakdown.disabled, dec!(300000));
    }
}
