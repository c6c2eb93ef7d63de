//! Insurance and social security deduction buckets.
//!
//! Life insurance must be calculated before health insurance: the health
//! bucket consumes whatever headroom remains under the combined
//! life-plus-health ceiling, so [`calculate_health_insurance_bucket`]
//! takes the already-computed life effective amount as a parameter. The
//! parent-health and social-security buckets are simple single-cap
//! deductions with no cross-bucket interaction.

use rust_decimal::Decimal;

use crate::calculations::common::{max, min, round_half_up};
use crate::models::{
    BindingConstraint, BucketCalculation, DeductionBucket, TaxRulesConfig, TaxpayerInput,
};

fn monthly(amount: Decimal) -> Decimal {
    round_half_up(amount / Decimal::from(12))
}

/// Life insurance premiums: own premium up to the self limit, plus the
/// spouse premium (up to the spouse limit) when the spouse has no income.
pub fn calculate_life_insurance_bucket(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> BucketCalculation {
    let rule = &rules.life_insurance;
    let spouse_applicable = input.has_spouse && !input.spouse_has_income;

    let self_effective = min(input.life_insurance, rule.self_limit);
    let spouse_effective = if spouse_applicable {
        min(input.spouse_life_insurance, rule.spouse_limit)
    } else {
        Decimal::ZERO
    };

    let effective = self_effective + spouse_effective;
    let cap = if spouse_applicable {
        rule.self_limit + rule.spouse_limit
    } else {
        rule.self_limit
    };
    let remaining = max(Decimal::ZERO, cap - effective);
    let at_limit = effective >= cap;

    let explanation = if spouse_applicable {
        format!(
            "own premium capped at {} baht, spouse premium at {} baht",
            rule.self_limit, rule.spouse_limit
        )
    } else {
        format!("own premium capped at {} baht", rule.self_limit)
    };

    BucketCalculation {
        bucket: DeductionBucket::LifeInsurance,
        input_amount: input.life_insurance + input.spouse_life_insurance,
        effective_deduction: effective,
        cap_amount: cap,
        remaining_capacity: remaining,
        monthly_remaining_capacity: monthly(remaining),
        binding_constraint: if at_limit {
            BindingConstraint::Absolute
        } else {
            BindingConstraint::None
        },
        constraint_explanation: explanation,
        is_at_limit: at_limit,
    }
}

/// Health insurance premiums: the own cap applies first, then the ceiling
/// shared with life insurance consumes whatever the life bucket left.
///
/// `life_insurance_effective` must be the effective amount of the already
/// computed life bucket; passing a raw input here would overstate the
/// headroom under the combined ceiling.
pub fn calculate_health_insurance_bucket(
    input: &TaxpayerInput,
    life_insurance_effective: Decimal,
    rules: &TaxRulesConfig,
) -> BucketCalculation {
    let rule = &rules.health_insurance;

    let own_capped = min(input.health_insurance, rule.own_limit);

    // Spouse premiums never count against the combined ceiling.
    let life_used = min(life_insurance_effective, rules.life_insurance.self_limit);
    let remaining_combined = max(Decimal::ZERO, rule.combined_with_life_limit - life_used);
    let effective = min(own_capped, remaining_combined);

    let binding_constraint = if effective < own_capped {
        BindingConstraint::Combined
    } else if input.health_insurance >= rule.own_limit {
        BindingConstraint::Absolute
    } else {
        BindingConstraint::None
    };
    let remaining = max(Decimal::ZERO, rule.own_limit - effective);

    BucketCalculation {
        bucket: DeductionBucket::HealthInsurance,
        input_amount: input.health_insurance,
        effective_deduction: effective,
        cap_amount: rule.own_limit,
        remaining_capacity: remaining,
        monthly_remaining_capacity: monthly(remaining),
        binding_constraint,
        constraint_explanation: format!(
            "own premium capped at {} baht, {} baht combined with life insurance",
            rule.own_limit, rule.combined_with_life_limit
        ),
        is_at_limit: binding_constraint != BindingConstraint::None,
    }
}

fn single_cap_bucket(
    bucket: DeductionBucket,
    input_amount: Decimal,
    cap: Decimal,
) -> BucketCalculation {
    let effective = min(input_amount, cap);
    let remaining = max(Decimal::ZERO, cap - effective);
    let at_limit = effective >= cap;

    BucketCalculation {
        bucket,
        input_amount,
        effective_deduction: effective,
        cap_amount: cap,
        remaining_capacity: remaining,
        monthly_remaining_capacity: monthly(remaining),
        binding_constraint: if at_limit {
            BindingConstraint::Absolute
        } else {
            BindingConstraint::None
        },
        constraint_explanation: format!("{} capped at {} baht", bucket.label(), cap),
        is_at_limit: at_limit,
    }
}

/// Parent health insurance premiums, a single absolute cap.
pub fn calculate_parent_health_insurance_bucket(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> BucketCalculation {
    single_cap_bucket(
        DeductionBucket::ParentHealthInsurance,
        input.parent_health_insurance,
        rules.parent_health_insurance.absolute_limit,
    )
}

/// Social security contributions, a single absolute cap.
pub fn calculate_social_security_bucket(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> BucketCalculation {
    single_cap_bucket(
        DeductionBucket::SocialSecurity,
        input.social_security,
        rules.social_security.absolute_limit,
    )
}
