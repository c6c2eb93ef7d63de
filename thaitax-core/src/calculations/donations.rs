//! Donation deductions with order-dependent layered caps.
//!
//! Donations are the last deduction layer and are capped against the net
//! income left after every other bucket: education first (the raw amount
//! doubles before capping), then general donations against the income
//! remaining after the education deduction, then political donations under
//! a flat cap that ignores both. The ordering is statutory, not an
//! implementation convenience.

use rust_decimal::Decimal;

use crate::calculations::common::{max, min};
use crate::models::{DonationLine, DonationSummary, TaxRulesConfig, TaxpayerInput};

/// Computes the three donation categories against
/// `net_income_before_donations` (net income after expense minus every
/// non-donation deduction). A negative base is treated as zero so the
/// percentage caps stay well-defined.
pub fn calculate_donations(
    input: &TaxpayerInput,
    net_income_before_donations: Decimal,
    rules: &TaxRulesConfig,
) -> DonationSummary {
    let donations = &rules.donations;
    let base = max(Decimal::ZERO, net_income_before_donations);

    let education_multiplied = input.education_donation * donations.education.multiplier;
    let education_cap = base * donations.education.max_percent_of_net_income;
    let education_effective = min(education_multiplied, education_cap);

    let remaining_after_education = max(Decimal::ZERO, base - education_effective);
    let general_cap = remaining_after_education * donations.general.max_percent_of_net_income;
    let general_effective = min(input.general_donation, general_cap);

    let political_cap = donations.political_party.absolute_limit;
    let political_effective = min(input.political_donation, political_cap);

    DonationSummary {
        education: DonationLine {
            input_amount: input.education_donation,
            effective_amount: education_effective,
            cap_amount: education_cap,
        },
        general: DonationLine {
            input_amount: input.general_donation,
            effective_amount: general_effective,
            cap_amount: general_cap,
        },
        political: DonationLine {
            input_amount: input.political_donation,
            effective_amount: political_effective,
            cap_amount: political_cap,
        },
        total: education_effective + general_effective + political_effective,
    }
}
