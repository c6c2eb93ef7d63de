//! Home-loan interest and Easy E-Receipt deductions: independent
//! single-cap items with no cross-bucket interaction.

use crate::calculations::common::min;
use crate::models::{OtherDeductionSummary, TaxRulesConfig, TaxpayerInput};

pub fn calculate_other_deductions(
    input: &TaxpayerInput,
    rules: &TaxRulesConfig,
) -> OtherDeductionSummary {
    let home_loan_interest = min(
        input.home_loan_interest,
        rules.other_deductions.home_loan_interest.absolute_limit,
    );
    let easy_e_receipt = min(
        input.easy_e_receipt,
        rules.other_deductions.easy_e_receipt.absolute_limit,
    );

    OtherDeductionSummary {
        home_loan_interest,
        easy_e_receipt,
        total: home_loan_interest + easy_e_receipt,
    }
}
