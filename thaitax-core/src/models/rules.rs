use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`TaxRulesConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesValidationError {
    /// The bracket table is empty.
    #[error("rules must define at least one tax bracket")]
    EmptyBrackets,

    /// The first bracket does not start at zero income.
    #[error("first tax bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// A bracket's upper edge is not above its lower edge.
    #[error("tax bracket starting at {min} has max_income {max} at or below its min_income")]
    BracketInverted { min: Decimal, max: Decimal },

    /// A bracket does not continue exactly where the previous one ended.
    #[error("tax bracket starting at {found} does not continue from {expected}")]
    BracketGap { expected: Decimal, found: Decimal },

    /// A bracket other than the last has no upper edge.
    #[error("only the last tax bracket may be unbounded")]
    UnboundedBracketNotLast,

    /// The last bracket has an upper edge.
    #[error("last tax bracket must be unbounded (max_income = null)")]
    LastBracketBounded,

    /// A rate lies outside the closed interval [0, 1].
    #[error("{field} rate {value} is outside [0, 1]")]
    RateOutOfRange { field: &'static str, value: Decimal },

    /// A cap or allowance amount is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

/// One marginal tax bracket. `max_income = None` means unbounded; only the
/// last bracket of a valid table is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentExpenseRule {
    /// Fraction of gross income deductible as employment expense.
    pub rate: Decimal,
    pub max_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAllowanceRule {
    pub amount_per_child: Decimal,
    /// Extra allowance per child born in 2561 BE (2018) or later.
    pub additional_from_2018: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCareRule {
    pub amount_per_parent: Decimal,
    /// Parents beyond this count are ignored, not an error.
    pub max_parents: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalAllowanceRules {
    pub self_amount: Decimal,
    pub spouse_amount: Decimal,
    pub child: ChildAllowanceRule,
    pub parent_care: ParentCareRule,
    pub disabled_amount_per_person: Decimal,
}

/// Caps for one retirement component. A missing cap falls back to the
/// statutory default the engine carries for that component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRule {
    #[serde(default)]
    pub percentage_of_income_cap: Option<Decimal>,
    #[serde(default)]
    pub individual_cap: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementComponentRules {
    pub provident_fund: ComponentRule,
    pub government_pension_fund: ComponentRule,
    pub rmf: ComponentRule,
    pub ssf: ComponentRule,
    pub pension_insurance: ComponentRule,
    pub nsf: ComponentRule,
}

/// Two-level retirement cap: the combined ceiling shared by all six
/// components, plus per-component rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementRules {
    /// Combined-cap percentage of eligible income.
    pub percentage_rate: Decimal,
    /// Combined-cap absolute ceiling.
    pub absolute_limit: Decimal,
    pub components: RetirementComponentRules,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeInsuranceRule {
    pub self_limit: Decimal,
    /// Spouse premium limit, counted only when the spouse has no income.
    pub spouse_limit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInsuranceRule {
    pub own_limit: Decimal,
    /// Ceiling shared with life insurance premiums.
    pub combined_with_life_limit: Decimal,
}

/// A single absolute cap with no interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCapRule {
    pub absolute_limit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDeductionRules {
    pub home_loan_interest: SimpleCapRule,
    pub easy_e_receipt: SimpleCapRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationDonationRule {
    /// Raw donations are multiplied by this before capping.
    pub multiplier: Decimal,
    pub max_percent_of_net_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralDonationRule {
    pub max_percent_of_net_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRules {
    pub education: EducationDonationRule,
    pub general: GeneralDonationRule,
    pub political_party: SimpleCapRule,
}

/// Every numeric policy parameter for one tax year.
///
/// Loaded from a versioned JSON document by the rules provider and treated
/// as read-only for the lifetime of a calculation session. Call
/// [`validate`](Self::validate) once after deserializing; the engine
/// assumes a validated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRulesConfig {
    /// Tax year in the Buddhist calendar (e.g. 2567 for CE 2024).
    pub tax_year: i32,
    pub employment_expense: EmploymentExpenseRule,
    pub personal_allowances: PersonalAllowanceRules,
    pub retirement: RetirementRules,
    pub life_insurance: LifeInsuranceRule,
    pub health_insurance: HealthInsuranceRule,
    pub parent_health_insurance: SimpleCapRule,
    pub social_security: SimpleCapRule,
    pub other_deductions: OtherDeductionRules,
    pub donations: DonationRules,
    pub tax_brackets: Vec<TaxBracket>,
}

impl TaxRulesConfig {
    /// Checks the invariants the engine relies on: a contiguous, ascending
    /// bracket table whose last bracket is unbounded, rates inside [0, 1],
    /// and non-negative caps and allowances.
    pub fn validate(&self) -> Result<(), RulesValidationError> {
        self.validate_brackets()?;
        self.validate_rates()?;
        self.validate_amounts()
    }

    fn validate_brackets(&self) -> Result<(), RulesValidationError> {
        let Some(first) = self.tax_brackets.first() else {
            return Err(RulesValidationError::EmptyBrackets);
        };
        if !first.min_income.is_zero() {
            return Err(RulesValidationError::FirstBracketNotZero(first.min_income));
        }

        let last_index = self.tax_brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;
        for (index, bracket) in self.tax_brackets.iter().enumerate() {
            if bracket.min_income != expected_min {
                return Err(RulesValidationError::BracketGap {
                    expected: expected_min,
                    found: bracket.min_income,
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(RulesValidationError::RateOutOfRange {
                    field: "tax bracket",
                    value: bracket.rate,
                });
            }
            match bracket.max_income {
                // A bounded final bracket would leave high incomes untaxed.
                Some(_) if index == last_index => {
                    return Err(RulesValidationError::LastBracketBounded);
                }
                Some(max) => {
                    if max <= bracket.min_income {
                        return Err(RulesValidationError::BracketInverted {
                            min: bracket.min_income,
                            max,
                        });
                    }
                    expected_min = max;
                }
                None if index == last_index => {}
                None => return Err(RulesValidationError::UnboundedBracketNotLast),
            }
        }
        Ok(())
    }

    fn validate_rates(&self) -> Result<(), RulesValidationError> {
        let mut rates = vec![
            ("employment expense", self.employment_expense.rate),
            ("retirement percentage", self.retirement.percentage_rate),
            (
                "education donation percent",
                self.donations.education.max_percent_of_net_income,
            ),
            (
                "general donation percent",
                self.donations.general.max_percent_of_net_income,
            ),
        ];
        let components = &self.retirement.components;
        for (field, rule) in [
            ("provident fund percentage cap", &components.provident_fund),
            (
                "government pension fund percentage cap",
                &components.government_pension_fund,
            ),
            ("RMF percentage cap", &components.rmf),
            ("SSF percentage cap", &components.ssf),
            (
                "pension insurance percentage cap",
                &components.pension_insurance,
            ),
            ("NSF percentage cap", &components.nsf),
        ] {
            if let Some(rate) = rule.percentage_of_income_cap {
                rates.push((field, rate));
            }
        }

        for (field, value) in rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(RulesValidationError::RateOutOfRange { field, value });
            }
        }
        Ok(())
    }

    fn validate_amounts(&self) -> Result<(), RulesValidationError> {
        let allowances = &self.personal_allowances;
        let mut amounts = vec![
            ("employment expense cap", self.employment_expense.max_amount),
            ("self allowance", allowances.self_amount),
            ("spouse allowance", allowances.spouse_amount),
            ("child allowance", allowances.child.amount_per_child),
            ("child 2018 bonus", allowances.child.additional_from_2018),
            (
                "parent care allowance",
                allowances.parent_care.amount_per_parent,
            ),
            (
                "disabled dependent allowance",
                allowances.disabled_amount_per_person,
            ),
            ("retirement absolute limit", self.retirement.absolute_limit),
            ("life insurance self limit", self.life_insurance.self_limit),
            (
                "life insurance spouse limit",
                self.life_insurance.spouse_limit,
            ),
            ("health insurance limit", self.health_insurance.own_limit),
            (
                "life and health combined limit",
                self.health_insurance.combined_with_life_limit,
            ),
            (
                "parent health insurance limit",
                self.parent_health_insurance.absolute_limit,
            ),
            ("social security limit", self.social_security.absolute_limit),
            (
                "home loan interest limit",
                self.other_deductions.home_loan_interest.absolute_limit,
            ),
            (
                "easy e-receipt limit",
                self.other_deductions.easy_e_receipt.absolute_limit,
            ),
            ("education donation multiplier", self.donations.education.multiplier),
            (
                "political donation limit",
                self.donations.political_party.absolute_limit,
            ),
        ];
        let components = &self.retirement.components;
        for (field, rule) in [
            ("provident fund individual cap", &components.provident_fund),
            (
                "government pension fund individual cap",
                &components.government_pension_fund,
            ),
            ("RMF individual cap", &components.rmf),
            ("SSF individual cap", &components.ssf),
            (
                "pension insurance individual cap",
                &components.pension_insurance,
            ),
            ("NSF individual cap", &components.nsf),
        ] {
            if let Some(cap) = rule.individual_cap {
                amounts.push((field, cap));
            }
        }

        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(RulesValidationError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::testing::rules_2567;

    #[test]
    fn validate_accepts_default_ruleset() {
        let rules = rules_2567();

        assert_eq!(rules.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_bracket_table() {
        let mut rules = rules_2567();
        rules.tax_brackets.clear();

        assert_eq!(rules.validate(), Err(RulesValidationError::EmptyBrackets));
    }

    #[test]
    fn validate_rejects_first_bracket_above_zero() {
        let mut rules = rules_2567();
        rules.tax_brackets[0].min_income = dec!(1000);

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::FirstBracketNotZero(dec!(1000)))
        );
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let mut rules = rules_2567();
        rules.tax_brackets[1].min_income = dec!(200000);

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::BracketGap {
                expected: dec!(150000),
                found: dec!(200000),
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_last_bracket() {
        let mut rules = rules_2567();
        let last = rules.tax_brackets.last_mut().unwrap();
        last.max_income = Some(dec!(10000000));

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::LastBracketBounded)
        );
    }

    #[test]
    fn validate_rejects_unbounded_bracket_in_the_middle() {
        let mut rules = rules_2567();
        rules.tax_brackets[2].max_income = None;

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::UnboundedBracketNotLast)
        );
    }

    #[test]
    fn validate_rejects_inverted_bracket() {
        let mut rules = rules_2567();
        rules.tax_brackets[1].max_income = Some(dec!(100000));

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::BracketInverted {
                min: dec!(150000),
                max: dec!(100000),
            })
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let mut rules = rules_2567();
        rules.retirement.percentage_rate = dec!(1.5);

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::RateOutOfRange {
                field: "retirement percentage",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_cap() {
        let mut rules = rules_2567();
        rules.social_security.absolute_limit = dec!(-1);

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::NegativeAmount {
                field: "social security limit",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_checks_optional_component_caps() {
        let mut rules = rules_2567();
        rules.retirement.components.ssf.percentage_of_income_cap = Some(dec!(2));

        assert_eq!(
            rules.validate(),
            Err(RulesValidationError::RateOutOfRange {
                field: "SSF percentage cap",
                value: dec!(2),
            })
        );
    }
}
