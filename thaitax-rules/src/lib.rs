//! Year-keyed rules provider for the Thai tax engine.
//!
//! Each tax year ships as a versioned JSON document under `rules/`
//! (`TH-<year>.json`), embedded into the binary at compile time. Loading
//! deserializes the document into a [`TaxRulesConfig`] and validates it
//! once; the engine then treats the configuration as read-only.
//!
//! A missing year is a hard error that names the requested year and the
//! years actually available — the provider never silently falls back to
//! a different year.

use thaitax_core::models::{RulesValidationError, TaxRulesConfig};
use thiserror::Error;
use tracing::debug;

const TH_2567: &str = include_str!("../rules/TH-2567.json");

/// Embedded rules documents, keyed by Buddhist-calendar tax year.
const DOCUMENTS: &[(i32, &str)] = &[(2567, TH_2567)];

/// Errors raised while loading a rules document.
#[derive(Debug, Error)]
pub enum RulesError {
    /// No rules document exists for the requested year.
    #[error("tax rules for year {year} not found (available years: {available:?})")]
    YearNotFound { year: i32, available: Vec<i32> },

    /// The document is not valid JSON for the rules schema.
    #[error("rules document for year {year} is malformed")]
    Malformed {
        year: i32,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but violates a rules invariant.
    #[error("rules document for year {year} is invalid")]
    Invalid {
        year: i32,
        #[source]
        source: RulesValidationError,
    },

    /// The document's own tax_year disagrees with the year it is keyed by.
    #[error("rules document keyed {expected} declares tax_year {found}")]
    YearMismatch { expected: i32, found: i32 },
}

/// Tax years with an embedded ruleset, newest first.
pub fn available_years() -> Vec<i32> {
    let mut years: Vec<i32> = DOCUMENTS.iter().map(|(year, _)| *year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}

/// The most recent tax year with an embedded ruleset.
pub fn latest_year() -> i32 {
    DOCUMENTS
        .iter()
        .fold(i32::MIN, |latest, (year, _)| latest.max(*year))
}

/// Loads and validates the rules for one tax year.
pub fn load_rules(year: i32) -> Result<TaxRulesConfig, RulesError> {
    let (_, document) = DOCUMENTS
        .iter()
        .find(|(candidate, _)| *candidate == year)
        .ok_or_else(|| RulesError::YearNotFound {
            year,
            available: available_years(),
        })?;

    let rules: TaxRulesConfig =
        serde_json::from_str(document).map_err(|source| RulesError::Malformed { year, source })?;

    if rules.tax_year != year {
        return Err(RulesError::YearMismatch {
            expected: year,
            found: rules.tax_year,
        });
    }
    rules
        .validate()
        .map_err(|source| RulesError::Invalid { year, source })?;

    debug!(year, "loaded tax rules");
    Ok(rules)
}
