//! Calculation modules for the Thai personal income tax engine.
//!
//! Leaf-first: [`common`] holds shared numeric helpers; the bucket modules
//! ([`allowances`], [`retirement`], [`insurance`], [`other_deductions`],
//! [`donations`]) are independent pure functions; [`brackets`] applies the
//! progressive schedule; [`engine`] sequences the pipeline; [`optimizer`]
//! re-invokes the engine to price a suggested retirement allocation.

pub mod allowances;
pub mod brackets;
pub mod common;
pub mod donations;
pub mod engine;
pub mod income;
pub mod insurance;
pub mod optimizer;
pub mod other_deductions;
pub mod retirement;

pub use brackets::{ProgressiveSchedule, ProgressiveTaxResult};
pub use engine::calculate_tax;
pub use optimizer::{MaximizeBenefit, TaxImpact, calculate_maximize_benefit, compare_scenarios};
