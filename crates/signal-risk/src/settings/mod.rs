//! Risk scoring for the signal bot settings panel.
//!
//! Each known setting has a static rule with three threshold bands. A value is
//! classified by checking the super low band, then the low band, then the high
//! band; anything else is acceptable. Triggered bands produce a warning and a
//! number of risk points, the points add up to a score, and the score maps to
//! a [`RiskLevel`]. Everything here is pure and safe to call from any thread.

mod domain;
mod evaluation;
mod rules;
mod values;

#[cfg(test)]
mod tests;

pub use domain::{ColorToken, RiskLevel, RiskRating, SettingKey, Severity, Tier, Warning};
pub use evaluation::{
    assess, band, classify, level_for, recommendations_for, score_all, RiskAssessment,
    SettingWarning, HIGH_RISK_CEILING, LOW_RISK_CEILING, MEDIUM_RISK_CEILING,
};
pub use rules::{rule_for, rules, RiskPoints, SettingRule, ThresholdBand};
pub use values::{SettingInputError, SettingValues};
