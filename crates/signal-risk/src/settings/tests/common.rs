use crate::settings::{SettingRule, SettingValues};

pub(super) fn settings(pairs: &[(&str, f64)]) -> SettingValues {
    pairs.iter().map(|(name, value)| (*name, *value)).collect()
}

/// A value strictly inside the low band of `rule`.
pub(super) fn inside_low_band(rule: &SettingRule) -> f64 {
    (rule.super_low.threshold + rule.low.threshold) / 2.0
}

/// A value strictly inside the acceptable band of `rule`.
pub(super) fn inside_acceptable_band(rule: &SettingRule) -> f64 {
    (rule.low.threshold + rule.high.threshold) / 2.0
}

pub(super) fn recommendation(rule: &SettingRule) -> &'static str {
    rule.recommendation().expect("rule carries a recommendation")
}
