use super::domain::{ColorToken, RiskLevel, RiskRating, SettingKey, Severity, Tier, Warning};
use super::rules::rule_for;
use super::values::SettingValues;
use serde::Serialize;

/// Scores at or below this are `Low` and never surface recommendations.
pub const LOW_RISK_CEILING: u32 = 50;
pub const MEDIUM_RISK_CEILING: u32 = 100;
pub const HIGH_RISK_CEILING: u32 = 150;

/// Tier selected for a named setting; `None` for unknown names or the acceptable band.
pub fn band(setting: &str, value: f64) -> Option<Tier> {
    rule_for(setting)?.band(value)
}

/// Warning to show next to a setting, if any.
pub fn classify(setting: &str, value: f64) -> Option<Warning> {
    let rule = rule_for(setting)?;
    rule.band(value).map(|tier| rule.threshold(tier).warning())
}

/// Sum of the risk points triggered across all known settings.
pub fn score_all(settings: &SettingValues) -> u32 {
    settings
        .iter()
        .filter_map(|(name, value)| {
            let rule = rule_for(name)?;
            rule.band(value).map(|tier| rule.points(tier))
        })
        .sum()
}

pub fn level_for(score: u32) -> RiskRating {
    let level = if score <= LOW_RISK_CEILING {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_CEILING {
        RiskLevel::Medium
    } else if score <= HIGH_RISK_CEILING {
        RiskLevel::High
    } else {
        RiskLevel::Extreme
    };

    RiskRating {
        level,
        color: level.color(),
    }
}

/// Recommendations for settings in a danger or warning band, in input order.
///
/// Empty while the total score stays in the `Low` level. Identical texts are
/// not collapsed.
pub fn recommendations_for(settings: &SettingValues) -> Vec<&'static str> {
    if score_all(settings) <= LOW_RISK_CEILING {
        return Vec::new();
    }

    settings
        .iter()
        .filter_map(|(name, value)| {
            let recommendation = rule_for(name)?.recommendation()?;
            let warning = classify(name, value)?;
            warning
                .severity
                .is_actionable()
                .then_some(recommendation)
        })
        .collect()
}

/// A triggered rule for one setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingWarning {
    pub setting: SettingKey,
    pub value: f64,
    pub tier: Tier,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: &'static str,
    pub risk_points: u32,
}

/// Everything the settings panel renders for one set of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub warnings: Vec<SettingWarning>,
    pub score: u32,
    pub level: RiskLevel,
    pub color: ColorToken,
    pub recommendations: Vec<&'static str>,
}

impl RiskAssessment {
    pub fn rating(&self) -> RiskRating {
        RiskRating {
            level: self.level,
            color: self.color,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn assess(settings: &SettingValues) -> RiskAssessment {
    let warnings: Vec<SettingWarning> = settings
        .iter()
        .filter_map(|(name, value)| {
            let key = SettingKey::from_name(name)?;
            let rule = key.rule();
            let tier = rule.band(value)?;
            let threshold = rule.threshold(tier);
            Some(SettingWarning {
                setting: key,
                value,
                tier,
                severity: threshold.severity,
                message: threshold.message,
                risk_points: rule.points(tier),
            })
        })
        .collect();

    let score = warnings.iter().map(|warning| warning.risk_points).sum();
    let RiskRating { level, color } = level_for(score);

    RiskAssessment {
        warnings,
        score,
        level,
        color,
        recommendations: recommendations_for(settings),
    }
}
