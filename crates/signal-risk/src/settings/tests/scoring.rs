use super::common::*;
use crate::settings::{
    assess, level_for, rules, score_all, ColorToken, RiskLevel, SettingKey, SettingValues,
};

#[test]
fn empty_settings_score_zero() {
    assert_eq!(score_all(&SettingValues::new()), 0);
    let rating = level_for(0);
    assert_eq!(rating.level, RiskLevel::Low);
    assert_eq!(rating.color, ColorToken::Green);
}

#[test]
fn level_bands_have_inclusive_upper_bounds() {
    let cases = [
        (50, RiskLevel::Low),
        (51, RiskLevel::Medium),
        (100, RiskLevel::Medium),
        (101, RiskLevel::High),
        (150, RiskLevel::High),
        (151, RiskLevel::Extreme),
        (10_000, RiskLevel::Extreme),
    ];
    for (score, level) in cases {
        assert_eq!(level_for(score).level, level, "score {score}");
    }
}

#[test]
fn levels_carry_their_color() {
    assert_eq!(level_for(75).color, ColorToken::Yellow);
    assert_eq!(level_for(120).color, ColorToken::Orange);
    assert_eq!(level_for(151).color, ColorToken::Red);
    assert!(RiskLevel::Low < RiskLevel::Medium && RiskLevel::High < RiskLevel::Extreme);
}

#[test]
fn wallets_and_fdv_scenario_scores_seventy() {
    let values = settings(&[("minWallets", 1.0), ("minFDV", 300_000.0)]);
    assert_eq!(score_all(&values), 70);
    assert_eq!(level_for(score_all(&values)).level, RiskLevel::Medium);
}

#[test]
fn score_ignores_entry_order() {
    let forward = settings(&[
        ("minWallets", 2.0),
        ("minLiquidity", 150_000.0),
        ("targetMultiplier", 1.05),
        ("btcDropThreshold", 75.0),
    ]);
    let reversed: SettingValues = forward
        .iter()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    assert_eq!(score_all(&forward), 40 + 15 + 30 + 45);
    assert_eq!(score_all(&forward), score_all(&reversed));
}

#[test]
fn unknown_and_acceptable_entries_add_nothing() {
    let values = settings(&[
        ("stopLossPercent", 1.0),
        ("minWallets", 5.0),
        ("maxTopHolders", 10.0),
    ]);
    assert_eq!(score_all(&values), 0);
}

#[test]
fn every_setting_at_super_low_is_extreme() {
    let values: SettingValues = rules()
        .iter()
        .map(|rule| (rule.setting.as_str(), rule.super_low.threshold))
        .collect();
    let expected: u32 = rules().iter().map(|rule| rule.risk_points.super_low).sum();

    assert_eq!(expected, 375);
    assert_eq!(score_all(&values), expected);
    assert_eq!(level_for(expected).level, RiskLevel::Extreme);
}

#[test]
fn assessment_matches_individual_operations() {
    let values = settings(&[
        ("minWallets", 1.0),
        ("unknown", 3.0),
        ("minFDV", 300_000.0),
        ("targetMultiplier", 2.0),
    ]);

    let assessment = assess(&values);

    assert_eq!(assessment.score, score_all(&values));
    assert_eq!(assessment.rating(), level_for(assessment.score));
    let flagged: Vec<SettingKey> = assessment
        .warnings
        .iter()
        .map(|warning| warning.setting)
        .collect();
    assert_eq!(flagged, [SettingKey::MinWallets, SettingKey::MinFdv]);
    assert_eq!(
        assessment
            .warnings
            .iter()
            .map(|warning| warning.risk_points)
            .sum::<u32>(),
        assessment.score
    );
}
