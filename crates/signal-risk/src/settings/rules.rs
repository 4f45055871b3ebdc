use super::domain::{SettingKey, Severity, Tier, Warning};
use serde::Serialize;

/// One threshold of a setting rule with the warning it raises.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdBand {
    pub threshold: f64,
    pub message: &'static str,
    #[serde(rename = "type")]
    pub severity: Severity,
}

impl ThresholdBand {
    pub const fn warning(&self) -> Warning {
        Warning {
            message: self.message,
            severity: self.severity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPoints {
    pub super_low: u32,
    pub low: u32,
    pub high: u32,
}

/// Static risk rule for a single setting.
///
/// `super_low` and `low` are lower bounds; `high` is an upper bound. The high
/// threshold is not required to sit above the other two, and severities are
/// kept as authored even where they look inverted (`btcDropThreshold`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingRule {
    pub setting: SettingKey,
    pub super_low: ThresholdBand,
    pub low: ThresholdBand,
    pub high: ThresholdBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
    pub risk_points: RiskPoints,
}

impl SettingRule {
    /// Picks the band for `value`, checking super low, low, then high.
    ///
    /// Values equal to the low or high threshold fall in the acceptable band.
    /// NaN compares false everywhere and also lands there.
    pub fn band(&self, value: f64) -> Option<Tier> {
        if value <= self.super_low.threshold {
            Some(Tier::SuperLow)
        } else if value < self.low.threshold {
            Some(Tier::Low)
        } else if value > self.high.threshold {
            Some(Tier::High)
        } else {
            None
        }
    }

    pub const fn threshold(&self, tier: Tier) -> &ThresholdBand {
        match tier {
            Tier::SuperLow => &self.super_low,
            Tier::Low => &self.low,
            Tier::High => &self.high,
        }
    }

    pub const fn points(&self, tier: Tier) -> u32 {
        match tier {
            Tier::SuperLow => self.risk_points.super_low,
            Tier::Low => self.risk_points.low,
            Tier::High => self.risk_points.high,
        }
    }

    /// Recommendation text, treating an empty string as absent.
    pub fn recommendation(&self) -> Option<&'static str> {
        self.recommendation.filter(|text| !text.is_empty())
    }
}

impl SettingKey {
    pub fn rule(self) -> &'static SettingRule {
        &RULES[self as usize]
    }
}

/// Rules in `SettingKey::ordered()` order.
pub fn rules() -> &'static [SettingRule] {
    &RULES
}

pub fn rule_for(name: &str) -> Option<&'static SettingRule> {
    SettingKey::from_name(name).map(SettingKey::rule)
}

const fn band(threshold: f64, severity: Severity, message: &'static str) -> ThresholdBand {
    ThresholdBand {
        threshold,
        message,
        severity,
    }
}

const fn points(super_low: u32, low: u32, high: u32) -> RiskPoints {
    RiskPoints {
        super_low,
        low,
        high,
    }
}

static RULES: [SettingRule; 8] = [
    SettingRule {
        setting: SettingKey::MinWallets,
        super_low: band(
            1.0,
            Severity::Danger,
            "Too few wallets. A single wallet can trigger a signal, putting the whole stake at risk.",
        ),
        low: band(
            3.0,
            Severity::Warning,
            "Risky wallet count. Signals from a handful of wallets are easy to fake.",
        ),
        high: band(
            10.0,
            Severity::Info,
            "Requiring many wallets will filter out most early signals.",
        ),
        recommendation: Some(
            "Require at least 3-5 wallets so no single participant can trigger a signal.",
        ),
        risk_points: points(60, 40, 15),
    },
    SettingRule {
        setting: SettingKey::MinFdv,
        super_low: band(
            10_000.0,
            Severity::Danger,
            "Very low FDV. High likelihood of a scam or an illiquid token.",
        ),
        low: band(
            50_000.0,
            Severity::Warning,
            "FDV below 50,000 increases exposure to pump and dump schemes.",
        ),
        high: band(
            200_000.0,
            Severity::Info,
            "A high FDV floor limits the upside of new tokens.",
        ),
        recommendation: Some("Target an FDV of 50,000-200,000 to balance risk and return."),
        risk_points: points(50, 30, 10),
    },
    SettingRule {
        setting: SettingKey::MinPurchaseAmount,
        super_low: band(
            100.0,
            Severity::Danger,
            "Tiny purchase amount. Transaction fees will absorb any profit.",
        ),
        low: band(
            300.0,
            Severity::Warning,
            "Small purchases are more likely to suffer heavy slippage.",
        ),
        high: band(
            2_000.0,
            Severity::Info,
            "Large purchases move the price sharply and worsen the entry.",
        ),
        recommendation: Some("Use purchase amounts between 300 and 1,000 to limit price impact."),
        risk_points: points(45, 30, 20),
    },
    SettingRule {
        setting: SettingKey::MinLiquidity,
        super_low: band(
            5_000.0,
            Severity::Danger,
            "Extremely low liquidity. Tokens may be impossible to sell.",
        ),
        low: band(
            20_000.0,
            Severity::Warning,
            "Low liquidity increases the risk of price manipulation.",
        ),
        high: band(
            100_000.0,
            Severity::Info,
            "A very high liquidity floor excludes most new tokens.",
        ),
        recommendation: Some("Target a liquidity range of 20,000-50,000."),
        risk_points: points(50, 35, 15),
    },
    SettingRule {
        setting: SettingKey::MaxTopHolders,
        super_low: band(
            1.0,
            Severity::Danger,
            "Extremely high risk. One large holder can crash the price.",
        ),
        low: band(
            5.0,
            Severity::Warning,
            "Risky. A small number of holders makes manipulation more likely.",
        ),
        high: band(
            15.0,
            Severity::Info,
            "Many large holders make price moves harder to predict.",
        ),
        recommendation: Some("Keep the number of large holders between 5 and 10."),
        risk_points: points(70, 50, 20),
    },
    SettingRule {
        setting: SettingKey::TargetMultiplier,
        super_low: band(
            1.1,
            Severity::Danger,
            "Multiplier too low. The profit will not cover the risk.",
        ),
        low: band(
            1.5,
            Severity::Warning,
            "Minimal profit target. The risk is still high.",
        ),
        high: band(
            10.0,
            Severity::Info,
            "Multiplier too high. The target is unlikely to be reached.",
        ),
        recommendation: Some("A 2-4x target gives the best balance of risk and reward."),
        risk_points: points(30, 20, 40),
    },
    SettingRule {
        setting: SettingKey::InvestmentPerToken,
        super_low: band(
            100.0,
            Severity::Danger,
            "Investment too small. Fees will eat the profit.",
        ),
        low: band(
            500.0,
            Severity::Warning,
            "A low investment amount may cap the potential profit.",
        ),
        high: band(
            5_000.0,
            Severity::Info,
            "A high investment amount increases potential losses.",
        ),
        recommendation: Some("Invest 500-2,000 per token."),
        risk_points: points(40, 25, 35),
    },
    SettingRule {
        setting: SettingKey::BtcDropThreshold,
        super_low: band(
            20.0,
            Severity::Warning,
            "Stop threshold too low. Trading will halt frequently.",
        ),
        low: band(
            30.0,
            Severity::Info,
            "A low threshold may skip good trades.",
        ),
        high: band(
            70.0,
            Severity::Danger,
            "High threshold. Risk of serious losses during a sharp BTC drop.",
        ),
        recommendation: Some(
            "Use a threshold of 40-60% to balance safety and opportunity.",
        ),
        risk_points: points(30, 20, 45),
    },
];
