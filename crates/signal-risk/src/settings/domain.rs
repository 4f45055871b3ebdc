use serde::Serialize;
use std::fmt;

/// Adjustable parameters of the signal bot that carry a risk rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SettingKey {
    #[serde(rename = "minWallets")]
    MinWallets,
    #[serde(rename = "minFDV")]
    MinFdv,
    #[serde(rename = "minPurchaseAmount")]
    MinPurchaseAmount,
    #[serde(rename = "minLiquidity")]
    MinLiquidity,
    #[serde(rename = "maxTopHolders")]
    MaxTopHolders,
    #[serde(rename = "targetMultiplier")]
    TargetMultiplier,
    #[serde(rename = "investmentPerToken")]
    InvestmentPerToken,
    #[serde(rename = "btcDropThreshold")]
    BtcDropThreshold,
}

impl SettingKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::MinWallets,
            Self::MinFdv,
            Self::MinPurchaseAmount,
            Self::MinLiquidity,
            Self::MaxTopHolders,
            Self::TargetMultiplier,
            Self::InvestmentPerToken,
            Self::BtcDropThreshold,
        ]
    }

    /// Identifier used by the settings form and JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinWallets => "minWallets",
            Self::MinFdv => "minFDV",
            Self::MinPurchaseAmount => "minPurchaseAmount",
            Self::MinLiquidity => "minLiquidity",
            Self::MaxTopHolders => "maxTopHolders",
            Self::TargetMultiplier => "targetMultiplier",
            Self::InvestmentPerToken => "investmentPerToken",
            Self::BtcDropThreshold => "btcDropThreshold",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinWallets => "Minimum wallets",
            Self::MinFdv => "Minimum FDV",
            Self::MinPurchaseAmount => "Minimum purchase amount",
            Self::MinLiquidity => "Minimum liquidity",
            Self::MaxTopHolders => "Maximum top holders",
            Self::TargetMultiplier => "Target multiplier",
            Self::InvestmentPerToken => "Investment per token",
            Self::BtcDropThreshold => "BTC drop threshold",
        }
    }

    /// Exact, case-sensitive lookup. Unknown names have no rule.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How loudly the form should surface a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Danger and warning severities surface recommendations; info does not.
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::Danger | Self::Warning)
    }
}

/// Threshold band a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    SuperLow,
    Low,
    High,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SuperLow => "super low",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// Message shown next to a setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: &'static str,
    #[serde(rename = "type")]
    pub severity: Severity,
}

/// Ordered classification of an aggregate risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }

    /// Semantic display color; the UI maps it to its own palette.
    pub const fn color(self) -> ColorToken {
        match self {
            Self::Low => ColorToken::Green,
            Self::Medium => ColorToken::Yellow,
            Self::High => ColorToken::Orange,
            Self::Extreme => ColorToken::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

/// Result of `level_for`: the level plus its color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskRating {
    pub level: RiskLevel,
    pub color: ColorToken,
}
