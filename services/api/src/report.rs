use clap::Args;
use signal_risk::error::AppError;
use signal_risk::settings::{assess, rules, RiskAssessment, SettingKey, SettingValues};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding an object of setting names to values
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Setting as NAME=VALUE; repeatable, applied after --settings
    #[arg(long, value_name = "NAME=VALUE")]
    pub(crate) set: Vec<String>,
    /// Print the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let values = collect_settings(args.settings.as_deref(), &args.set)?;
    let assessment = assess(&values);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        write_assessment(&mut io::stdout().lock(), &values, &assessment)?;
    }

    Ok(())
}

pub(crate) fn run_rules() -> Result<(), AppError> {
    write_rules(&mut io::stdout().lock())?;
    Ok(())
}

pub(crate) fn collect_settings(
    file: Option<&Path>,
    pairs: &[String],
) -> Result<SettingValues, AppError> {
    let mut values = match file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => SettingValues::new(),
    };

    values.merge(SettingValues::from_pairs(pairs)?);
    Ok(values)
}

pub(crate) fn write_assessment<W: Write>(
    out: &mut W,
    values: &SettingValues,
    assessment: &RiskAssessment,
) -> io::Result<()> {
    writeln!(out, "Settings risk assessment")?;
    writeln!(
        out,
        "Risk score: {} ({}, {})",
        assessment.score,
        assessment.level.label(),
        assessment.color.as_str()
    )?;

    if assessment.warnings.is_empty() {
        writeln!(out, "\nWarnings: none")?;
    } else {
        writeln!(out, "\nWarnings")?;
        for warning in &assessment.warnings {
            writeln!(
                out,
                "- [{}] {} = {} ({} band, +{} pts): {}",
                warning.severity.label(),
                warning.setting.label(),
                warning.value,
                warning.tier.label(),
                warning.risk_points,
                warning.message
            )?;
        }
    }

    if !assessment.recommendations.is_empty() {
        writeln!(out, "\nRecommendations")?;
        for recommendation in &assessment.recommendations {
            writeln!(out, "- {recommendation}")?;
        }
    }

    let ignored: Vec<&str> = values
        .iter()
        .map(|(name, _)| name)
        .filter(|name| SettingKey::from_name(name).is_none())
        .collect();
    if !ignored.is_empty() {
        writeln!(out, "\nIgnored (no rule): {}", ignored.join(", "))?;
    }

    Ok(())
}

pub(crate) fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Setting rules")?;

    for rule in rules() {
        writeln!(out, "\n{} ({})", rule.setting.label(), rule.setting)?;
        writeln!(
            out,
            "- <= {}: {} (+{} pts)",
            rule.super_low.threshold,
            rule.super_low.severity.label(),
            rule.risk_points.super_low
        )?;
        writeln!(
            out,
            "- <  {}: {} (+{} pts)",
            rule.low.threshold,
            rule.low.severity.label(),
            rule.risk_points.low
        )?;
        writeln!(
            out,
            "- >  {}: {} (+{} pts)",
            rule.high.threshold,
            rule.high.severity.label(),
            rule.risk_points.high
        )?;
        if let Some(recommendation) = rule.recommendation() {
            writeln!(out, "  {recommendation}")?;
        }
    }

    Ok(())
}
