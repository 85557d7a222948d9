//! Command-line front end for the Fernweh recommendation engine.
//!
//! From the core's point of view this crate is the upstream request layer:
//! it validates raw flag input into a well-formed
//! [`UserProfile`](fernweh_core::UserProfile) — rejecting out-of-range months
//! and budgets, malformed dates and times, and unknown enum values — loads
//! the destination catalog from a JSON file, and renders the ranked results
//! as a text report or JSON. The scorer itself never re-validates.

#![forbid(unsafe_code)]

use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use eyre::{Result, WrapErr, eyre};
use serde::Serialize;
use thiserror::Error;

use fernweh_core::{CompanionType, Destination, PersonalityCode, RegionFilter, UserProfile};
use fernweh_scorer::{
    PersonalizationContext, RankedResult, RecommendOptions, parse_birth_time,
    personalization_context, recommend,
};

/// Command-line arguments for the `fernweh` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fernweh",
    version,
    about = "Rank travel destinations for a personality profile"
)]
pub struct Cli {
    /// Path to the destination catalog (a JSON array).
    #[arg(long, value_name = "FILE")]
    pub catalog: Utf8PathBuf,
    /// Four-letter personality code, e.g. INTP.
    #[arg(long, value_name = "CODE")]
    pub code: String,
    /// Planned travel month (1-12).
    #[arg(long, value_name = "MONTH")]
    pub month: Option<u32>,
    /// Budget level, 1 (shoestring) to 5 (premium).
    #[arg(long, value_name = "LEVEL")]
    pub budget: Option<u8>,
    /// Travel companions: solo, couple, friends, or family.
    #[arg(long, value_name = "WHO")]
    pub companions: Option<String>,
    /// Region restriction: all, domestic, or overseas.
    #[arg(long, default_value = "all", value_name = "REGION")]
    pub region: String,
    /// Birth date (YYYY-MM-DD) enabling the element estimate.
    #[arg(long, value_name = "DATE")]
    pub birth_date: Option<String>,
    /// Birth time (HH:MM, 24-hour) refining the element estimate.
    #[arg(long, value_name = "TIME")]
    pub birth_time: Option<String>,
    /// Maximum number of recommendations to print.
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub limit: usize,
    /// Print the personalization context before the results.
    #[arg(long)]
    pub show_context: bool,
    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Errors raised while loading the destination catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog at {path}")]
    Read {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog was not a valid JSON destination array.
    #[error("failed to parse catalog at {path}")]
    Parse {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize)]
struct JsonReport<'a> {
    context: Option<&'a PersonalizationContext>,
    results: &'a [RankedResult],
}

/// Parse the command line, run the pipeline, and print the report.
///
/// # Errors
/// Returns an error report for unreadable or malformed catalogs and for any
/// profile flag the validation rules reject.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    drop(env_logger::try_init());

    let catalog = load_catalog(&cli.catalog)?;
    log::info!("loaded {} destinations from {}", catalog.len(), cli.catalog);
    let profile = build_profile(&cli)?;

    let options = RecommendOptions {
        limit: cli.limit,
        ..RecommendOptions::default()
    };
    let results = recommend(&profile, &catalog, &options);
    let context = cli
        .show_context
        .then(|| personalization_context(&profile));

    let report = if cli.json {
        render_json(&results, context.as_ref())?
    } else {
        render_text(&results, context.as_ref())
    };
    emit(&report);
    Ok(())
}

/// Load and parse a JSON destination catalog.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read or parsed.
pub fn load_catalog(path: &Utf8Path) -> Result<Vec<Destination>, CatalogError> {
    let raw = std::fs::read_to_string(path.as_std_path()).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate raw flag input into a well-formed profile.
///
/// The scorer assumes a structurally valid profile and does not re-validate,
/// so everything suspect is rejected here.
///
/// # Errors
/// Returns an error for unknown personality codes, out-of-range months or
/// budgets, unknown companion or region values, and malformed dates or times.
pub fn build_profile(cli: &Cli) -> Result<UserProfile> {
    let code = PersonalityCode::from_str(&cli.code)
        .wrap_err("the personality code must be one of the sixteen four-letter codes")?;
    let mut profile = UserProfile::new(code);

    if let Some(month) = cli.month {
        if !(1..=12).contains(&month) {
            return Err(eyre!("travel month must be between 1 and 12, got {month}"));
        }
        profile.travel_month = Some(month);
    }
    if let Some(budget) = cli.budget {
        if !(1..=5).contains(&budget) {
            return Err(eyre!("budget level must be between 1 and 5, got {budget}"));
        }
        profile.budget_level = Some(budget);
    }
    if let Some(companions) = &cli.companions {
        profile.companions =
            Some(CompanionType::from_str(companions).map_err(|message| eyre!(message))?);
    }
    profile.region = RegionFilter::from_str(&cli.region).map_err(|message| eyre!(message))?;

    if let Some(date) = &cli.birth_date {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .wrap_err_with(|| format!("birth date '{date}' must be YYYY-MM-DD"))?;
        profile.birth_date = Some(parsed);
    }
    if let Some(time) = &cli.birth_time {
        if parse_birth_time(time).is_none() {
            return Err(eyre!("birth time '{time}' must be HH:MM on a 24-hour clock"));
        }
        profile.birth_time = Some(time.clone());
    }

    Ok(profile)
}

/// Render the ranked results as a plain-text report.
#[must_use]
pub fn render_text(results: &[RankedResult], context: Option<&PersonalizationContext>) -> String {
    let mut out = String::new();
    if let Some(ctx) = context {
        render_context(&mut out, ctx);
    }
    if results.is_empty() {
        out.push_str("No destinations matched the request.\n");
        return out;
    }
    for (index, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "{rank}. {name} ({country}) — tier {tier}, score {score:.3}, share {share:.1}%, top {percentile}%\n",
            rank = index + 1,
            name = result.destination.name,
            country = result.destination.country,
            tier = result.tier,
            score = result.score,
            share = result.share * 100.0,
            percentile = result.percentile,
        ));
        if !result.destination.themes.is_empty() {
            let themes: Vec<&str> = result
                .destination
                .themes
                .iter()
                .map(|theme| theme.as_str())
                .collect();
            out.push_str(&format!("   themes: {}\n", themes.join(", ")));
        }
        for note in &result.explanation.notes {
            out.push_str(&format!("   - {note}\n"));
        }
    }
    out
}

fn render_json(
    results: &[RankedResult],
    context: Option<&PersonalizationContext>,
) -> Result<String> {
    let report = JsonReport { context, results };
    serde_json::to_string_pretty(&report).wrap_err("failed to serialise the report")
}

fn render_context(out: &mut String, context: &PersonalizationContext) {
    out.push_str("Personalization context\n");
    let traits: Vec<String> = context
        .traits
        .iter()
        .map(|(axis, weight)| format!("{axis} {weight:.2}"))
        .collect();
    out.push_str(&format!("  traits: {}\n", traits.join(", ")));
    let elements: Vec<String> = context
        .elements
        .iter()
        .map(|(element, weight)| format!("{element} {weight:.2}"))
        .collect();
    out.push_str(&format!("  elements: {}\n", elements.join(", ")));
    out.push_str(&format!(
        "  pillars: year {}, month {}, hour {}\n",
        label(context.pillars.year),
        label(context.pillars.month),
        label(context.pillars.hour_branch),
    ));
}

/// Render an optional pillar label with the `unknown` sentinel.
fn label<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_owned(), |pillar| pillar.to_string())
}

#[expect(clippy::print_stdout, reason = "rendering command output is the CLI's job")]
fn emit(report: &str) {
    println!("{report}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cli(extra: &[&str]) -> Cli {
        let mut argv = vec!["fernweh", "--catalog", "catalog.json", "--code", "INTP"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[rstest]
    fn minimal_arguments_build_a_profile() {
        let profile = build_profile(&cli(&[])).unwrap();
        assert_eq!(profile.code, PersonalityCode::Intp);
        assert_eq!(profile.region, RegionFilter::All);
        assert_eq!(profile.travel_month, None);
    }

    #[rstest]
    fn unknown_codes_are_rejected() {
        let mut args = cli(&[]);
        args.code = "ABCD".to_owned();
        assert!(build_profile(&args).is_err());
    }

    #[rstest]
    #[case(&["--month", "0"])]
    #[case(&["--month", "13"])]
    #[case(&["--budget", "0"])]
    #[case(&["--budget", "6"])]
    #[case(&["--companions", "pets"])]
    #[case(&["--region", "space"])]
    #[case(&["--birth-date", "not-a-date"])]
    #[case(&["--birth-time", "9:30"])]
    #[case(&["--birth-time", "25:00"])]
    fn out_of_range_input_is_rejected(#[case] extra: &[&str]) {
        assert!(build_profile(&cli(extra)).is_err());
    }

    #[rstest]
    fn full_arguments_build_the_expected_profile() {
        let profile = build_profile(&cli(&[
            "--month",
            "10",
            "--budget",
            "2",
            "--companions",
            "solo",
            "--region",
            "overseas",
            "--birth-date",
            "1993-04-16",
            "--birth-time",
            "07:30",
        ]))
        .unwrap();
        assert_eq!(profile.travel_month, Some(10));
        assert_eq!(profile.budget_level, Some(2));
        assert_eq!(profile.companions, Some(CompanionType::Solo));
        assert_eq!(profile.region, RegionFilter::Overseas);
        assert_eq!(
            profile.birth_date,
            NaiveDate::from_ymd_opt(1993, 4, 16)
        );
        assert_eq!(profile.birth_time.as_deref(), Some("07:30"));
    }

    #[rstest]
    fn empty_results_render_a_friendly_message() {
        let report = render_text(&[], None);
        assert!(report.contains("No destinations matched"));
    }

    #[rstest]
    fn context_renders_unknown_pillars() {
        let profile = UserProfile::new(PersonalityCode::Intp);
        let context = personalization_context(&profile);
        let report = render_text(&[], Some(&context));
        assert!(report.contains("year unknown"));
        assert!(report.contains("hour unknown"));
    }
}
