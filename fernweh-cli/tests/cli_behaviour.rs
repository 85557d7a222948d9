//! Behavioural coverage for catalog loading and report rendering.

use camino::Utf8PathBuf;
use clap::Parser;
use fernweh_cli::{Cli, CatalogError, build_profile, load_catalog, render_text};
use fernweh_scorer::{RecommendOptions, recommend};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"[
  {
    "id": "jeju",
    "name": "Jeju Island",
    "country": "South Korea",
    "region": "domestic",
    "traitProfile": {"sensory": 0.85, "flexibility": 0.7},
    "elementProfile": {"water": 0.6, "earth": 0.25},
    "bestMonths": [5, 6, 9, 10],
    "budgetLevel": 2,
    "safetyIndex": 0.9,
    "accessEase": 0.85,
    "groupEase": 0.8,
    "kidFriendly": true,
    "suitableFor": ["family", "couple"],
    "themes": ["nature", "beach"],
    "notes": ["Hallasan trails are quietest on weekday mornings."]
  },
  {
    "id": "kyoto",
    "name": "Kyoto",
    "country": "Japan",
    "region": "overseas",
    "traitProfile": {"culture": 0.95, "structure": 0.8},
    "elementProfile": {"wood": 0.5, "metal": 0.3},
    "bestMonths": [4, 11],
    "budgetLevel": 3,
    "languageEase": 0.55,
    "themes": ["history", "museum"],
    "notes": ["Temple gardens peak in April and November."]
  }
]"#;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("create temporary directory")
}

fn write_catalog(dir: &TempDir, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("catalog.json")).expect("utf8 path");
    std::fs::write(path.as_std_path(), contents).expect("write catalog fixture");
    path
}

#[rstest]
fn a_json_catalog_round_trips_into_recommendations(temp_dir: TempDir) {
    let path = write_catalog(&temp_dir, CATALOG_JSON);
    let catalog = load_catalog(&path).expect("catalog should parse");
    assert_eq!(catalog.len(), 2);

    let cli = Cli::try_parse_from([
        "fernweh",
        "--catalog",
        path.as_str(),
        "--code",
        "INFJ",
        "--month",
        "4",
    ])
    .expect("arguments should parse");
    let profile = build_profile(&cli).expect("profile should validate");
    let results = recommend(&profile, &catalog, &RecommendOptions::default());
    assert!(!results.is_empty());

    let report = render_text(&results, None);
    assert!(report.contains("Kyoto") || report.contains("Jeju Island"));
    assert!(report.contains("tier "));
}

#[rstest]
fn a_missing_catalog_is_a_read_error(temp_dir: TempDir) {
    let path =
        Utf8PathBuf::from_path_buf(temp_dir.path().join("absent.json")).expect("utf8 path");
    let err = load_catalog(&path).expect_err("missing file should fail");
    assert!(matches!(err, CatalogError::Read { .. }));
}

#[rstest]
fn a_malformed_catalog_is_a_parse_error(temp_dir: TempDir) {
    let path = write_catalog(&temp_dir, "{ not json ]");
    let err = load_catalog(&path).expect_err("malformed file should fail");
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[rstest]
fn catalog_entries_keep_their_companion_signals(temp_dir: TempDir) {
    let path = write_catalog(&temp_dir, CATALOG_JSON);
    let catalog = load_catalog(&path).expect("catalog should parse");
    let jeju = catalog
        .iter()
        .find(|destination| destination.id == "jeju")
        .expect("jeju present");
    assert_eq!(jeju.kid_friendly, Some(true));
    assert_eq!(jeju.safety_index, Some(0.9));
    assert_eq!(
        jeju.suitable_for.as_deref().map(<[_]>::len),
        Some(2)
    );
}
