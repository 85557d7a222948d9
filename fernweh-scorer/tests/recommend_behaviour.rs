//! Behavioural coverage for the end-to-end recommendation pipeline.

use chrono::NaiveDate;
use fernweh_core::{
    CompanionType, Destination, PersonalityCode, Region, RegionFilter, Trait, UserProfile,
};
use fernweh_scorer::{RankedResult, RecommendOptions, Tier, recommend};
use rstest::rstest;

fn scored_entry(id: &str, country: &str, region: Region, budget: u8) -> Destination {
    Destination::new(id, id.to_uppercase(), country, region, budget)
        .with_trait(Trait::Culture, 0.8)
        .with_trait(Trait::Novelty, 0.7)
        .with_trait(Trait::Structure, 0.5)
}

fn score_of<'a>(results: &'a [RankedResult], id: &str) -> &'a RankedResult {
    results
        .iter()
        .find(|result| result.destination.id == id)
        .unwrap_or_else(|| panic!("{id} missing from results"))
}

#[rstest]
fn scenario_a_personality_only_profile_flags_the_missing_birth_date() {
    let catalog = vec![
        scored_entry("jeonju", "South Korea", Region::Domestic, 2),
        scored_entry("taipei", "Taiwan", Region::Overseas, 2),
        scored_entry("zurich", "Switzerland", Region::Overseas, 5),
    ];
    let profile = UserProfile::new(PersonalityCode::Intp)
        .with_companions(CompanionType::Solo)
        .with_budget_level(2)
        .with_travel_month(10);

    let results = recommend(&profile, &catalog, &RecommendOptions::default());

    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.destination.budget_level, 2);
        assert!(
            result
                .explanation
                .notes
                .iter()
                .any(|note| note.starts_with("No birth date")),
            "{} lacks the no-birth-date indicator",
            result.destination.id
        );
        assert!(
            !result
                .explanation
                .notes
                .iter()
                .any(|note| note.starts_with("Birth time")),
            "{} wrongly flags an unknown birth time",
            result.destination.id
        );
    }
}

#[rstest]
fn scenario_b_the_matching_month_outranks_the_adjacent_month() {
    let catalog = vec![
        scored_entry("april", "Aprilia", Region::Overseas, 2).with_best_months([4]),
        scored_entry("may", "Maytown", Region::Overseas, 2).with_best_months([5]),
    ];
    let profile = UserProfile::new(PersonalityCode::Infj).with_travel_month(4);

    let results = recommend(&profile, &catalog, &RecommendOptions::default());

    let april = score_of(&results, "april");
    let may = score_of(&results, "may");
    assert!(april.score > may.score);
    assert!(may.score > 0.0);
}

#[rstest]
fn scenario_c_an_unmatchable_budget_still_yields_results() {
    let catalog = vec![
        scored_entry("mid", "Midland", Region::Overseas, 3),
        scored_entry("low", "Lowland", Region::Overseas, 2),
    ];
    let profile = UserProfile::new(PersonalityCode::Estj).with_budget_level(5);

    let results = recommend(&profile, &catalog, &RecommendOptions::default());

    assert!(!results.is_empty(), "the budget cascade should engage");
}

#[rstest]
fn identical_requests_return_identical_results() {
    let catalog = vec![
        scored_entry("a", "Aland", Region::Domestic, 2).with_best_months([3, 4]),
        scored_entry("b", "Bland", Region::Overseas, 2),
        scored_entry("c", "Cland", Region::Overseas, 3),
    ];
    let profile = UserProfile::new(PersonalityCode::Enfp)
        .with_companions(CompanionType::Friends)
        .with_travel_month(4)
        .with_birth_date(NaiveDate::from_ymd_opt(1991, 8, 23).unwrap())
        .with_birth_time("21:15");

    let options = RecommendOptions::default();
    let first = recommend(&profile, &catalog, &options);
    let second = recommend(&profile, &catalog, &options);
    assert_eq!(first, second);
}

#[rstest]
fn the_top_result_is_tier_s_with_full_closeness() {
    let catalog = vec![
        scored_entry("a", "Aland", Region::Domestic, 2),
        scored_entry("b", "Bland", Region::Domestic, 2),
    ];
    let profile = UserProfile::new(PersonalityCode::Isfp);
    let results = recommend(&profile, &catalog, &RecommendOptions::default());
    let leader = results.first().unwrap();
    assert_eq!(leader.tier, Tier::S);
    assert!((leader.closeness - 1.0).abs() < 1e-6);
}

#[rstest]
fn crowded_countries_are_held_back_from_domination() {
    // jitter off isolates the country-concentration penalty.
    let mut options = RecommendOptions::default();
    options.config.rerank.jitter = 0.0;

    let mut catalog = vec![scored_entry("unique", "Soloview", Region::Overseas, 2)];
    for index in 0..4 {
        catalog.push(scored_entry(
            &format!("crowd{index}"),
            "Bigland",
            Region::Overseas,
            2,
        ));
    }
    let profile = UserProfile::new(PersonalityCode::Entp);

    let results = recommend(&profile, &catalog, &options);

    let unique = score_of(&results, "unique");
    let crowded = score_of(&results, "crowd0");
    assert!(unique.score > crowded.score);
    assert_eq!(results.first().unwrap().destination.id, "unique");
}

#[rstest]
fn a_birth_date_changes_the_ranking_inputs() {
    let catalog = vec![
        scored_entry("wooded", "Aland", Region::Overseas, 2)
            .with_element(fernweh_core::Element::Wood, 0.9),
        scored_entry("metallic", "Bland", Region::Overseas, 2)
            .with_element(fernweh_core::Element::Metal, 0.9),
    ];
    let undated = UserProfile::new(PersonalityCode::Intj);
    // early 1984 weights wood heavily (jia year, yin month branch).
    let dated = UserProfile::new(PersonalityCode::Intj)
        .with_birth_date(NaiveDate::from_ymd_opt(1984, 2, 15).unwrap());

    let options = RecommendOptions::default();
    let neutral = recommend(&undated, &catalog, &options);
    let personalised = recommend(&dated, &catalog, &options);

    let neutral_gap =
        score_of(&neutral, "wooded").score - score_of(&neutral, "metallic").score;
    let personalised_gap =
        score_of(&personalised, "wooded").score - score_of(&personalised, "metallic").score;
    assert!(
        personalised_gap > neutral_gap,
        "the element term should pull the wood-heavy destination up"
    );
}

#[rstest]
fn region_filter_restricts_results() {
    let catalog = vec![
        scored_entry("home", "Homeland", Region::Domestic, 2),
        scored_entry("away", "Awayland", Region::Overseas, 2),
    ];
    let profile = UserProfile::new(PersonalityCode::Istj).with_region(RegionFilter::Domestic);
    let results = recommend(&profile, &catalog, &RecommendOptions::default());
    assert!(results.iter().all(|r| r.destination.region == Region::Domestic));
}
