use super::common::*;
use crate::workflows::matching::domain::{CareerDomain, CareerPhase, JobType, RawProfile};
use crate::workflows::matching::intent::{normalize_location, IntentNormalizer};

fn normalizer() -> IntentNormalizer {
    IntentNormalizer::with_today(today())
}

#[test]
fn interests_map_to_canonical_domains() {
    let mut profile = finance_raw_profile();
    profile.career_interests = vec![
        "Investment Banking".to_string(),
        "Software Engineering".to_string(),
        "underwater basket weaving".to_string(),
    ];

    let contract = normalizer().normalize(&profile);

    assert!(contract.career_domains.contains(&CareerDomain::FinanceBanking));
    assert!(contract.career_domains.contains(&CareerDomain::Technology));
    assert_eq!(contract.career_domains.len(), 2);
}

#[test]
fn major_infers_domain_when_interests_are_empty() {
    let mut profile = finance_raw_profile();
    profile.career_interests.clear();
    profile.major = Some("Computer Science".to_string());

    let contract = normalizer().normalize(&profile);

    assert!(contract.career_domains.contains(&CareerDomain::Technology));
}

#[test]
fn location_aliases_normalize_to_city_state() {
    assert_eq!(
        normalize_location("NYC").expect("maps").as_str(),
        "New York, NY"
    );
    assert_eq!(
        normalize_location("sf").expect("maps").as_str(),
        "San Francisco, CA"
    );
    assert_eq!(
        normalize_location("Columbus, OH").expect("passes through").as_str(),
        "Columbus, OH"
    );
    assert!(normalize_location("   ").is_none());
}

#[test]
fn nyc_round_trips_to_display_form() {
    let normalized = normalize_location("NYC").expect("maps");
    assert_eq!(normalized.to_string(), "New York, NY");
}

#[test]
fn job_type_synonyms_fold_and_dedupe() {
    let mut profile = finance_raw_profile();
    profile.job_types = vec![
        "Intern".to_string(),
        "Summer Analyst".to_string(),
        "Co-op".to_string(),
        "New Grad".to_string(),
    ];

    let contract = normalizer().normalize(&profile);

    assert!(contract.job_types.contains(&JobType::Internship));
    assert!(contract.job_types.contains(&JobType::FullTime));
    assert_eq!(contract.job_types.len(), 2);
}

#[test]
fn graduation_defaults_fill_missing_year_and_month() {
    let contract = normalizer().normalize(&RawProfile::default());

    // Missing year assumes next year; missing month assumes May.
    assert_eq!(contract.graduation.year, 2027);
    assert_eq!(contract.graduation.month, 5);
    assert_eq!(contract.graduation.months_until_graduation, 9);
    assert_eq!(contract.graduation.career_phase, CareerPhase::Internship);
}

#[test]
fn career_phase_follows_months_until_graduation() {
    let mut profile = finance_raw_profile();

    profile.graduation_year = Some(2026);
    profile.graduation_month = Some(9);
    let contract = normalizer().normalize(&profile);
    assert_eq!(contract.graduation.months_until_graduation, 1);
    assert_eq!(contract.graduation.career_phase, CareerPhase::NewGrad);

    profile.graduation_month = Some(5);
    let contract = normalizer().normalize(&profile);
    assert_eq!(contract.graduation.months_until_graduation, -3);
    assert_eq!(contract.graduation.career_phase, CareerPhase::Graduated);
}

#[test]
fn empty_profile_yields_best_effort_contract() {
    let contract = normalizer().normalize(&RawProfile::default());

    assert!(contract.career_domains.is_empty());
    assert!(contract.preferred_locations.is_empty());
    assert!(contract.job_types.is_empty());
    assert!(!contract.resume_present);
}
