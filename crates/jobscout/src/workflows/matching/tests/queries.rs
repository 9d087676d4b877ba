use super::common::*;
use crate::workflows::matching::domain::NormalizedLocation;
use crate::workflows::matching::queries::{
    BroadenStage, QueryGenerator, QueryKind, MAX_QUERIES,
};

#[test]
fn generates_weighted_queries_in_priority_order() {
    let queries = QueryGenerator::generate(&finance_contract(), &finance_signals());

    assert!(!queries.is_empty());
    assert!(queries.len() <= MAX_QUERIES);

    assert_eq!(queries[0].kind, QueryKind::DomainTitles);
    assert_eq!(queries[0].weight, 1.2);
    assert_eq!(queries[0].location, "New York, NY");

    let target = queries
        .iter()
        .find(|query| query.kind == QueryKind::TargetCompanies)
        .expect("target companies query present");
    assert_eq!(target.weight, 1.25);
    assert!(target.query.contains("Goldman Sachs"));

    let remote = queries
        .iter()
        .find(|query| query.kind == QueryKind::Remote)
        .expect("remote query present");
    assert_eq!(remote.location, "Remote");
    assert_eq!(remote.weight, 1.1);
}

#[test]
fn job_type_token_prefixes_every_query() {
    let queries = QueryGenerator::generate(&finance_contract(), &finance_signals());

    for query in &queries {
        assert!(
            query.query.starts_with("internship "),
            "query '{}' lacks job type prefix",
            query.query
        );
    }
}

#[test]
fn empty_locations_substitute_broad_market_token() {
    let mut contract = finance_contract();
    contract.preferred_locations.clear();

    let queries = QueryGenerator::generate(&contract, &finance_signals());

    assert!(queries
        .iter()
        .filter(|query| query.kind != QueryKind::Remote)
        .all(|query| query.location == "United States"));
}

#[test]
fn never_exceeds_query_cap() {
    let mut contract = finance_contract();
    contract.preferred_locations = vec![
        NormalizedLocation::new("New York, NY"),
        NormalizedLocation::new("Boston, MA"),
        NormalizedLocation::new("Chicago, IL"),
        NormalizedLocation::new("Austin, TX"),
        NormalizedLocation::new("Atlanta, GA"),
        NormalizedLocation::new("Seattle, WA"),
        NormalizedLocation::new("Washington, DC"),
    ];

    let queries = QueryGenerator::generate(&contract, &finance_signals());
    assert_eq!(queries.len(), MAX_QUERIES);
}

#[test]
fn every_selected_domain_seeds_the_base_plan() {
    let mut contract = finance_contract();
    contract.career_domains = [
        crate::workflows::matching::domain::CareerDomain::FinanceBanking,
        crate::workflows::matching::domain::CareerDomain::Technology,
    ]
    .into_iter()
    .collect();

    let queries = QueryGenerator::generate(
        &contract,
        &crate::workflows::matching::domain::ProfileSignals::default(),
    );

    let titles: Vec<&str> = queries
        .iter()
        .filter(|query| query.kind == QueryKind::DomainTitles)
        .map(|query| query.query.as_str())
        .collect();
    assert!(
        titles.iter().any(|title| title.contains("investment banking analyst")),
        "finance titles missing from {titles:?}"
    );
    assert!(
        titles.iter().any(|title| title.contains("software engineer")),
        "technology titles missing from {titles:?}"
    );
}

#[test]
fn metro_stage_widens_within_the_same_city_only() {
    let queries = QueryGenerator::broaden(&finance_contract(), BroadenStage::MetroSynonyms);

    assert!(!queries.is_empty());
    for query in &queries {
        assert_eq!(query.kind, QueryKind::MetroWidened);
        assert!(
            ["Jersey City, NJ", "Brooklyn, NY", "Hoboken, NJ"]
                .contains(&query.location.as_str()),
            "unexpected widened location {}",
            query.location
        );
    }
}

#[test]
fn adjacent_stage_uses_the_fintech_bridge() {
    let queries = QueryGenerator::broaden(&finance_contract(), BroadenStage::AdjacentDomains);

    assert_eq!(queries.len(), 1);
    assert!(queries[0].query.contains("fintech"));
}

#[test]
fn company_restriction_drop_falls_back_to_generic_titles() {
    let queries =
        QueryGenerator::broaden(&finance_contract(), BroadenStage::DropCompanyRestriction);

    assert!(!queries.is_empty());
    for query in &queries {
        assert!(!query.query.contains("Goldman Sachs"));
        assert_eq!(query.weight, 1.0);
        assert_eq!(
            query.location, "New York, NY",
            "dropping companies must not widen the location"
        );
    }
}

#[test]
fn marketing_contract_has_no_adjacent_stage() {
    let mut contract = finance_contract();
    contract.career_domains = [crate::workflows::matching::domain::CareerDomain::Marketing]
        .into_iter()
        .collect();

    let queries = QueryGenerator::broaden(&contract, BroadenStage::AdjacentDomains);
    assert!(queries.is_empty());
}
