use super::common::*;
use crate::workflows::matching::domain::PostingId;
use crate::workflows::matching::fetch::{PostingAccumulator, QueryResult};
use crate::workflows::matching::queries::{QueryKind, SearchQuery};

fn query(text: &str, weight: f32) -> SearchQuery {
    SearchQuery {
        query: text.to_string(),
        location: "New York, NY".to_string(),
        weight,
        kind: QueryKind::DomainTitles,
    }
}

fn result(query: SearchQuery, postings: Vec<crate::workflows::matching::domain::JobPosting>) -> QueryResult {
    QueryResult {
        query,
        postings,
        timed_out: false,
    }
}

#[test]
fn duplicate_postings_keep_first_seen_copy_and_best_weight() {
    let first = ib_posting();
    let mut second = ib_posting();
    second.id = PostingId("ib-dup".to_string());
    second.description = "A different rendering of the same posting.".to_string();

    let mut accumulator = PostingAccumulator::new();
    accumulator.absorb(vec![
        result(query("investment banking analyst", 1.0), vec![first.clone()]),
        result(query("goldman sachs analyst", 1.25), vec![second]),
    ]);

    let postings = accumulator.postings();
    assert_eq!(postings.len(), 1, "same (company, title, location) dedupes");
    assert_eq!(postings[0].posting.id.0, "ib-1", "first-seen copy is kept");
    assert_eq!(
        postings[0].posting.description, first.description,
        "later duplicates never overwrite the kept copy"
    );
    assert_eq!(
        postings[0].query_weight, 1.25,
        "weight rises to the best matching query"
    );
    assert_eq!(accumulator.total_fetched(), 2, "raw fetch count includes duplicates");
}

#[test]
fn dedup_key_ignores_case_and_punctuation() {
    let first = ib_posting();
    let mut shouting = ib_posting();
    shouting.id = PostingId("ib-loud".to_string());
    shouting.title = "INVESTMENT BANKING - SUMMER ANALYST".to_string();
    shouting.company = "GOLDMAN SACHS".to_string();

    let mut accumulator = PostingAccumulator::new();
    accumulator.absorb(vec![result(query("a", 1.2), vec![first, shouting])]);

    assert_eq!(accumulator.postings().len(), 1);
}

#[test]
fn different_locations_are_distinct_postings() {
    let manhattan = ib_posting();
    let mut jersey = ib_posting();
    jersey.id = PostingId("ib-jc".to_string());
    jersey.location = "Jersey City, NJ".to_string();

    let mut accumulator = PostingAccumulator::new();
    accumulator.absorb(vec![result(query("a", 1.2), vec![manhattan, jersey])]);

    assert_eq!(accumulator.postings().len(), 2);
}

#[test]
fn lower_weighted_duplicate_never_lowers_the_recorded_weight() {
    let mut accumulator = PostingAccumulator::new();
    accumulator.absorb(vec![
        result(query("a", 1.25), vec![ib_posting()]),
        result(query("b", 1.0), vec![ib_posting()]),
    ]);

    assert_eq!(accumulator.postings()[0].query_weight, 1.25);
}
