use super::common::*;
use crate::workflows::matching::quality::{QualityConfig, QualityFilter};

fn filter() -> QualityFilter {
    QualityFilter::new(QualityConfig::default(), today())
}

#[test]
fn accepts_a_normal_posting() {
    let (accepted, rejected) = filter().screen(vec![fetched(ib_posting(), 1.2)]);
    assert_eq!(accepted.len(), 1);
    assert_eq!(rejected, 0);
}

#[test]
fn rejects_placeholder_company_names() {
    for name in ["Company", "CONFIDENTIAL", ""] {
        let mut posting = ib_posting();
        posting.company = name.to_string();
        let (accepted, rejected) = filter().screen(vec![fetched(posting, 1.0)]);
        assert!(accepted.is_empty(), "'{name}' should be rejected");
        assert_eq!(rejected, 1);
    }
}

#[test]
fn rejects_short_descriptions() {
    let mut posting = ib_posting();
    posting.description = "Great job!".to_string();
    let (accepted, rejected) = filter().screen(vec![fetched(posting, 1.0)]);
    assert!(accepted.is_empty());
    assert_eq!(rejected, 1);
}

#[test]
fn rejects_spam_keywords() {
    let mut posting = ib_posting();
    posting.description = format!("{} Be your own boss and earn up to thousands!", posting.description);
    let (accepted, _) = filter().screen(vec![fetched(posting, 1.0)]);
    assert!(accepted.is_empty());
}

#[test]
fn rejects_stale_postings_beyond_configured_age() {
    let mut posting = ib_posting();
    posting.posted_at = today() - chrono::Duration::days(45);
    let (accepted, _) = filter().screen(vec![fetched(posting, 1.0)]);
    assert!(accepted.is_empty());

    let lenient = QualityFilter::new(
        QualityConfig {
            max_posting_age_days: 60,
            ..QualityConfig::default()
        },
        today(),
    );
    let mut posting = ib_posting();
    posting.posted_at = today() - chrono::Duration::days(45);
    let (accepted, _) = lenient.screen(vec![fetched(posting, 1.0)]);
    assert_eq!(accepted.len(), 1);
}

#[test]
fn rejects_postings_below_the_source_quality_floor() {
    let mut posting = ib_posting();
    posting.source_quality = 0.1;
    let (accepted, rejected) = filter().screen(vec![fetched(posting, 1.0)]);
    assert!(accepted.is_empty());
    assert_eq!(rejected, 1);
}

#[test]
fn staffing_agency_needs_a_substantial_description() {
    let mut thin = ib_posting();
    thin.company = "Apex Staffing Solutions".to_string();
    thin.description = "We are hiring for a client role in finance. Apply today to learn more.".to_string();
    let (accepted, _) = filter().screen(vec![fetched(thin, 1.0)]);
    assert!(accepted.is_empty());

    let mut detailed = ib_posting();
    detailed.company = "Apex Staffing Solutions".to_string();
    detailed.description = "x".repeat(400);
    let (accepted, _) = filter().screen(vec![fetched(detailed, 1.0)]);
    assert_eq!(accepted.len(), 1);
}
