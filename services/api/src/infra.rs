use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;

use jobscout::workflows::matching::{
    FetchError, JobPosting, ListingProvider, PostingId, ProfileSignals, RawProfile,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stored onboarding document for one student.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ProfileRecord {
    pub(crate) profile: RawProfile,
    pub(crate) signals: ProfileSignals,
}

/// Key-value profile store; persistence mechanics are out of scope for the
/// matching core, so the service keeps a trivial in-memory map.
pub(crate) trait ProfileRepository: Send + Sync {
    fn upsert(&self, user_id: &str, record: ProfileRecord);
    fn fetch(&self, user_id: &str) -> Option<ProfileRecord>;
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<String, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn upsert(&self, user_id: &str, record: ProfileRecord) {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
        guard.insert(user_id.to_string(), record);
    }

    fn fetch(&self, user_id: &str) -> Option<ProfileRecord> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        guard.get(user_id).cloned()
    }
}

/// Listing provider backed by a fixed posting set, used by the demo command
/// and route tests. Matching is intentionally naive: the posting must sit in
/// the queried market and share at least one meaningful query token.
pub(crate) struct StaticListingProvider {
    postings: Vec<JobPosting>,
}

impl StaticListingProvider {
    pub(crate) fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    pub(crate) fn with_sample_postings() -> Self {
        Self::new(sample_postings(Local::now().date_naive()))
    }

    fn in_market(posting: &JobPosting, location: &str) -> bool {
        let location = location.to_ascii_lowercase();
        if location == "united states" {
            return true;
        }
        if location == "remote" {
            return posting.remote;
        }
        let city = location.split(',').next().unwrap_or(&location).trim().to_string();
        posting.remote || posting.location.to_ascii_lowercase().contains(&city)
    }

    fn mentions(posting: &JobPosting, query: &str) -> bool {
        let haystack = format!("{} {}", posting.title, posting.description).to_ascii_lowercase();
        query
            .to_ascii_lowercase()
            .split_whitespace()
            .filter(|token| token.len() > 3)
            .any(|token| haystack.contains(token))
    }
}

#[async_trait]
impl ListingProvider for StaticListingProvider {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>, FetchError> {
        Ok(self
            .postings
            .iter()
            .filter(|posting| Self::in_market(posting, location) && Self::mentions(posting, query))
            .cloned()
            .collect())
    }
}

/// Demo posting universe: a few strong matches plus postings each upstream
/// stage should remove.
pub(crate) fn sample_postings(today: NaiveDate) -> Vec<JobPosting> {
    let fresh = today - Duration::days(3);
    let stale = today - Duration::days(90);

    let entry = |id: &str, title: &str, company: &str, description: &str, location: &str, remote: bool, posted_at: NaiveDate| JobPosting {
        id: PostingId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        remote,
        posted_at,
        source_quality: 0.9,
    };

    vec![
        entry(
            "gs-ib-intern",
            "Investment Banking Summer Analyst",
            "Goldman Sachs",
            "Summer analyst internship in the investment banking division. Valuation, financial modeling, and capital markets exposure for finance students.",
            "New York, NY",
            false,
            fresh,
        ),
        entry(
            "jpm-fin-intern",
            "Financial Analyst Intern",
            "JPMorgan",
            "Internship supporting coverage teams with financial analysis, reporting, and banking client work.",
            "New York, NY",
            false,
            fresh,
        ),
        entry(
            "stripe-fintech",
            "Fintech Operations Intern",
            "Stripe",
            "Internship on our fintech payments platform working with finance and engineering partners.",
            "Remote",
            true,
            fresh,
        ),
        entry(
            "goog-senior-swe",
            "Senior Software Engineer",
            "Google",
            "Senior role building large-scale software infrastructure. Eight or more years of engineering experience required.",
            "Seattle, WA",
            false,
            fresh,
        ),
        entry(
            "acme-stale",
            "Finance Intern",
            "Acme Capital",
            "Internship in our finance group supporting quarterly reporting and banking relationships.",
            "New York, NY",
            false,
            stale,
        ),
        entry(
            "spam-wfh",
            "Finance Associate",
            "Confidential",
            "Be your own boss and earn up to thousands weekly working from home. No finance background needed.",
            "New York, NY",
            false,
            fresh,
        ),
        entry(
            "msft-swe-intern",
            "Software Engineering Intern",
            "Microsoft",
            "Internship building developer tools with mentorship from experienced engineers. Computer science coursework required.",
            "Seattle, WA",
            false,
            fresh,
        ),
    ]
}
