//! Pre-gate quality screening: spam, placeholder, and stale postings are
//! removed before any eligibility or ranking logic runs.

use chrono::NaiveDate;
use tracing::debug;

use super::fetch::FetchedPosting;
use super::tables;
use super::text;

/// Quality thresholds; defaults follow the product baseline and can be
/// overridden per deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityConfig {
    pub max_posting_age_days: i64,
    pub min_description_chars: usize,
    /// A staffing-agency posting survives only when its description is
    /// longer than this.
    pub staffing_description_floor: usize,
    /// Floor on the provider-reported source quality.
    pub min_source_quality: f32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_posting_age_days: 30,
            min_description_chars: 50,
            staffing_description_floor: 300,
            min_source_quality: 0.3,
        }
    }
}

pub struct QualityFilter {
    config: QualityConfig,
    today: NaiveDate,
}

impl QualityFilter {
    pub fn new(config: QualityConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    /// Split postings into accepted and a rejected count.
    pub fn screen(&self, postings: Vec<FetchedPosting>) -> (Vec<FetchedPosting>, usize) {
        let total = postings.len();
        let accepted: Vec<FetchedPosting> = postings
            .into_iter()
            .filter(|fetched| match self.reject_reason(&fetched.posting) {
                Some(reason) => {
                    debug!(
                        posting = %fetched.posting.id.0,
                        company = %fetched.posting.company,
                        reason,
                        "quality filter rejected posting"
                    );
                    false
                }
                None => true,
            })
            .collect();
        let rejected = total - accepted.len();
        (accepted, rejected)
    }

    fn reject_reason(&self, posting: &super::domain::JobPosting) -> Option<&'static str> {
        let company = text::normalize(&posting.company);
        if company.is_empty()
            || tables::PLACEHOLDER_COMPANIES
                .iter()
                .any(|placeholder| company == *placeholder)
        {
            return Some("placeholder company name");
        }

        if posting.description.chars().count() < self.config.min_description_chars {
            return Some("description too short");
        }

        let body = text::normalize(&posting.description);
        if tables::SPAM_KEYWORDS
            .iter()
            .any(|keyword| text::contains_phrase(&body, keyword))
        {
            return Some("spam keyword");
        }

        if posting.source_quality < self.config.min_source_quality {
            return Some("source quality below floor");
        }

        let age_days = (self.today - posting.posted_at).num_days();
        if age_days > self.config.max_posting_age_days {
            return Some("posting too old");
        }

        let staffing_name = tables::STAFFING_PATTERNS
            .iter()
            .any(|pattern| text::contains_phrase(&company, pattern));
        if staffing_name
            && posting.description.chars().count() <= self.config.staffing_description_floor
        {
            return Some("low-signal staffing posting");
        }

        None
    }
}
