//! Keyword-table classification behind a trait seam, so the gate and scoring
//! logic stay untouched if this is later swapped for an embedding-backed
//! implementation.

use std::collections::BTreeSet;

use crate::workflows::matching::domain::{CareerDomain, CareerPhase, JobPosting, JobType};
use crate::workflows::matching::intent::classify_posting_job_type;
use crate::workflows::matching::tables;
use crate::workflows::matching::text::PostingText;

/// How a posting relates to the user's selected domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainMatch {
    /// Posting text matched a keyword of this selected domain.
    Direct(CareerDomain),
    /// Posting matched only through the defined adjacency bridge keyword.
    Bridge(&'static str),
    None,
}

pub trait Classifier: Send + Sync {
    fn domain_match(&self, domains: &BTreeSet<CareerDomain>, posting: &JobPosting) -> DomainMatch;
    fn posting_job_type(&self, posting: &JobPosting) -> Option<JobType>;
    /// Seniority keyword that disqualifies the posting for the phase, if any.
    fn seniority_conflict(&self, phase: CareerPhase, posting: &JobPosting)
        -> Option<&'static str>;
    /// Field/major affinity multiplier in [0, 1]; strong matches land near
    /// 0.95, weak cross-domain matches near 0.15.
    fn domain_affinity(&self, domains: &BTreeSet<CareerDomain>, posting: &JobPosting) -> f32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn keyword_hits(domain: CareerDomain, posting_text: &PostingText) -> usize {
        tables::domain_keywords(domain)
            .iter()
            .filter(|keyword| posting_text.has(keyword))
            .count()
    }
}

impl Classifier for KeywordClassifier {
    fn domain_match(&self, domains: &BTreeSet<CareerDomain>, posting: &JobPosting) -> DomainMatch {
        let posting_text = PostingText::new(&posting.title, &posting.description);

        for domain in domains {
            if Self::keyword_hits(*domain, &posting_text) > 0 {
                return DomainMatch::Direct(*domain);
            }
        }

        for domain in domains {
            for bridge in tables::adjacency_bridge(*domain) {
                if posting_text.has(bridge) {
                    return DomainMatch::Bridge(bridge);
                }
            }
        }

        DomainMatch::None
    }

    fn posting_job_type(&self, posting: &JobPosting) -> Option<JobType> {
        let posting_text = PostingText::new(&posting.title, &posting.description);
        classify_posting_job_type(&posting_text)
    }

    fn seniority_conflict(
        &self,
        phase: CareerPhase,
        posting: &JobPosting,
    ) -> Option<&'static str> {
        let keywords: &[&'static str] = match phase {
            CareerPhase::Internship => &tables::SENIOR_KEYWORDS_STRICT,
            CareerPhase::NewGrad => &tables::SENIOR_KEYWORDS_NEW_GRAD,
            CareerPhase::Graduated => return None,
        };

        let posting_text = PostingText::new(&posting.title, &posting.description);
        keywords
            .iter()
            .find(|keyword| posting_text.has(keyword))
            .copied()
    }

    fn domain_affinity(&self, domains: &BTreeSet<CareerDomain>, posting: &JobPosting) -> f32 {
        if domains.is_empty() {
            // No stated domains: neutral multiplier, scoring differentiates
            // on the other signals.
            return 0.5;
        }

        let posting_text = PostingText::new(&posting.title, &posting.description);
        let best_hits = domains
            .iter()
            .map(|domain| Self::keyword_hits(*domain, &posting_text))
            .max()
            .unwrap_or(0);

        match best_hits {
            0 => {
                let bridged = domains.iter().any(|domain| {
                    tables::adjacency_bridge(*domain)
                        .iter()
                        .any(|bridge| posting_text.has(bridge))
                });
                if bridged {
                    0.35
                } else {
                    0.15
                }
            }
            1 => 0.55,
            2 => 0.75,
            _ => 0.95,
        }
    }
}
