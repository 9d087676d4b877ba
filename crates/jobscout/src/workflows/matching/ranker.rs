//! Final feed assembly: sort with tie-breaks, interleave for company
//! diversity, and truncate to the dynamic feed size.

use super::domain::ScoredPosting;
use super::text;

/// Below this many admitted postings the whole set is returned.
const SMALL_UNIVERSE: usize = 20;
/// Otherwise the feed is cut to this size and flagged as having more.
const FEED_SIZE: usize = 30;
/// Maximum consecutive postings from one company.
const MAX_COMPANY_RUN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedFeed {
    pub feed: Vec<ScoredPosting>,
    pub more_available: bool,
}

pub struct Ranker;

impl Ranker {
    pub fn rank(mut scored: Vec<ScoredPosting>) -> RankedFeed {
        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.query_weight.total_cmp(&a.query_weight))
                .then_with(|| b.posting.posted_at.cmp(&a.posting.posted_at))
        });

        let diversified = diversify(scored);
        let admitted = diversified.len();

        if admitted < SMALL_UNIVERSE {
            RankedFeed {
                feed: diversified,
                more_available: false,
            }
        } else {
            let more_available = admitted > FEED_SIZE;
            let mut feed = diversified;
            feed.truncate(FEED_SIZE);
            RankedFeed {
                feed,
                more_available,
            }
        }
    }
}

/// Break up long same-company runs by pulling the next different-company
/// posting forward; order is otherwise preserved.
fn diversify(scored: Vec<ScoredPosting>) -> Vec<ScoredPosting> {
    let mut remaining = scored;
    let mut feed: Vec<ScoredPosting> = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let run_company = feed
            .iter()
            .rev()
            .take(MAX_COMPANY_RUN)
            .map(|entry| text::normalize(&entry.posting.company))
            .collect::<Vec<_>>();
        let run_is_saturated = run_company.len() == MAX_COMPANY_RUN
            && run_company.iter().all(|company| company == &run_company[0]);

        let pick = if run_is_saturated {
            remaining
                .iter()
                .position(|entry| text::normalize(&entry.posting.company) != run_company[0])
                // Only one company left: accept the longer run.
                .unwrap_or(0)
        } else {
            0
        };

        feed.push(remaining.remove(pick));
    }

    feed
}
