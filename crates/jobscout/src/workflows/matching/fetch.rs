//! Listing fetch orchestration: issue the generated queries against the
//! external search provider with bounded concurrency and a per-query
//! deadline, then dedup the merged results.
//!
//! A timed-out or failed query contributes zero postings; the pipeline never
//! fails because one provider call did.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use super::domain::JobPosting;
use super::queries::SearchQuery;
use super::text;

/// External search collaborator. Implementations must return an empty list
/// rather than an error on zero results.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>, FetchError>;
}

/// A single query's fetch failure. Logged and tolerated, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider rejected query: {0}")]
    BadQuery(String),
}

/// Fan-out executor over one round of queries.
pub struct ListingFetcher<P> {
    provider: Arc<P>,
    query_timeout: Duration,
    concurrency: usize,
}

impl<P: ListingProvider + 'static> ListingFetcher<P> {
    pub fn new(provider: Arc<P>, query_timeout: Duration, concurrency: usize) -> Self {
        Self {
            provider,
            query_timeout,
            concurrency: concurrency.max(1),
        }
    }

    /// Run every query concurrently (bounded) and return per-query results in
    /// the original priority order, so first-seen dedup favors the
    /// highest-priority query.
    pub async fn dispatch(&self, queries: &[SearchQuery]) -> Vec<QueryResult> {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut join_set = JoinSet::new();

        for (index, query) in queries.iter().cloned().enumerate() {
            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&semaphore);
            let timeout = self.query_timeout;
            join_set.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore open");
                let outcome =
                    tokio::time::timeout(timeout, provider.search(&query.query, &query.location))
                        .await;
                (index, query, outcome)
            });
        }

        let mut slots: Vec<Option<QueryResult>> = (0..queries.len()).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            let Ok((index, query, outcome)) = joined else {
                // A panicked fetch task degrades to an empty result.
                continue;
            };
            let result = match outcome {
                Ok(Ok(postings)) => QueryResult {
                    query,
                    postings,
                    timed_out: false,
                },
                Ok(Err(error)) => {
                    warn!(query = %query.query, %error, "listing fetch failed");
                    QueryResult {
                        query,
                        postings: Vec::new(),
                        timed_out: false,
                    }
                }
                Err(_) => {
                    warn!(query = %query.query, timeout_ms = self.query_timeout.as_millis() as u64, "listing fetch timed out");
                    QueryResult {
                        query,
                        postings: Vec::new(),
                        timed_out: true,
                    }
                }
            };
            slots[index] = Some(result);
        }

        slots.into_iter().flatten().collect()
    }
}

/// One query's raw outcome.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub query: SearchQuery,
    pub postings: Vec<JobPosting>,
    pub timed_out: bool,
}

/// Posting retained after dedup, carrying the best weight among the queries
/// that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPosting {
    pub posting: JobPosting,
    pub query_weight: f32,
}

/// Cross-query, cross-round dedup by normalized `(company, title, location)`.
/// First-seen copy wins; later duplicates only raise the recorded weight.
#[derive(Default)]
pub struct PostingAccumulator {
    seen: HashMap<(String, String, String), usize>,
    postings: Vec<FetchedPosting>,
    total_fetched: usize,
}

impl PostingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, results: Vec<QueryResult>) {
        for result in results {
            self.total_fetched += result.postings.len();
            for posting in result.postings {
                let key = (
                    text::normalize(&posting.company),
                    text::normalize(&posting.title),
                    text::normalize(&posting.location),
                );
                match self.seen.get(&key) {
                    Some(&index) => {
                        let kept = &mut self.postings[index];
                        if result.query.weight > kept.query_weight {
                            kept.query_weight = result.query.weight;
                        }
                    }
                    None => {
                        self.seen.insert(key, self.postings.len());
                        self.postings.push(FetchedPosting {
                            posting,
                            query_weight: result.query.weight,
                        });
                    }
                }
            }
        }
    }

    /// Total postings returned by the provider before dedup.
    pub fn total_fetched(&self) -> usize {
        self.total_fetched
    }

    pub fn postings(&self) -> &[FetchedPosting] {
        &self.postings
    }

    pub fn into_postings(self) -> Vec<FetchedPosting> {
        self.postings
    }
}
