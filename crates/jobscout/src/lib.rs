//! Intent-driven job matching for student job feeds.
//!
//! The crate turns raw onboarding/profile data into a bounded, ranked set of
//! job postings: normalize the profile into an intent contract, generate
//! weighted search queries, fetch and dedup listings from an external
//! provider, strip low-quality postings, apply hard eligibility gates, score
//! the survivors, and rank the final feed.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
