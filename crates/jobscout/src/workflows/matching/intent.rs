//! Raw profile → canonical [`IntentContract`] normalization.
//!
//! This boundary never fails: missing fields resolve to documented defaults
//! and unmappable values are dropped with a warning, so downstream stages can
//! rely on a well-formed contract.

use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use super::domain::{
    CareerDomain, CareerPhase, EducationContext, GraduationTiming, IntentContract, JobType,
    NormalizedLocation, RawProfile,
};
use super::tables;
use super::text;

/// Month assumed when a profile gives a graduation year but no month.
const DEFAULT_GRADUATION_MONTH: u32 = 5;

pub struct IntentNormalizer {
    today: NaiveDate,
}

impl Default for IntentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentNormalizer {
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Pin "today" for deterministic graduation arithmetic in tests.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn normalize(&self, profile: &RawProfile) -> IntentContract {
        IntentContract {
            career_domains: self.career_domains(profile),
            preferred_locations: profile
                .preferred_locations
                .iter()
                .filter_map(|raw| normalize_location(raw))
                .collect(),
            job_types: normalize_job_types(&profile.job_types),
            graduation: self.graduation_timing(profile),
            education: EducationContext {
                major: profile.major.clone(),
                degree: profile.degree.clone(),
                university: profile.university.clone(),
            },
            resume_present: profile.resume_present,
        }
    }

    fn career_domains(&self, profile: &RawProfile) -> BTreeSet<CareerDomain> {
        let mut domains = BTreeSet::new();
        for interest in &profile.career_interests {
            match domain_for_text(interest) {
                Some(domain) => {
                    domains.insert(domain);
                }
                None => warn!(interest = %interest, "dropping unmapped career interest"),
            }
        }

        if domains.is_empty() {
            if let Some(major) = &profile.major {
                if let Some(domain) = domain_for_text(major) {
                    domains.insert(domain);
                }
            }
        }

        domains
    }

    fn graduation_timing(&self, profile: &RawProfile) -> GraduationTiming {
        let year = profile
            .graduation_year
            .unwrap_or_else(|| self.today.year() + 1);
        let month = match profile.graduation_month {
            Some(m @ 1..=12) => m,
            Some(other) => {
                warn!(month = other, "graduation month out of range, assuming May");
                DEFAULT_GRADUATION_MONTH
            }
            None => DEFAULT_GRADUATION_MONTH,
        };

        let months_until_graduation =
            (year * 12 + month as i32) - (self.today.year() * 12 + self.today.month() as i32);

        let career_phase = if months_until_graduation > 1 {
            CareerPhase::Internship
        } else if months_until_graduation >= 0 {
            CareerPhase::NewGrad
        } else {
            CareerPhase::Graduated
        };

        GraduationTiming {
            year,
            month,
            months_until_graduation,
            career_phase,
        }
    }
}

/// Map free text to a career domain via the shared keyword table.
pub(crate) fn domain_for_text(value: &str) -> Option<CareerDomain> {
    let normalized = text::normalize(value);
    if normalized.is_empty() {
        return None;
    }
    tables::ALL_DOMAINS.into_iter().find(|&domain| {
        tables::domain_keywords(domain)
            .iter()
            .any(|keyword| text::contains_phrase(&normalized, keyword))
    })
}

/// Canonicalize one raw location string. Aliases map to "City, ST"; strings
/// already in that shape pass through; empty input means no constraint.
pub(crate) fn normalize_location(raw: &str) -> Option<NormalizedLocation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = text::normalize(trimmed);
    for (alias, canonical) in tables::LOCATION_ALIASES {
        if lowered == alias {
            return Some(NormalizedLocation::new(canonical));
        }
    }

    Some(NormalizedLocation::new(trimmed))
}

fn normalize_job_types(raw_types: &[String]) -> BTreeSet<JobType> {
    let mut job_types = BTreeSet::new();
    for raw in raw_types {
        let normalized = text::normalize(raw);
        if normalized.is_empty() {
            continue;
        }
        let matched = [JobType::Internship, JobType::FullTime]
            .into_iter()
            .find(|&job_type| {
                tables::job_type_synonyms(job_type)
                    .iter()
                    .any(|synonym| text::contains_phrase(&normalized, synonym))
            });
        match matched {
            Some(job_type) => {
                job_types.insert(job_type);
            }
            None => warn!(job_type = %raw, "dropping unrecognized job type"),
        }
    }
    job_types
}

/// Classify a posting's stated type with the same synonym table the intent
/// side uses, so gate comparisons are symmetric. `None` means ambiguous.
pub(crate) fn classify_posting_job_type(posting_text: &text::PostingText) -> Option<JobType> {
    let internship = tables::job_type_synonyms(JobType::Internship)
        .iter()
        .any(|synonym| posting_text.has(synonym));
    let full_time = tables::job_type_synonyms(JobType::FullTime)
        .iter()
        .any(|synonym| posting_text.has(synonym));

    match (internship, full_time) {
        (true, false) => Some(JobType::Internship),
        (false, true) => Some(JobType::FullTime),
        // Both or neither: defer to scoring.
        _ => None,
    }
}
