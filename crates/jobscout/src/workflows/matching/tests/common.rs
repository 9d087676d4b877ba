use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::workflows::matching::domain::{
    CareerDomain, CareerPhase, EducationContext, ExperienceSignal, GraduationTiming,
    IntentContract, JobPosting, JobType, NormalizedLocation, PostingId, ProfileSignals,
    RawProfile, SkillSignal,
};
use crate::workflows::matching::fetch::FetchedPosting;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 15).expect("valid date")
}

pub(super) fn finance_contract() -> IntentContract {
    IntentContract {
        career_domains: [CareerDomain::FinanceBanking].into_iter().collect(),
        preferred_locations: vec![NormalizedLocation::new("New York, NY")],
        job_types: [JobType::Internship].into_iter().collect(),
        graduation: GraduationTiming {
            year: 2028,
            month: 5,
            months_until_graduation: 21,
            career_phase: CareerPhase::Internship,
        },
        education: EducationContext {
            major: Some("Finance".to_string()),
            degree: Some("BS".to_string()),
            university: Some("NYU".to_string()),
        },
        resume_present: true,
    }
}

pub(super) fn contract_with_phase(phase: CareerPhase) -> IntentContract {
    let mut contract = finance_contract();
    contract.graduation.career_phase = phase;
    if phase != CareerPhase::Internship {
        contract.job_types = [JobType::FullTime].into_iter().collect();
    }
    contract
}

pub(super) fn unconstrained_contract() -> IntentContract {
    IntentContract {
        career_domains: BTreeSet::new(),
        preferred_locations: Vec::new(),
        job_types: BTreeSet::new(),
        graduation: finance_contract().graduation,
        education: EducationContext::default(),
        resume_present: false,
    }
}

pub(super) fn finance_signals() -> ProfileSignals {
    ProfileSignals {
        skills: vec![
            SkillSignal::new("financial modeling", 0.9),
            SkillSignal::new("Excel", 0.95),
            SkillSignal::new("valuation", 0.8),
        ],
        experiences: vec![ExperienceSignal {
            title: "Finance Club Analyst".to_string(),
            company: "NYU Stern".to_string(),
            keywords: vec!["valuation".to_string(), "pitch".to_string()],
        }],
        extracurriculars: vec!["Investment Club".to_string()],
        interests: vec!["Investment Banking".to_string()],
        target_industries: vec!["banking".to_string()],
    }
}

pub(super) fn posting(id: &str, title: &str, company: &str, location: &str) -> JobPosting {
    JobPosting {
        id: PostingId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        description: format!(
            "{title} role supporting our {company} team with analysis, reporting, and client work. \
             Strong candidates have relevant coursework and internship interest."
        ),
        location: location.to_string(),
        remote: false,
        posted_at: today() - chrono::Duration::days(5),
        source_quality: 0.9,
    }
}

pub(super) fn ib_posting() -> JobPosting {
    let mut posting = posting(
        "ib-1",
        "Investment Banking Summer Analyst",
        "Goldman Sachs",
        "New York, NY",
    );
    posting.description = "Summer analyst internship in our investment banking division. \
                           Work on valuation, financial modeling, and capital markets pitches."
        .to_string();
    posting
}

pub(super) fn senior_swe_posting() -> JobPosting {
    let mut posting = posting(
        "swe-9",
        "Senior Software Engineer",
        "Google",
        "Seattle, WA",
    );
    posting.description = "Senior engineering role building large-scale software systems. \
                           8+ years of programming experience required."
        .to_string();
    posting
}

pub(super) fn fetched(posting: JobPosting, query_weight: f32) -> FetchedPosting {
    FetchedPosting {
        posting,
        query_weight,
    }
}

pub(super) fn finance_raw_profile() -> RawProfile {
    RawProfile {
        career_interests: vec!["Investment Banking".to_string()],
        major: Some("Finance".to_string()),
        degree: Some("BS".to_string()),
        university: Some("NYU".to_string()),
        job_types: vec!["internship".to_string()],
        preferred_locations: vec!["New York, NY".to_string()],
        graduation_year: Some(2028),
        graduation_month: Some(5),
        resume_present: true,
    }
}
