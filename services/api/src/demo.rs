use std::sync::Arc;

use chrono::Datelike;
use clap::Args;

use jobscout::error::AppError;
use jobscout::workflows::matching::{
    ExperienceSignal, JobMatchService, MatchConfig, ProfileSignals, RawProfile, SkillSignal,
};

use crate::infra::StaticListingProvider;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show the per-component score breakdown for each feed entry
    #[arg(long)]
    pub(crate) explain: bool,
}

/// Run the full pipeline against the canned posting universe and print the
/// resulting feed, so stakeholders can see gating and ranking behavior
/// without a live search provider.
pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = JobMatchService::new(
        Arc::new(StaticListingProvider::with_sample_postings()),
        MatchConfig::default(),
    );

    let profile = demo_profile();
    let signals = demo_signals();
    let outcome = service.search(&profile, &signals).await;

    println!("JobScout demo — finance internship profile");
    println!(
        "fetched {} | after quality {} | after gates {} | feed {}",
        outcome.metadata.total_fetched,
        outcome.metadata.total_after_quality,
        outcome.metadata.total_after_gates,
        outcome.feed.len()
    );
    for (gate, count) in &outcome.metadata.gate_rejections {
        println!("  rejected by {}: {count}", gate.label());
    }
    if let Some(sparse) = &outcome.metadata.sparse {
        println!(
            "  market sparse: {} admitted, minimum {}",
            sparse.admitted, sparse.minimum
        );
    }

    println!();
    for (rank, entry) in outcome.feed.iter().enumerate() {
        println!(
            "{:>2}. [{:>3}] {} — {} ({})",
            rank + 1,
            entry.score,
            entry.posting.title,
            entry.posting.company,
            entry.posting.location
        );
        if args.explain {
            for component in &entry.components {
                println!(
                    "       {:<24} {:>4}  {}",
                    component.factor.label(),
                    component.points,
                    component.notes
                );
            }
        }
    }

    if outcome.more_available {
        println!("\n(more postings available beyond the feed cap)");
    }

    Ok(())
}

fn demo_profile() -> RawProfile {
    RawProfile {
        career_interests: vec!["Investment Banking".to_string()],
        major: Some("Finance".to_string()),
        degree: Some("BS".to_string()),
        university: Some("NYU Stern".to_string()),
        job_types: vec!["internship".to_string()],
        preferred_locations: vec!["NYC".to_string()],
        graduation_year: Some(chrono::Local::now().year() + 2),
        graduation_month: Some(5),
        resume_present: true,
    }
}

fn demo_signals() -> ProfileSignals {
    ProfileSignals {
        skills: vec![
            SkillSignal::new("financial modeling", 0.92),
            SkillSignal::new("valuation", 0.88),
            SkillSignal::new("Excel", 0.95),
        ],
        experiences: vec![ExperienceSignal {
            title: "Investment Club Analyst".to_string(),
            company: "NYU Stern".to_string(),
            keywords: vec!["valuation".to_string(), "equity pitch".to_string()],
        }],
        extracurriculars: vec!["Investment Club".to_string()],
        interests: vec!["Investment Banking".to_string()],
        target_industries: vec!["banking".to_string()],
    }
}
