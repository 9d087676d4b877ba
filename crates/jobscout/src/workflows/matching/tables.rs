//! Static keyword tables backing classification, query generation, and
//! quality filtering. Kept as immutable data in one place so regional
//! overrides or future localization replace tables, not code.

use super::domain::{CareerDomain, JobType};

pub(crate) const ALL_DOMAINS: [CareerDomain; 8] = [
    CareerDomain::FinanceBanking,
    CareerDomain::Technology,
    CareerDomain::Consulting,
    CareerDomain::Marketing,
    CareerDomain::Sales,
    CareerDomain::Operations,
    CareerDomain::Healthcare,
    CareerDomain::Education,
];

/// Keywords that classify free text (interest strings, majors, posting text)
/// into a career domain.
pub(crate) fn domain_keywords(domain: CareerDomain) -> &'static [&'static str] {
    match domain {
        CareerDomain::FinanceBanking => &[
            "finance",
            "banking",
            "investment banking",
            "investment",
            "private equity",
            "hedge fund",
            "capital markets",
            "wealth management",
            "equity research",
            "trading",
            "accounting",
            "financial analyst",
        ],
        CareerDomain::Technology => &[
            "software",
            "technology",
            "computer science",
            "programming",
            "developer",
            "engineering",
            "data science",
            "machine learning",
            "cybersecurity",
            "information technology",
            "tech",
        ],
        CareerDomain::Consulting => &[
            "consulting",
            "consultant",
            "strategy",
            "advisory",
            "management consulting",
        ],
        CareerDomain::Marketing => &[
            "marketing",
            "brand",
            "advertising",
            "social media",
            "communications",
            "public relations",
            "content",
        ],
        CareerDomain::Sales => &[
            "sales",
            "business development",
            "account executive",
            "account management",
            "revenue",
        ],
        CareerDomain::Operations => &[
            "operations",
            "supply chain",
            "logistics",
            "procurement",
            "project management",
        ],
        CareerDomain::Healthcare => &[
            "healthcare",
            "health",
            "medical",
            "nursing",
            "pharmaceutical",
            "biotech",
            "clinical",
            "public health",
        ],
        CareerDomain::Education => &[
            "education",
            "teaching",
            "teacher",
            "tutoring",
            "curriculum",
            "academic",
        ],
    }
}

/// Job-title keywords used to seed domain queries.
pub(crate) fn title_keywords(domain: CareerDomain) -> &'static [&'static str] {
    match domain {
        CareerDomain::FinanceBanking => &[
            "investment banking analyst",
            "financial analyst",
            "finance analyst",
        ],
        CareerDomain::Technology => &["software engineer", "software developer", "data analyst"],
        CareerDomain::Consulting => &["consulting analyst", "business analyst", "strategy analyst"],
        CareerDomain::Marketing => &[
            "marketing coordinator",
            "marketing analyst",
            "brand associate",
        ],
        CareerDomain::Sales => &[
            "sales development representative",
            "account coordinator",
            "sales associate",
        ],
        CareerDomain::Operations => &[
            "operations analyst",
            "supply chain analyst",
            "operations coordinator",
        ],
        CareerDomain::Healthcare => &[
            "clinical research assistant",
            "healthcare analyst",
            "health program coordinator",
        ],
        CareerDomain::Education => &[
            "teaching assistant",
            "education program coordinator",
            "tutor",
        ],
    }
}

/// Named employers students commonly target per domain.
pub(crate) fn target_companies(domain: CareerDomain) -> &'static [&'static str] {
    match domain {
        CareerDomain::FinanceBanking => &["Goldman Sachs", "JPMorgan", "Morgan Stanley"],
        CareerDomain::Technology => &["Google", "Microsoft", "Amazon"],
        CareerDomain::Consulting => &["McKinsey", "Bain", "Boston Consulting Group"],
        CareerDomain::Marketing => &["Procter & Gamble", "Unilever", "Ogilvy"],
        CareerDomain::Sales => &["Salesforce", "Oracle", "ADP"],
        CareerDomain::Operations => &["Amazon", "UPS", "Target"],
        CareerDomain::Healthcare => &["UnitedHealth Group", "Pfizer", "Mayo Clinic"],
        CareerDomain::Education => &["Teach For America", "Kaplan", "Pearson"],
    }
}

/// The only defined domain adjacency: finance_banking and technology bridge
/// through fintech. Returns the bridge keywords a posting may match instead
/// of the user's own domain keywords.
pub(crate) fn adjacency_bridge(domain: CareerDomain) -> &'static [&'static str] {
    match domain {
        CareerDomain::FinanceBanking | CareerDomain::Technology => &["fintech"],
        _ => &[],
    }
}

/// Common location abbreviations mapped to canonical "City, ST" form.
pub(crate) const LOCATION_ALIASES: [(&str, &str); 14] = [
    ("nyc", "New York, NY"),
    ("new york", "New York, NY"),
    ("new york city", "New York, NY"),
    ("sf", "San Francisco, CA"),
    ("san francisco", "San Francisco, CA"),
    ("la", "Los Angeles, CA"),
    ("los angeles", "Los Angeles, CA"),
    ("chicago", "Chicago, IL"),
    ("boston", "Boston, MA"),
    ("dc", "Washington, DC"),
    ("washington dc", "Washington, DC"),
    ("seattle", "Seattle, WA"),
    ("austin", "Austin, TX"),
    ("atlanta", "Atlanta, GA"),
];

/// Metro-area widening used by the first broadening stage. Keys are the
/// canonical city names produced by [`LOCATION_ALIASES`].
pub(crate) fn metro_synonyms(city: &str) -> &'static [&'static str] {
    match city {
        "New York" => &["Jersey City, NJ", "Brooklyn, NY", "Hoboken, NJ"],
        "San Francisco" => &["Oakland, CA", "Palo Alto, CA", "San Jose, CA"],
        "Los Angeles" => &["Santa Monica, CA", "Pasadena, CA", "Irvine, CA"],
        "Chicago" => &["Evanston, IL", "Naperville, IL"],
        "Boston" => &["Cambridge, MA", "Waltham, MA"],
        "Washington" => &["Arlington, VA", "Bethesda, MD"],
        "Seattle" => &["Bellevue, WA", "Redmond, WA"],
        _ => &[],
    }
}

/// Fallback location token when the user states no geographic constraint.
pub(crate) const BROAD_LOCATION: &str = "United States";

/// Raw strings mapped to a canonical job type.
pub(crate) fn job_type_synonyms(job_type: JobType) -> &'static [&'static str] {
    match job_type {
        JobType::Internship => &["internship", "intern", "summer analyst", "co-op", "coop"],
        JobType::FullTime => &[
            "full-time",
            "full time",
            "fulltime",
            "new grad",
            "new graduate",
            "entry level",
        ],
    }
}

/// Phrases that mark a posting as spam regardless of anything else.
pub(crate) const SPAM_KEYWORDS: [&str; 8] = [
    "no experience necessary",
    "unlimited earning",
    "be your own boss",
    "quick money",
    "earn up to",
    "$$$",
    "sign-up bonus guaranteed",
    "work from home and earn",
];

/// Placeholder company names that carry no signal.
pub(crate) const PLACEHOLDER_COMPANIES: [&str; 2] = ["company", "confidential"];

/// Name fragments typical of staffing agencies reposting third-party roles.
pub(crate) const STAFFING_PATTERNS: [&str; 6] = [
    "staffing",
    "recruiting",
    "recruiters",
    "talent acquisition",
    "talent solutions",
    "employment agency",
];

/// Title/description keywords that mark a role too senior for an
/// internship-phase student.
pub(crate) const SENIOR_KEYWORDS_STRICT: [&str; 5] =
    ["senior", "lead", "principal", "director", "manager"];

/// Subset still rejected for new-grad students.
pub(crate) const SENIOR_KEYWORDS_NEW_GRAD: [&str; 2] = ["senior", "lead"];
