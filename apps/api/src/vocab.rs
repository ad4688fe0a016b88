//! Heuristic vocabulary tables shared by the résumé extractor and the
//! listing classifier.
//!
//! Every keyword/alias/stop-word list lives here as plain data so each list
//! can be tuned and tested in isolation — control flow in the extractor and
//! classifier never hard-codes a word.

/// Words that must never be admitted as a location, regardless of which
/// extraction pass produced them. Covers English function words plus the
/// résumé boilerplate nouns that dominate naive capitalized-word detection.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "this", "that", "was", "were",
    "have", "has", "had", "are", "our", "their", "your", "about", "into",
    "over", "under", "between", "during", "while", "where", "when",
    // résumé boilerplate
    "team", "teams", "experience", "company", "companies", "work", "working",
    "skills", "summary", "objective", "references", "education", "projects",
    "achievements", "history", "employment", "position", "role", "roles",
    "manager", "engineer", "developer", "senior", "junior", "lead",
    "department", "division", "office", "group", "staff", "member",
];

/// Indicator words for the contextual location pass: each is matched
/// immediately before a capitalized place-like phrase. Multi-word entries
/// first so the regex alternation prefers the longest indicator.
pub const LOCATION_INDICATORS: &[&str] = &[
    "relocated to",
    "based in",
    "located in",
    "moved to",
    "near",
    "around",
    "from",
    "in",
    "at",
];

/// Aliases naming the United States as a whole.
pub const USA_ALIASES: &[&str] = &["united states", "usa", "u.s.a.", "america"];

/// US state names. Matched whole-word by the region-alias pass and by the
/// listing classifier's region step.
pub const US_STATES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado",
    "connecticut", "delaware", "florida", "georgia", "hawaii", "idaho",
    "illinois", "indiana", "iowa", "kansas", "kentucky", "louisiana",
    "maine", "maryland", "massachusetts", "michigan", "minnesota",
    "mississippi", "missouri", "montana", "nebraska", "nevada",
    "new hampshire", "new jersey", "new mexico", "new york",
    "north carolina", "north dakota", "ohio", "oklahoma", "oregon",
    "pennsylvania", "rhode island", "south carolina", "south dakota",
    "tennessee", "texas", "utah", "vermont", "virginia", "washington",
    "west virginia", "wisconsin", "wyoming",
];

/// Aliases naming the United Kingdom as a whole.
pub const UK_ALIASES: &[&str] = &[
    "united kingdom",
    "great britain",
    "uk",
    "england",
    "scotland",
    "wales",
];

/// UK cities and counties recognized by the region-alias pass.
pub const UK_PLACES: &[&str] = &[
    "london", "manchester", "birmingham", "leeds", "liverpool", "bristol",
    "glasgow", "edinburgh", "cambridge", "oxford", "kent", "surrey",
    "yorkshire", "cornwall", "devon", "essex",
];

/// US cities recognized by the gazetteer entity recognizer. Weighted toward
/// Kentucky and its neighbors — the dataset this service was built around —
/// plus the large tech-hiring metros that dominate résumés.
pub const US_CITIES: &[&str] = &[
    "lexington", "louisville", "elizabethtown", "bowling green", "frankfort",
    "owensboro", "covington", "paducah", "cincinnati", "columbus",
    "indianapolis", "nashville", "knoxville", "memphis", "st louis",
    "chicago", "detroit", "pittsburgh", "atlanta", "charlotte", "raleigh",
    "austin", "dallas", "houston", "san antonio", "denver", "phoenix",
    "seattle", "portland", "san francisco", "san jose", "los angeles",
    "san diego", "new york", "boston", "philadelphia", "baltimore",
    "washington", "miami", "orlando", "tampa", "minneapolis", "salt lake city",
];

/// Suffix words that mark a capitalized phrase as an organization name.
pub const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "llc", "ltd", "co", "company",
    "technologies", "labs", "systems", "solutions", "software", "group",
    "consulting", "partners", "studios", "university", "college",
];

/// Cue words that must appear near an organization hit for it to count as
/// an employer rather than an incidental mention.
pub const WORK_CUES: &[&str] = &[
    "work", "position", "role", "company", "team", "project", "employer",
    "job", "intern", "consult",
];

/// Keywords marking a listing as fully remote.
pub const REMOTE_KEYWORDS: &[&str] = &[
    "remote",
    "work from home",
    "telecommute",
    "virtual",
    "anywhere",
];

/// Keywords marking a listing as hybrid. Hybrid beats remote when both match.
pub const HYBRID_KEYWORDS: &[&str] = &["hybrid", "flexible", "partially remote"];

/// Kentucky patterns for the listing classifier. Matched whole-word against
/// the listing location; a hit takes absolute precedence over remote/hybrid.
pub const KENTUCKY_PATTERNS: &[&str] = &[
    "kentucky",
    "ky",
    "lexington, ky",
    "louisville, ky",
    "elizabethtown, ky",
    "bowling green, ky",
];
