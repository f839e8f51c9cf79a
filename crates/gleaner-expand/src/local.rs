//! Deterministic expansion from static tables and simple morphology

use gleaner_core::{query_terms, ExpandedQuery, ExpansionConfig, ExpansionSource, SynonymGroup};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Alternative phrasings produced without a language model
const LOCAL_ALTERNATIVE_LIMIT: usize = 3;

static HOW_TO_RE: OnceLock<Regex> = OnceLock::new();
static BEST_RE: OnceLock<Regex> = OnceLock::new();
static WHAT_IS_RE: OnceLock<Regex> = OnceLock::new();

static SYNONYMS: &[(&str, &[&str])] = &[
    ("company", &["firm", "business", "corporation", "enterprise"]),
    ("companies", &["firms", "businesses", "corporations", "enterprises"]),
    ("business", &["company", "enterprise", "firm", "commerce"]),
    ("startup", &["venture", "new company", "emerging company", "young company"]),
    ("startups", &["ventures", "new companies", "emerging companies"]),
    ("funding", &["investment", "capital", "financing", "fundraising"]),
    ("investor", &["backer", "financier", "venture capitalist"]),
    ("investors", &["backers", "financiers", "venture capitalists"]),
    ("revenue", &["income", "sales", "earnings", "turnover"]),
    ("profit", &["earnings", "margin", "income"]),
    ("ceo", &["chief executive", "founder", "president"]),
    ("founder", &["co-founder", "creator", "entrepreneur"]),
    ("employee", &["staff", "worker", "personnel"]),
    ("employees", &["staff", "workers", "personnel", "workforce"]),
    ("customer", &["client", "user", "buyer"]),
    ("customers", &["clients", "users", "buyers"]),
    ("product", &["offering", "solution", "service"]),
    ("market", &["industry", "sector", "marketplace"]),
    ("price", &["cost", "pricing", "rate"]),
    ("growth", &["expansion", "scaling", "increase"]),
    ("technology", &["tech", "innovation", "engineering"]),
    ("tech", &["technology", "software", "digital"]),
    ("software", &["application", "program", "platform"]),
    ("app", &["application", "software", "tool"]),
    ("data", &["information", "analytics", "dataset"]),
    ("healthcare", &["health care", "medical", "health services"]),
    ("health", &["wellness", "medical", "healthcare"]),
    ("finance", &["financial", "fintech", "banking"]),
    ("financial", &["finance", "fiscal", "monetary"]),
    ("marketing", &["advertising", "promotion", "branding"]),
    ("fast", &["quick", "rapid", "swift", "speedy"]),
    ("quick", &["fast", "rapid", "swift"]),
    ("car", &["automobile", "vehicle", "auto"]),
    ("cars", &["automobiles", "vehicles", "autos"]),
    ("cheap", &["affordable", "inexpensive", "budget"]),
    ("best", &["top", "leading", "premier"]),
    ("big", &["large", "major", "significant"]),
    ("small", &["little", "compact", "minor"]),
    ("new", &["recent", "latest", "emerging"]),
    ("tutorial", &["guide", "walkthrough", "lesson"]),
    ("guide", &["tutorial", "handbook", "manual"]),
    ("review", &["evaluation", "assessment", "critique"]),
    ("news", &["updates", "announcements", "press"]),
    ("job", &["position", "role", "career"]),
    ("jobs", &["positions", "roles", "careers", "openings"]),
    ("learn", &["study", "understand", "master"]),
    ("build", &["create", "develop", "construct"]),
];

static DOMAIN_CONCEPTS: &[(&[&str], &[&str])] = &[
    (
        &["business"],
        &["business strategy", "management", "operations", "market analysis"],
    ),
    (
        &["technology", "tech"],
        &["software", "innovation", "digital transformation", "engineering"],
    ),
    (
        &["finance", "financial"],
        &["investment", "banking", "accounting", "fintech"],
    ),
    (
        &["health"],
        &["medicine", "wellness", "healthcare providers", "clinical research"],
    ),
    (
        &["startup"],
        &["venture capital", "founders", "seed funding", "accelerator"],
    ),
    (
        &["marketing"],
        &["advertising", "branding", "seo", "social media"],
    ),
    (
        &["education", "school"],
        &["learning", "courses", "training", "curriculum"],
    ),
    (
        &["ecommerce", "shop"],
        &["online retail", "marketplace", "checkout", "payments"],
    ),
    (
        &["real estate", "property"],
        &["housing", "mortgage", "listings", "rentals"],
    ),
    (
        &["car", "auto"],
        &["automotive", "dealership", "electric vehicles", "car reviews"],
    ),
];

/// Static synonyms for a lower-cased term
pub fn table_synonyms(term: &str) -> &'static [&'static str] {
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, syns)| *syns)
        .unwrap_or(&[])
}

/// Stems shorter than this are not offered as variants
const MIN_STEM_CHARS: usize = 4;

/// Plural/singular, `un`-prefix and `-ed`/`-ing` variants of a lower-cased term.
///
/// Stripped stems under four characters are discarded, and `-ed`/`-ing`
/// forms get no plural.
pub fn morphological_variants(term: &str) -> Vec<String> {
    let len = term.chars().count();
    let long_stem = |s: &&str| s.chars().count() >= MIN_STEM_CHARS;
    let ing_stem = term.strip_suffix("ing").filter(long_stem);
    let ed_stem = term.strip_suffix("ed").filter(long_stem);
    let mut variants = Vec::new();

    if ing_stem.is_none() && ed_stem.is_none() {
        if let Some(stem) = term.strip_suffix("ies").filter(|_| len > 4) {
            variants.push(format!("{}y", stem));
        } else if term.ends_with("ss") {
            variants.push(format!("{}es", term));
        } else if let Some(stem) = term.strip_suffix('s').filter(|_| len > 3) {
            variants.push(stem.to_string());
        } else if let Some(stem) = term.strip_suffix('y').filter(|s| !ends_with_vowel(s)) {
            variants.push(format!("{}ies", stem));
        } else {
            variants.push(format!("{}s", term));
        }
    }

    if let Some(rest) = term.strip_prefix("un").filter(long_stem) {
        variants.push(rest.to_string());
    }

    if let Some(stem) = ing_stem {
        variants.push(stem.to_string());
        variants.push(format!("{}ed", stem));
    } else if let Some(stem) = ed_stem {
        variants.push(stem.to_string());
        variants.push(format!("{}ing", stem));
    }

    variants
}

fn ends_with_vowel(s: &str) -> bool {
    matches!(s.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Table synonyms first, then morphology; deduplicated and capped
pub fn synonyms_for(term: &str, cap: usize) -> Vec<String> {
    let lowered = term.to_lowercase();
    let candidates = table_synonyms(&lowered)
        .iter()
        .map(|s| s.to_string())
        .chain(morphological_variants(&lowered));
    dedup_capped(candidates, &[lowered.as_str()], cap)
}

/// Domain, pattern and adjacent-pair concepts for a query
pub fn related_concepts(query: &str, terms: &[String], cap: usize) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut concepts: Vec<String> = Vec::new();

    for (keys, related) in DOMAIN_CONCEPTS {
        if keys.iter().any(|k| lowered.contains(k)) {
            concepts.extend(related.iter().map(|s| s.to_string()));
        }
    }

    concepts.extend(pattern_concepts(&lowered));

    let lowered_terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    concepts.extend(lowered_terms.windows(2).map(|pair| pair.join(" ")));

    dedup_capped(concepts, &[lowered.trim()], cap)
}

fn pattern_concepts(lowered_query: &str) -> Vec<String> {
    let how_to = HOW_TO_RE.get_or_init(|| Regex::new(r"\bhow\s+to\s+(.+)$").unwrap());
    let best = BEST_RE.get_or_init(|| Regex::new(r"\bbest\s+(.+)$").unwrap());
    let what_is =
        WHAT_IS_RE.get_or_init(|| Regex::new(r"\bwhat\s+(?:is|are)\s+(.+)$").unwrap());

    let topic = |re: &Regex| -> Option<String> {
        re.captures(lowered_query)
            .and_then(|c| c.get(1))
            .map(|m| {
                m.as_str()
                    .trim()
                    .trim_end_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .filter(|t| !t.is_empty())
    };

    let mut concepts = Vec::new();
    if let Some(x) = topic(how_to) {
        concepts.push(format!("{} tutorial", x));
        concepts.push(format!("{} guide", x));
        concepts.push(format!("{} step by step", x));
        concepts.push(format!("learn {}", x));
    }
    if let Some(x) = topic(best) {
        concepts.push(format!("top {}", x));
        concepts.push(format!("{} reviews", x));
        concepts.push(format!("{} comparison", x));
        concepts.push(format!("{} rankings", x));
    }
    if let Some(x) = topic(what_is) {
        concepts.push(format!("{} definition", x));
        concepts.push(format!("{} explained", x));
        concepts.push(format!("{} overview", x));
    }
    concepts
}

/// The query with one term swapped for its first synonym, per group
fn alternative_phrases(query: &str, groups: &[SynonymGroup]) -> Vec<String> {
    let words: Vec<&str> = query.split_whitespace().collect();
    let phrases = groups.iter().filter_map(|group| {
        let replacement = group.synonyms.first()?;
        let term = group.term.to_lowercase();
        let swapped: Vec<&str> = words
            .iter()
            .map(|w| {
                let bare = w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
                if bare == term {
                    replacement.as_str()
                } else {
                    *w
                }
            })
            .collect();
        Some(swapped.join(" "))
    });
    dedup_capped(phrases, &[query.trim()], LOCAL_ALTERNATIVE_LIMIT)
}

/// Expand without any network access
pub fn expand_local(query: &str, config: &ExpansionConfig) -> ExpandedQuery {
    if query.trim().is_empty() {
        return ExpandedQuery::passthrough(query);
    }

    let terms = query_terms(query);
    let synonym_groups: Vec<SynonymGroup> = terms
        .iter()
        .map(|term| SynonymGroup {
            term: term.clone(),
            synonyms: synonyms_for(term, config.max_synonyms_per_term),
        })
        .collect();
    let related = related_concepts(query, &terms, config.max_related_concepts);
    let alternatives = alternative_phrases(query, &synonym_groups);

    ExpandedQuery::assemble(
        query,
        synonym_groups,
        related,
        alternatives,
        terms,
        ExpansionSource::Local,
    )
}

/// Trim, drop blanks and excluded values (case-insensitive), dedupe, cap
pub(crate) fn dedup_capped<I>(items: I, exclude: &[&str], cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = exclude.iter().map(|e| e.to_lowercase()).collect();
    let mut out = Vec::new();
    for item in items {
        if out.len() >= cap {
            break;
        }
        let item = item.trim().to_string();
        if item.is_empty() {
            continue;
        }
        if seen.insert(item.to_lowercase()) {
            out.push(item);
        }
    }
    out
}
