//! Records flowing through the ranking pipeline

use crate::tokens::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Plain-text document handed over by the content processor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Unique within a search batch
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl ProcessedDocument {
    pub fn new(url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Which expansion branch produced an [`ExpandedQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionSource {
    /// Language-model response
    Remote,
    /// Static tables and morphology
    Local,
    /// Nothing to expand; the query is echoed
    Passthrough,
}

/// Synonyms for one term of the original query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub term: String,
    pub synonyms: Vec<String>,
}

/// A query plus the terms derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedQuery {
    pub original: String,
    pub synonym_groups: Vec<SynonymGroup>,
    pub related_concepts: Vec<String>,
    pub alternative_phrases: Vec<String>,
    pub entities: Vec<String>,
    /// Broadened search string for the crawler; always starts with `original`
    pub expanded_query_text: String,
    pub source: ExpansionSource,
}

impl ExpandedQuery {
    /// Separator used when joining the expanded search string
    pub const OR_SEPARATOR: &'static str = " OR ";

    /// Related concepts carried into the expanded search string
    pub const TEXT_CONCEPT_LIMIT: usize = 3;

    /// Minimal expansion that echoes the query
    pub fn passthrough(query: &str) -> Self {
        Self {
            original: query.to_string(),
            synonym_groups: Vec::new(),
            related_concepts: Vec::new(),
            alternative_phrases: Vec::new(),
            entities: Vec::new(),
            expanded_query_text: query.to_string(),
            source: ExpansionSource::Passthrough,
        }
    }

    /// Assemble an expansion and derive its search string
    pub fn assemble(
        original: &str,
        synonym_groups: Vec<SynonymGroup>,
        related_concepts: Vec<String>,
        alternative_phrases: Vec<String>,
        entities: Vec<String>,
        source: ExpansionSource,
    ) -> Self {
        let expanded_query_text =
            build_expanded_text(original, &synonym_groups, &related_concepts);
        Self {
            original: original.to_string(),
            synonym_groups,
            related_concepts,
            alternative_phrases,
            entities,
            expanded_query_text,
            source,
        }
    }

    /// Every synonym across all groups, in group order
    pub fn flattened_synonyms(&self) -> impl Iterator<Item = &str> {
        self.synonym_groups
            .iter()
            .flat_map(|g| g.synonyms.iter().map(String::as_str))
    }

    /// Terms matched against documents and URLs.
    ///
    /// Union of the tokenized original query, every synonym and every entity;
    /// lower-cased, longer than two characters, deduplicated in first-seen
    /// order. The fixed order keeps score sums reproducible.
    pub fn scoring_terms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        let candidates = tokenize(&self.original)
            .into_iter()
            .chain(self.flattened_synonyms().map(str::to_lowercase))
            .chain(self.entities.iter().map(|e| e.to_lowercase()));

        for term in candidates {
            let term = term.trim().to_string();
            if term.chars().count() <= 2 {
                continue;
            }
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }

        terms
    }
}

fn build_expanded_text(
    original: &str,
    synonym_groups: &[SynonymGroup],
    related_concepts: &[String],
) -> String {
    let mut parts: Vec<&str> = vec![original];
    parts.extend(
        synonym_groups
            .iter()
            .flat_map(|g| g.synonyms.iter().map(String::as_str)),
    );
    parts.extend(
        related_concepts
            .iter()
            .take(ExpandedQuery::TEXT_CONCEPT_LIMIT)
            .map(String::as_str),
    );
    parts.join(ExpandedQuery::OR_SEPARATOR)
}

/// One scored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// Raw relevance score before boosts
    pub score: f64,
    /// `score * (1 + hostname_boost + path_boost)`
    pub final_score: f64,
    pub hostname_boost: f64,
    pub path_boost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(term: &str, synonyms: &[&str]) -> SynonymGroup {
        SynonymGroup {
            term: term.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_passthrough_echoes_query() {
        let q = ExpandedQuery::passthrough("fintech news");
        assert_eq!(q.original, "fintech news");
        assert_eq!(q.expanded_query_text, "fintech news");
        assert!(q.synonym_groups.is_empty());
        assert_eq!(q.source, ExpansionSource::Passthrough);
    }

    #[test]
    fn test_expanded_text_starts_with_original() {
        let q = ExpandedQuery::assemble(
            "fast cars",
            vec![group("fast", &["quick", "rapid"]), group("cars", &["vehicles"])],
            vec![
                "fast cars".to_string(),
                "automotive".to_string(),
                "dealership".to_string(),
                "electric vehicles".to_string(),
            ],
            Vec::new(),
            Vec::new(),
            ExpansionSource::Local,
        );
        assert!(q.expanded_query_text.starts_with("fast cars"));
        assert_eq!(
            q.expanded_query_text,
            "fast cars OR quick OR rapid OR vehicles OR fast cars OR automotive OR dealership"
        );
    }

    #[test]
    fn test_expanded_text_without_extras_is_original() {
        let q = ExpandedQuery::assemble(
            "zzz",
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            ExpansionSource::Local,
        );
        assert_eq!(q.expanded_query_text, "zzz");
    }

    #[test]
    fn test_scoring_terms_union_dedup() {
        let q = ExpandedQuery::assemble(
            "Healthcare startup",
            vec![group("startup", &["Venture", "new company", "up"])],
            Vec::new(),
            Vec::new(),
            vec!["Boston".to_string(), "startup".to_string()],
            ExpansionSource::Local,
        );
        assert_eq!(
            q.scoring_terms(),
            vec!["healthcare", "startup", "venture", "new company", "boston"]
        );
    }

    #[test]
    fn test_ranked_result_serializes_camel_case() {
        let r = RankedResult {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            snippet: String::new(),
            score: 1.0,
            final_score: 1.2,
            hostname_boost: 0.2,
            path_boost: 0.0,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["finalScore"], 1.2);
        assert_eq!(json["hostnameBoost"], 0.2);
    }

    #[test]
    fn test_document_defaults_missing_fields() {
        let doc: ProcessedDocument = serde_json::from_str(r#"{"url": "https://x.io"}"#).unwrap();
        assert_eq!(doc.title, "");
        assert_eq!(doc.text, "");
    }
}
