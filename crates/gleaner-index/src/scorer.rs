//! Relevance scoring dispatch

use crate::bm25::Bm25;
use crate::stats::CorpusStatistics;
use crate::tfidf::TfIdf;
use gleaner_core::{tokenize, Algorithm, Bm25Params, ExpandedQuery, ProcessedDocument};
use std::collections::HashMap;

/// Token counts for one document
#[derive(Debug, Clone, Default)]
pub struct TermCounts {
    counts: HashMap<String, usize>,
    len: usize,
}

impl TermCounts {
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let len = tokens.len();
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts, len }
    }

    /// Exact (already lower-cased) token matches
    pub fn tf(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Document length in tokens
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The configured scoring algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scorer {
    Bm25(Bm25),
    TfIdf(TfIdf),
}

impl Scorer {
    pub fn new(algorithm: Algorithm, params: Bm25Params) -> Self {
        match algorithm {
            Algorithm::Bm25 => Scorer::Bm25(Bm25::new(params)),
            Algorithm::TfIdf => Scorer::TfIdf(TfIdf::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Scorer::Bm25(_) => Algorithm::Bm25,
            Scorer::TfIdf(_) => Algorithm::TfIdf,
        }
    }

    /// Score pre-counted document tokens against already-derived terms
    pub fn score_counts(&self, doc: &TermCounts, terms: &[String], stats: &CorpusStatistics) -> f64 {
        match self {
            Scorer::Bm25(bm25) => bm25.score(doc, terms, stats),
            Scorer::TfIdf(tfidf) => tfidf.score(doc, terms, stats),
        }
    }

    /// Score one document for an expanded query
    pub fn score(
        &self,
        document: &ProcessedDocument,
        query: &ExpandedQuery,
        stats: &CorpusStatistics,
    ) -> f64 {
        let counts = TermCounts::from_text(&document.text);
        self.score_counts(&counts, &query.scoring_terms(), stats)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Algorithm::default(), Bm25Params::default())
    }
}
