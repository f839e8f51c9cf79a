//! TF-IDF relevance scoring

use crate::scorer::TermCounts;
use crate::stats::CorpusStatistics;

/// Raw term frequency times smoothed IDF, damped by `sqrt(doc_len)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TfIdf;

impl TfIdf {
    pub fn new() -> Self {
        Self
    }

    /// Unnormalized contribution of a single term
    pub fn term_score(&self, tf: usize, idf: f64) -> f64 {
        tf as f64 * idf
    }

    pub fn score(&self, doc: &TermCounts, terms: &[String], stats: &CorpusStatistics) -> f64 {
        if doc.is_empty() {
            return 0.0;
        }

        let sum: f64 = terms
            .iter()
            .map(|term| self.term_score(doc.tf(term), stats.idf(term)))
            .sum();

        sum / (doc.len() as f64).sqrt()
    }
}
