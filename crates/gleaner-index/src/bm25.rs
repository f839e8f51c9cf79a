//! BM25 relevance scoring

use crate::scorer::TermCounts;
use crate::stats::CorpusStatistics;
use gleaner_core::Bm25Params;

/// Saturating, length-normalized term weighting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25 {
    k1: f64,
    b: f64,
}

impl Bm25 {
    pub fn new(params: Bm25Params) -> Self {
        Self {
            k1: params.k1,
            b: params.b,
        }
    }

    /// Contribution of a single term.
    ///
    /// An empty corpus reports an average length of 0; it is clamped to 1 so
    /// the length ratio stays finite.
    pub fn term_score(&self, tf: usize, idf: f64, doc_len: usize, avg_doc_len: f64) -> f64 {
        if tf == 0 {
            return 0.0;
        }
        let tf = tf as f64;
        let avg = avg_doc_len.max(1.0);
        let norm = 1.0 - self.b + self.b * (doc_len as f64 / avg);
        idf * (tf * (self.k1 + 1.0)) / (tf + self.k1 * norm)
    }

    pub fn score(&self, doc: &TermCounts, terms: &[String], stats: &CorpusStatistics) -> f64 {
        terms
            .iter()
            .map(|term| {
                self.term_score(
                    doc.tf(term),
                    stats.idf(term),
                    doc.len(),
                    stats.average_document_length,
                )
            })
            .sum()
    }
}

impl Default for Bm25 {
    fn default() -> Self {
        Self::new(Bm25Params::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::aggregate;
    use gleaner_core::ProcessedDocument;

    fn doc(url: &str, text: &str) -> ProcessedDocument {
        ProcessedDocument::new(url, "", text)
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bm25_higher_tf_scores_higher() {
        // Equal length, both contain "funding"
        let a = doc("https://a.com", "funding funding funding seed round");
        let b = doc("https://b.com", "funding series alpha beta gamma");
        let stats = aggregate(&[a.clone(), b.clone()]);
        assert_eq!(stats.document_frequency("funding"), 2);

        let bm25 = Bm25::default();
        let q = terms(&["funding"]);
        let score_a = bm25.score(&TermCounts::from_text(&a.text), &q, &stats);
        let score_b = bm25.score(&TermCounts::from_text(&b.text), &q, &stats);
        assert!(score_a > score_b, "{} <= {}", score_a, score_b);
    }

    #[test]
    fn test_bm25_saturates() {
        let bm25 = Bm25::default();
        let one = bm25.term_score(1, 1.0, 10, 10.0);
        let ten = bm25.term_score(10, 1.0, 10, 10.0);
        let hundred = bm25.term_score(100, 1.0, 10, 10.0);
        assert!(ten > one);
        assert!(hundred - ten < ten - one);
        // Upper bound is idf * (k1 + 1)
        assert!(hundred < 2.2);
    }

    #[test]
    fn test_bm25_rarer_term_contributes_more() {
        let bm25 = Bm25::default();
        let stats = aggregate(&[
            doc("https://a.com", "rare common"),
            doc("https://b.com", "common"),
            doc("https://c.com", "common"),
        ]);
        let rare = bm25.term_score(1, stats.idf("rare"), 2, stats.average_document_length);
        let common = bm25.term_score(1, stats.idf("common"), 2, stats.average_document_length);
        assert!(rare > common);
    }

    #[test]
    fn test_bm25_longer_document_penalized() {
        let bm25 = Bm25::default();
        let short = bm25.term_score(2, 1.0, 5, 10.0);
        let long = bm25.term_score(2, 1.0, 20, 10.0);
        assert!(short > long);
    }

    #[test]
    fn test_bm25_no_length_normalization_when_b_zero() {
        let bm25 = Bm25::new(Bm25Params { k1: 1.2, b: 0.0 });
        assert_eq!(
            bm25.term_score(2, 1.0, 5, 10.0),
            bm25.term_score(2, 1.0, 50, 10.0)
        );
    }

    #[test]
    fn test_bm25_empty_corpus_is_finite() {
        let stats = aggregate(&[]);
        let bm25 = Bm25::default();
        let score = bm25.score(
            &TermCounts::from_text("anything at all"),
            &terms(&["anything"]),
            &stats,
        );
        assert!(score.is_finite());
        assert_eq!(score, 0.0);
    }
}
