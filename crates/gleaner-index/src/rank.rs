//! Two-phase ranking: aggregate the batch, then score each document

use crate::boost::boosts;
use crate::scorer::{Scorer, TermCounts};
use crate::snippet::snippet;
use crate::stats::{aggregate, CorpusStatistics};
use gleaner_core::{Algorithm, Config, ExpandedQuery, ProcessedDocument, RankedResult};
use std::cmp::Ordering;

/// Ranks a batch of documents for one expanded query
#[derive(Debug, Clone)]
pub struct Ranker {
    scorer: Scorer,
    max_results: usize,
}

impl Ranker {
    pub fn new(config: &Config) -> Self {
        Self {
            scorer: Scorer::new(config.algorithm, config.bm25_params),
            max_results: config.max_results,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.scorer.algorithm()
    }

    /// Rank `documents`, best first, keeping at most `max_results`.
    ///
    /// Never fails: empty text scores 0, malformed URLs get no boost and an
    /// empty batch yields an empty list.
    pub fn rank(&self, documents: &[ProcessedDocument], query: &ExpandedQuery) -> Vec<RankedResult> {
        let mut results = self.rank_all(documents, query);
        results.truncate(self.max_results);
        results
    }

    /// Rank every document without truncation
    pub fn rank_all(
        &self,
        documents: &[ProcessedDocument],
        query: &ExpandedQuery,
    ) -> Vec<RankedResult> {
        if documents.is_empty() {
            return Vec::new();
        }

        let stats = aggregate(documents);
        let terms = query.scoring_terms();
        tracing::debug!(
            documents = documents.len(),
            terms = terms.len(),
            algorithm = %self.scorer.algorithm(),
            "ranking batch"
        );

        let mut results: Vec<RankedResult> = documents
            .iter()
            .map(|doc| self.rank_one(doc, &terms, &stats))
            .collect();

        sort_by_final_score(&mut results);
        results
    }

    fn rank_one(
        &self,
        doc: &ProcessedDocument,
        terms: &[String],
        stats: &CorpusStatistics,
    ) -> RankedResult {
        let counts = TermCounts::from_text(&doc.text);
        let score = self.scorer.score_counts(&counts, terms, stats);
        let boost = boosts(&doc.url, terms);

        RankedResult {
            url: doc.url.clone(),
            title: doc.title.clone(),
            snippet: snippet(&doc.text, terms),
            score,
            final_score: score * boost.multiplier(),
            hostname_boost: boost.hostname_boost,
            path_boost: boost.path_boost,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Stable descending sort; NaN sorts last
fn sort_by_final_score(results: &mut [RankedResult]) {
    results.sort_by(|a, b| match (a.final_score.is_nan(), b.final_score.is_nan()) {
        (false, false) => b
            .final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(url: &str, title: &str, text: &str) -> ProcessedDocument {
        ProcessedDocument::new(url, title, text)
    }

    fn ranker(algorithm: Algorithm) -> Ranker {
        let config = Config {
            algorithm,
            ..Config::default()
        };
        Ranker::new(&config)
    }

    #[test]
    fn test_rank_empty() {
        let results = Ranker::default().rank(&[], &ExpandedQuery::passthrough("anything"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_rank_healthtech_scenario() {
        let docs = vec![doc(
            "https://healthtech.com/about",
            "HealthTech",
            "HealthTech is a healthcare startup founded in 2018 in Boston.",
        )];
        let query = ExpandedQuery::passthrough("healthcare startup");

        for algorithm in [Algorithm::Bm25, Algorithm::TfIdf] {
            let results = ranker(algorithm).rank(&docs, &query);
            assert_eq!(results.len(), 1);
            let r = &results[0];
            assert!(r.score > 0.0);
            assert_eq!(r.hostname_boost, 0.0);
            assert_eq!(r.path_boost, 0.0);
            assert_eq!(r.final_score, r.score);
            assert_eq!(
                r.snippet,
                "HealthTech is a healthcare startup founded in 2018 in Boston"
            );
            assert_eq!(r.title, "HealthTech");
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let docs = vec![
            doc("https://a.com/x", "A", "nothing relevant here"),
            doc("https://b.com/funding", "B", "funding funding round"),
            doc("https://c.com/y", "C", "one funding mention among many other words"),
            doc("https://funding.io/", "D", "funding"),
        ];
        let results = ranker(Algorithm::Bm25).rank(&docs, &ExpandedQuery::passthrough("funding"));
        assert_eq!(results.len(), 4);
        for pair in results.windows(2) {
            assert!(pair[0].final_score >= pair[1].final_score);
        }
        assert_eq!(results.last().unwrap().url, "https://a.com/x");
    }

    #[test]
    fn test_rank_boost_applied() {
        let docs = vec![
            doc("https://plain.com/", "", "funding news"),
            doc("https://funding.com/", "", "funding news"),
        ];
        let results = ranker(Algorithm::TfIdf).rank(&docs, &ExpandedQuery::passthrough("funding"));
        assert_eq!(results[0].url, "https://funding.com/");
        assert!((results[0].hostname_boost - 0.2).abs() < 1e-12);
        assert!((results[0].final_score - results[0].score * 1.2).abs() < 1e-12);
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let docs = vec![
            doc("https://first.com/", "", "nothing"),
            doc("https://second.com/", "", "nothing"),
            doc("https://third.com/", "", "nothing"),
        ];
        let results = Ranker::default().rank(&docs, &ExpandedQuery::passthrough("zebra"));
        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://first.com/", "https://second.com/", "https://third.com/"]
        );
    }

    #[test]
    fn test_rank_truncates_to_max_results() {
        let docs: Vec<_> = (0..20)
            .map(|i| doc(&format!("https://site{}.com/", i), "", "funding"))
            .collect();
        let config = Config {
            max_results: 5,
            ..Config::default()
        };
        let ranker = Ranker::new(&config);
        let query = ExpandedQuery::passthrough("funding");
        assert_eq!(ranker.rank(&docs, &query).len(), 5);
        assert_eq!(ranker.rank_all(&docs, &query).len(), 20);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let docs = vec![
            doc("https://a.com/startup", "A", "startup funding growth. More startup news!"),
            doc("https://b.com/", "B", "healthcare startup in boston"),
            doc("not a url", "C", ""),
        ];
        let query = ExpandedQuery::passthrough("startup funding healthcare");
        let ranker = ranker(Algorithm::Bm25);
        assert_eq!(ranker.rank(&docs, &query), ranker.rank(&docs, &query));
    }

    #[test]
    fn test_sort_puts_nan_last() {
        let make = |url: &str, final_score: f64| RankedResult {
            url: url.to_string(),
            title: String::new(),
            snippet: String::new(),
            score: final_score,
            final_score,
            hostname_boost: 0.0,
            path_boost: 0.0,
        };
        let mut results = vec![make("nan", f64::NAN), make("low", 0.1), make("high", 1.0)];
        sort_by_final_score(&mut results);
        let urls: Vec<_> = results.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["high", "low", "nan"]);
    }
}
