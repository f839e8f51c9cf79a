//! Per-search corpus statistics

use gleaner_core::{tokenize, ProcessedDocument};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Aggregates over one search batch.
///
/// Built fresh for every search: the document pool differs per query, so
/// frequencies from an earlier batch would skew IDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStatistics {
    /// Lower-case term -> number of documents containing it
    pub document_frequency: HashMap<String, usize>,
    pub document_count: usize,
    /// Mean tokens per document
    pub average_document_length: f64,
}

impl CorpusStatistics {
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency, `ln(1 + N / (df + 1))`.
    ///
    /// Never negative and never divides by zero; 0 for an empty corpus.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.document_frequency(term) as f64;
        (1.0 + self.document_count as f64 / (df + 1.0)).ln()
    }

    /// Terms ordered by descending document frequency, ties alphabetical
    pub fn most_common_terms(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<(&str, usize)> = self
            .document_frequency
            .iter()
            .map(|(t, &df)| (t.as_str(), df))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(limit);
        terms
    }
}

/// Compute document frequencies, count and average length for a batch
pub fn aggregate(documents: &[ProcessedDocument]) -> CorpusStatistics {
    let mut document_frequency: HashMap<String, usize> = HashMap::new();
    let mut total_tokens = 0usize;

    for doc in documents {
        let tokens = tokenize(&doc.text);
        total_tokens += tokens.len();

        let unique: HashSet<String> = tokens.into_iter().collect();
        for token in unique {
            *document_frequency.entry(token).or_insert(0) += 1;
        }
    }

    let document_count = documents.len();
    let average_document_length = total_tokens as f64 / document_count.max(1) as f64;

    tracing::debug!(
        documents = document_count,
        vocabulary = document_frequency.len(),
        avg_len = average_document_length,
        "aggregated corpus statistics"
    );

    CorpusStatistics {
        document_frequency,
        document_count,
        average_document_length,
    }
}
