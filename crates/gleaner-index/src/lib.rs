//! Corpus statistics, TF-IDF/BM25 scoring, URL boosts, snippets and ranking

mod bm25;
mod boost;
mod rank;
mod scorer;
mod snippet;
mod stats;
mod tfidf;

pub use bm25::Bm25;
pub use boost::{boosts, Boosts, HOSTNAME_BOOST, PATH_BOOST};
pub use rank::Ranker;
pub use scorer::{Scorer, TermCounts};
pub use snippet::{snippet, truncate, SNIPPET_MAX_CHARS};
pub use stats::{aggregate, CorpusStatistics};
pub use tfidf::TfIdf;
