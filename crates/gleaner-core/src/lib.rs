//! Shared types, configuration and file utilities for gleaner

mod config;
mod history;
mod io;
mod paths;
mod tokens;
mod types;

pub use config::{
    Algorithm, Bm25Params, Config, ConfigError, ExpansionConfig, CREDENTIAL_ENV_VAR,
};
pub use history::SearchRecord;
pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use paths::Paths;
pub use tokens::{query_terms, tokenize};
pub use types::{ExpandedQuery, ExpansionSource, ProcessedDocument, RankedResult, SynonymGroup};
