//! Search history records

use crate::config::Algorithm;
use crate::types::ExpansionSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed `rank` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub timestamp: DateTime<Utc>,
    pub query: String,
    #[serde(default)]
    pub expanded_query_text: String,
    pub expansion_source: ExpansionSource,
    pub algorithm: Algorithm,
    pub document_count: usize,
    pub result_count: usize,
    #[serde(default)]
    pub top_url: Option<String>,
    #[serde(default)]
    pub top_score: Option<f64>,
}
