pub mod expand;
pub mod history;
pub mod init;
pub mod rank;
pub mod stats;
pub mod version;

use anyhow::Context;
use gleaner_core::{read_jsonl, Config, ExpandedQuery, Paths, ProcessedDocument};
use gleaner_expand::QueryExpander;
use std::collections::HashSet;
use std::path::Path;

/// Explicit config path must exist; the default location may be absent
pub fn load_config(explicit: Option<&Path>, paths: &Paths) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&paths.config_file())?,
    };
    Ok(config)
}

/// Read a JSONL document batch, keeping the first record per URL
pub fn load_documents(path: &Path) -> anyhow::Result<Vec<ProcessedDocument>> {
    anyhow::ensure!(path.exists(), "documents file not found: {}", path.display());

    let records: Vec<ProcessedDocument> = read_jsonl(path)
        .with_context(|| format!("failed to read documents from {}", path.display()))?;

    let mut seen = HashSet::new();
    let mut documents = Vec::with_capacity(records.len());
    for doc in records {
        if seen.insert(doc.url.clone()) {
            documents.push(doc);
        } else {
            tracing::warn!(url = %doc.url, "duplicate url in batch, keeping first");
        }
    }
    Ok(documents)
}

/// Run the expander to completion on a current-thread runtime
pub fn expand_query(query: &str, local: bool, config: &Config) -> anyhow::Result<ExpandedQuery> {
    let expansion = config.query_expansion.clone();
    let expander = if local {
        QueryExpander::local_only(expansion)
    } else {
        QueryExpander::new(expansion)
    };

    if !expander.has_remote() {
        return Ok(expander.expand_local(query));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(expander.expand(query)))
}
