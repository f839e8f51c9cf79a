use crate::cli::OutputFormat;
use gleaner_core::{
    append_jsonl, Algorithm, Config, ExpandedQuery, Paths, RankedResult, SearchRecord,
};
use gleaner_index::Ranker;
use std::path::Path;

pub struct RankOptions {
    pub algorithm: Option<Algorithm>,
    pub limit: Option<usize>,
    pub local: bool,
    pub format: OutputFormat,
    pub record_history: bool,
}

/// Flags override the loaded config
fn apply_overrides(mut config: Config, options: &RankOptions) -> Config {
    if let Some(algorithm) = options.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(limit) = options.limit {
        config.max_results = limit;
    }
    config
}

fn format_table(query: &ExpandedQuery, results: &[RankedResult]) -> String {
    let mut out = format!("Query: {}\nExpanded: {}\n", query.original, query.expanded_query_text);
    if results.is_empty() {
        out.push_str("\nNo results.\n");
        return out;
    }

    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{:>2}. {:.4}  {}\n    score {:.4}  host +{:.2}  path +{:.2}\n",
            i + 1,
            r.final_score,
            r.url,
            r.score,
            r.hostname_boost,
            r.path_boost
        ));
        if !r.title.is_empty() {
            out.push_str(&format!("    {}\n", r.title));
        }
        if !r.snippet.is_empty() {
            out.push_str(&format!("    {}\n", r.snippet));
        }
    }
    out
}

fn search_record(
    query: &ExpandedQuery,
    algorithm: Algorithm,
    document_count: usize,
    results: &[RankedResult],
) -> SearchRecord {
    SearchRecord {
        timestamp: chrono::Utc::now(),
        query: query.original.clone(),
        expanded_query_text: query.expanded_query_text.clone(),
        expansion_source: query.source,
        algorithm,
        document_count,
        result_count: results.len(),
        top_url: results.first().map(|r| r.url.clone()),
        top_score: results.first().map(|r| r.final_score),
    }
}

pub fn run(
    query: &str,
    docs: &Path,
    options: &RankOptions,
    config: Config,
    paths: &Paths,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, options);
    let documents = super::load_documents(docs)?;
    tracing::info!(documents = documents.len(), algorithm = %config.algorithm, "ranking");

    let expanded = super::expand_query(query, options.local, &config)?;
    let ranker = Ranker::new(&config);
    let results = ranker.rank(&documents, &expanded);

    match options.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => print!("{}", format_table(&expanded, &results)),
    }

    if options.record_history {
        let record = search_record(&expanded, ranker.algorithm(), documents.len(), &results);
        if let Err(e) = append_jsonl(&paths.history_file(), &record) {
            tracing::warn!(error = %e, "failed to record search history");
        }
    }

    Ok(())
}
