use gleaner_core::{read_jsonl, Paths, SearchRecord};
use std::collections::BTreeMap;

fn compute_stats(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return "No searches to analyze.".to_string();
    }
    let total = records.len();
    let avg_docs = records.iter().map(|r| r.document_count).sum::<usize>() as f64 / total as f64;
    let avg_results = records.iter().map(|r| r.result_count).sum::<usize>() as f64 / total as f64;
    let empty = records.iter().filter(|r| r.result_count == 0).count();

    let mut by_algorithm: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
    for r in records {
        *by_algorithm.entry(r.algorithm.to_string()).or_default() += 1;
        *by_source
            .entry(format!("{:?}", r.expansion_source).to_lowercase())
            .or_default() += 1;
    }

    let join = |m: &BTreeMap<String, usize>| {
        m.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "Total searches: {}\n\
         Avg documents: {:.1}\n\
         Avg results: {:.1}\n\
         Empty result sets: {}\n\
         Algorithms: {}\n\
         Expansion: {}",
        total,
        avg_docs,
        avg_results,
        empty,
        join(&by_algorithm),
        join(&by_source)
    )
}

fn format_recent(records: &[SearchRecord], limit: usize) -> String {
    let recent: Vec<&SearchRecord> = records.iter().rev().take(limit).collect();
    let mut out = format!("Recent Searches (last {})\n", recent.len());
    out.push_str("========================\n");
    for r in recent {
        out.push_str(&format!(
            "  {} | {} | {} docs -> {} results | top: {}\n",
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.query,
            r.document_count,
            r.result_count,
            r.top_url.as_deref().unwrap_or("-"),
        ));
    }
    out
}

pub fn run(stats: bool, limit: usize, paths: &Paths) -> anyhow::Result<()> {
    let records: Vec<SearchRecord> = read_jsonl(&paths.history_file())?;

    if records.is_empty() {
        println!("No search history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(&records));
    } else {
        print!("{}", format_recent(&records, limit));
    }
    Ok(())
}
