use gleaner_index::{aggregate, CorpusStatistics};
use std::path::Path;

fn format_stats(stats: &CorpusStatistics, top: usize) -> String {
    let mut out = format!(
        "Documents: {}\nAverage length: {:.1} tokens\nVocabulary: {} terms\n",
        stats.document_count,
        stats.average_document_length,
        stats.document_frequency.len()
    );

    let common = stats.most_common_terms(top);
    if !common.is_empty() {
        out.push_str("\nMost common terms (document frequency, idf):\n");
        for (term, df) in common {
            out.push_str(&format!("  {:<20} {:>5}  {:.3}\n", term, df, stats.idf(term)));
        }
    }
    out
}

pub fn run(docs: &Path, top: usize) -> anyhow::Result<()> {
    let documents = super::load_documents(docs)?;
    let stats = aggregate(&documents);
    print!("{}", format_stats(&stats, top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_core::ProcessedDocument;

    #[test]
    fn test_format_stats() {
        let stats = aggregate(&[
            ProcessedDocument::new("https://a.com", "", "funding round closed"),
            ProcessedDocument::new("https://b.com", "", "funding news"),
        ]);
        let out = format_stats(&stats, 1);
        assert!(out.contains("Documents: 2"));
        assert!(out.contains("Average length: 2.5 tokens"));
        assert!(out.contains("Vocabulary: 4 terms"));
        assert!(out.contains("funding"));
        assert!(!out.contains("closed"));
    }

    #[test]
    fn test_format_stats_empty() {
        let out = format_stats(&aggregate(&[]), 10);
        assert!(out.contains("Documents: 0"));
        assert!(!out.contains("Most common"));
    }
}
