pub fn run() -> anyhow::Result<()> {
    println!("gleaner {}", env!("CARGO_PKG_VERSION"));
    println!("Query expansion and TF-IDF/BM25 ranking for crawled documents");
    Ok(())
}
