#![allow(dead_code)]

use gleaner_core::{append_jsonl, Config, ProcessedDocument};
use std::path::Path;

pub fn sample_config() -> Config {
    let mut config = Config::new();
    config.max_results = 5;
    config
}

pub fn sample_documents() -> Vec<ProcessedDocument> {
    vec![
        ProcessedDocument::new(
            "https://healthtech.com/about",
            "HealthTech",
            "HealthTech is a healthcare startup founded in 2018 in Boston.",
        ),
        ProcessedDocument::new(
            "https://news.example.com/funding/series-a",
            "Series A roundup",
            "Funding news for the week. Three startups closed funding rounds! \
             Investors remain cautious about healthcare.",
        ),
        ProcessedDocument::new(
            "https://cars.example.org/reviews",
            "Fast cars reviewed",
            "We drove the fastest cars of the year. Quick acceleration matters. \
             Rapid charging is the new normal for electric vehicles.",
        ),
        ProcessedDocument::new("https://empty.example.net/", "Empty", ""),
        ProcessedDocument::new(
            "not a url",
            "Broken link",
            "A startup page whose crawler lost the address.",
        ),
    ]
}

pub fn write_documents(path: &Path, documents: &[ProcessedDocument]) {
    for doc in documents {
        append_jsonl(path, doc).unwrap();
    }
}
