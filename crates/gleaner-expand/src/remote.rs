//! Language-model expansion: prompt, API client and response salvage

use crate::error::ExpandError;
use crate::local::dedup_capped;
use async_trait::async_trait;
use gleaner_core::{query_terms, ExpandedQuery, ExpansionConfig, ExpansionSource, SynonymGroup};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

const MAX_QUERY_CHARS: usize = 500;
const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

/// A single-shot text completion backend
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ExpandError>;
}

/// Messages API client
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f64,
}

impl AnthropicClient {
    pub fn new(api_key: &str, config: &ExpansionConfig) -> Result<Self, ExpandError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LanguageModel for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, ExpandError> {
        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": MAX_TOKENS,
                "temperature": self.temperature,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExpandError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        body["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(ExpandError::MissingContent)
    }
}

pub fn build_expansion_prompt(query: &str, config: &ExpansionConfig) -> String {
    let truncated: String = query.chars().take(MAX_QUERY_CHARS).collect();
    format!(
        "Expand this search query to improve web search recall. Return only JSON with: \
         {{\"synonyms\": {{\"<term>\": [\"synonym\", ...]}}, \
         \"relatedConcepts\": [\"concept\", ...], \
         \"alternativePhrases\": [\"phrase\", ...], \
         \"entities\": [\"proper noun or key term\", ...]}}\n\
         Give at most {} synonyms per query term and at most {} related concepts.\n\n\
         Query: {}",
        config.max_synonyms_per_term, config.max_related_concepts, truncated
    )
}

/// Locate the JSON object in a model reply: a fenced block, else the outermost braces
pub fn extract_json_span(text: &str) -> Option<&str> {
    let fence = FENCE_RE.get_or_init(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());
    if let Some(inner) = fence.captures(text).and_then(|c| c.get(1)) {
        let inner = inner.as_str().trim();
        if inner.starts_with('{') {
            return Some(inner);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RemoteExpansion {
    synonyms: HashMap<String, Vec<String>>,
    related_concepts: Vec<String>,
    alternative_phrases: Vec<String>,
    entities: Vec<String>,
}

/// Turn a raw model reply into an expansion, enforcing the configured caps
pub fn parse_response(
    query: &str,
    reply: &str,
    config: &ExpansionConfig,
) -> Result<ExpandedQuery, ExpandError> {
    let span = extract_json_span(reply).ok_or(ExpandError::NoJson)?;
    let remote: RemoteExpansion = serde_json::from_str(span)?;

    let synonyms_by_term: HashMap<String, Vec<String>> = remote
        .synonyms
        .into_iter()
        .map(|(term, syns)| (term.trim().to_lowercase(), syns))
        .collect();

    let terms = query_terms(query);
    let synonym_groups: Vec<SynonymGroup> = terms
        .iter()
        .map(|term| {
            let lowered = term.to_lowercase();
            let synonyms = synonyms_by_term
                .get(&lowered)
                .cloned()
                .unwrap_or_default();
            SynonymGroup {
                term: term.clone(),
                synonyms: dedup_capped(synonyms, &[lowered.as_str()], config.max_synonyms_per_term),
            }
        })
        .collect();

    let related = dedup_capped(remote.related_concepts, &[], config.max_related_concepts);
    let alternatives = dedup_capped(
        remote.alternative_phrases,
        &[query.trim()],
        config.max_related_concepts,
    );
    let mut entities = dedup_capped(remote.entities, &[], usize::MAX);
    if entities.is_empty() {
        entities = terms;
    }

    Ok(ExpandedQuery::assemble(
        query,
        synonym_groups,
        related,
        alternatives,
        entities,
        ExpansionSource::Remote,
    ))
}
