//! Try-remote-then-local query expansion

use crate::local::expand_local;
use crate::remote::{build_expansion_prompt, parse_response, AnthropicClient, LanguageModel};
use gleaner_core::{ExpandedQuery, ExpansionConfig};

/// Expands raw queries; never fails and never retries
pub struct QueryExpander {
    config: ExpansionConfig,
    model: Option<Box<dyn LanguageModel>>,
}

impl QueryExpander {
    /// Use the Messages API when a credential is available, otherwise local only
    pub fn new(config: ExpansionConfig) -> Self {
        let model = config.credential().and_then(|key| {
            match AnthropicClient::new(&key, &config) {
                Ok(client) => Some(Box::new(client) as Box<dyn LanguageModel>),
                Err(e) => {
                    tracing::warn!(error = %e, "could not build language model client, expanding locally");
                    None
                }
            }
        });
        Self { config, model }
    }

    pub fn local_only(config: ExpansionConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    pub fn with_model(config: ExpansionConfig, model: Box<dyn LanguageModel>) -> Self {
        Self {
            config,
            model: Some(model),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand `query`: one remote attempt when configured, else local rules
    pub async fn expand(&self, query: &str) -> ExpandedQuery {
        if query.trim().is_empty() {
            return ExpandedQuery::passthrough(query);
        }

        if let Some(model) = &self.model {
            let prompt = build_expansion_prompt(query, &self.config);
            let outcome = match model.complete(&prompt).await {
                Ok(reply) => parse_response(query, &reply, &self.config),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(expanded) => {
                    tracing::debug!(
                        groups = expanded.synonym_groups.len(),
                        concepts = expanded.related_concepts.len(),
                        "remote expansion"
                    );
                    return expanded;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "remote expansion failed, falling back to local");
                }
            }
        }

        self.expand_local(query)
    }

    pub fn expand_local(&self, query: &str) -> ExpandedQuery {
        expand_local(query, &self.config)
    }
}
