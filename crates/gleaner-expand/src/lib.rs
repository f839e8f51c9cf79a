//! Query expansion via a language model with a deterministic local fallback

mod error;
mod expander;
mod local;
mod remote;

pub use error::ExpandError;
pub use expander::QueryExpander;
pub use local::{expand_local, morphological_variants, related_concepts, synonyms_for, table_synonyms};
pub use remote::{build_expansion_prompt, extract_json_span, parse_response, AnthropicClient, LanguageModel};
