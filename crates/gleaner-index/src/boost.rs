//! URL-structure boosts

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

/// Added per query term found in the hostname
pub const HOSTNAME_BOOST: f64 = 0.2;

/// Added per query term found in the path
pub const PATH_BOOST: f64 = 0.1;

/// Additive boosts for one URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boosts {
    pub hostname_boost: f64,
    pub path_boost: f64,
}

impl Boosts {
    /// Multiplier applied to the raw relevance score
    pub fn multiplier(&self) -> f64 {
        1.0 + self.hostname_boost + self.path_boost
    }
}

/// Boost a URL for every term its hostname or path contains.
///
/// Matching is raw substring containment on the lower-cased hostname and
/// percent-decoded path, so a short term like `health` matches
/// `healthtech.com` while `healthcare` does not. Anything that does not parse
/// as an absolute URL with a host gets zero boosts.
pub fn boosts(url: &str, terms: &[String]) -> Boosts {
    let parsed = match Url::parse(url.trim()) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!(url, error = %e, "unparseable url, no boost");
            return Boosts::default();
        }
    };
    let Some(host) = parsed.host_str() else {
        return Boosts::default();
    };

    let host = host.to_lowercase();
    let path = percent_decode_str(parsed.path())
        .decode_utf8_lossy()
        .to_lowercase();
    let mut result = Boosts::default();

    for term in terms {
        let term = term.to_lowercase();
        if term.is_empty() {
            continue;
        }
        if host.contains(&term) {
            result.hostname_boost += HOSTNAME_BOOST;
        }
        if path.contains(&term) {
            result.path_boost += PATH_BOOST;
        }
    }

    result
}
