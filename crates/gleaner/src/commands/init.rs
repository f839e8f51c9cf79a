use anyhow::Context;
use gleaner_core::Config;
use std::path::Path;

/// Write a complete config file, keeping values from an existing one unless `force`
pub fn run(target: &Path, force: bool) -> anyhow::Result<()> {
    let config = if target.exists() && !force {
        Config::load(target)?
    } else {
        Config::default()
    };

    config
        .save(target)
        .with_context(|| format!("failed to write config {}", target.display()))?;

    println!("✓ Wrote config to {}", target.display());
    println!("  algorithm: {}", config.algorithm);
    println!("  maxResults: {}", config.max_results);
    if config.query_expansion.credential().is_none() {
        println!(
            "  no language model credential; set queryExpansion.languageModelCredential \
             or {} for remote expansion",
            gleaner_core::CREDENTIAL_ENV_VAR
        );
    }
    Ok(())
}
