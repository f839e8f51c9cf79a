use gleaner_core::Config;

pub fn run(query: &str, local: bool, config: &Config) -> anyhow::Result<()> {
    let expanded = super::expand_query(query, local, config)?;
    println!("{}", serde_json::to_string_pretty(&expanded)?);
    Ok(())
}
