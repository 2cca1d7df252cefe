//! Dictionary binary - prints the UI strings for one language as JSON
//!
//! Usage:
//!   cargo run --bin dictionary -- es          # Flattened `key: text` map
//!   cargo run --bin dictionary -- es --nested # Same shape as the JSON files
//!   cargo run --bin dictionary                # Default language
//!
//! An unsupported language code is an error.
//!
//! Optional environment variables:
//! - DICTIONARY_DIR (JSON overrides, `<code>.json`; built-in tables otherwise)

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use site_content::config::Config;
use site_content::i18n::{DictionaryStore, Language, LocaleRegistry};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let nested = args.iter().any(|a| a == "--nested");
    let code = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str);

    let config = Config::from_env()?;
    let registry = LocaleRegistry::builtin();
    let store = DictionaryStore::load(registry, config.dictionary_dir.as_deref())?;

    let lang = select_language(registry, code)?;
    info!("Printing dictionary for {} ({})", lang, registry.label(lang));

    let dictionary = store.get(lang);
    let output = if nested {
        serde_json::to_value(dictionary).context("Failed to serialize dictionary")?
    } else {
        let flat: Map<String, Value> = dictionary
            .entries()
            .into_iter()
            .map(|(key, text)| (key.to_string(), Value::String(text.to_string())))
            .collect();
        Value::Object(flat)
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// The requested language, or the default when none was given.
fn select_language(registry: &LocaleRegistry, code: Option<&str>) -> Result<Language> {
    match code {
        None => Ok(registry.default_language()),
        Some(code) => match registry.get(code) {
            Some(lang) => Ok(lang),
            None => {
                let supported: Vec<&str> = registry.list().iter().map(|c| c.code).collect();
                bail!(
                    "Unknown language code: '{}' (supported: {})",
                    code,
                    supported.join(", ")
                )
            }
        },
    }
}
