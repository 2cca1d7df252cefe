use anyhow::{bail, Result};
use site_content::config::Config;
use site_content::content::{loader, ContentSet, ContentValidator};
use site_content::i18n::{build_localized_path, DateFormatter, DictionaryStore, LocaleRegistry};
use tracing::{info, warn};

/// Articles listed per language in the run summary
const LATEST_LIMIT: usize = 3;

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_content=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting content check");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Locale registry, dictionaries and date formats
    let registry = LocaleRegistry::builtin();
    let dictionaries = DictionaryStore::load(registry, config.dictionary_dir.as_deref())?;
    let formatter = DateFormatter::new(registry)?;

    // Step 2: Load and validate content
    info!("Loading content from {}", config.content_dir.display());
    let raw = loader::load_dir(&config.content_dir)?;
    let content = ContentSet::build(&raw, &ContentValidator::new(registry));

    for error in content.errors() {
        warn!("{}", error);
    }

    // Step 3: Summarize what each language's landing page would list
    for lang in registry.languages() {
        let strings = dictionaries.get(lang);
        let latest = content.latest_articles(lang, LATEST_LIMIT);
        info!(
            "[{}] {}: {} articles ({})",
            lang,
            strings.latest_articles.title,
            content.articles_for(lang).len(),
            registry.label(lang)
        );

        for article in latest {
            info!(
                "[{}]   {} | {} | {}",
                lang,
                formatter.format_date(article.entity.date, lang),
                article.entity.title,
                build_localized_path(lang, &format!("/blog/{}", article.entity.key))
            );
        }
    }

    let report = content.report(&raw);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if config.strict && !report.is_clean() {
        bail!("{} content records were rejected", report.rejected.len());
    }

    info!("Content check complete");
    Ok(())
}
