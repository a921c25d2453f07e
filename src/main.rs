use clap::Parser;
use footage_finder::utils::{logger, validation::Validate};
use footage_finder::{search_links, CliConfig, FinderError, GeminiClient, KeywordSet, KeywordSource};

fn print_category(title: &str, keywords: &[String]) {
    println!("{}:", title);
    if keywords.is_empty() {
        println!("  (none)");
    }
    for keyword in keywords {
        println!("  - {}", keyword);
    }
    println!();
}

fn print_result(set: &KeywordSet, with_links: bool) {
    println!();
    print_category("Literal", &set.literal);
    print_category("Conceptual", &set.conceptual);
    print_category("Emotional", &set.emotional);
    print_category("Technical", &set.technical);
    print_category("Search phrases", &set.search_phrases);

    if with_links {
        println!("Search links (query: \"{}\"):", set.primary_query());
        for (platform, url) in search_links(set) {
            println!("  {:<12} {}", platform.name(), url);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse().with_api_key_from_env();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting footage-finder CLI");
    if config.verbose {
        // The credential stays out of the logs.
        tracing::debug!(
            "Using model {} at {}, api key set: {}",
            config.model,
            config.api_base,
            config.api_key.is_some()
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let with_links = config.links;
    let client = GeminiClient::new(config.clone());

    match client.generate_keywords(&config.description).await {
        Ok(set) => {
            tracing::info!("✅ Keyword generation completed");
            print_result(&set, with_links);
        }
        Err(e) => {
            tracing::error!("❌ Keyword generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());

            // Configuration problems get their own exit code; everything
            // else is one generic failure.
            let exit_code = match e {
                FinderError::Config { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
