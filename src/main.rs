use clap::Parser;
use menu_client::utils::{logger, validation::Validate};
use menu_client::{CatalogService, CliConfig, MenuItem, RestCatalog};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menu-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = RestCatalog::with_timeout(
        config.api_endpoint.as_str(),
        Duration::from_secs(config.timeout_seconds),
    )?;
    let mut catalog = CatalogService::new(source);

    if let Err(e) = catalog.refresh().await {
        tracing::error!("Failed to load catalog from {}: {}", config.api_endpoint, e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let featured = match (&config.category, config.random) {
        (Some(category_id), _) => catalog.featured_by_category(category_id, config.limit),
        (None, true) => catalog.random_featured(config.limit),
        (None, false) => catalog.featured_dishes(config.limit),
    };

    if featured.is_empty() {
        println!("No featured dishes available.");
        return Ok(());
    }

    println!("✅ Featured dishes:");
    for dish in &featured {
        print_dish(dish);
    }

    Ok(())
}

fn print_dish(dish: &MenuItem) {
    println!(
        "  {} - ${:.2} (rating {:.1}, {} reviews)",
        dish.title, dish.price, dish.rating, dish.reviews
    );
}
