use birthmap::core::ConfigProvider;
use birthmap::utils::{logger, validation::Validate};
use birthmap::{CliConfig, LeafletRenderer, LocalStorage, MapEngine, SparqlFetcher};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting birthmap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let renderer = LeafletRenderer::new(
        storage,
        config.output_path().to_string(),
        config.tile_url().to_string(),
    );

    let fetcher = SparqlFetcher::new(config.sparql_endpoint().to_string());
    let engine = MapEngine::new(config.query_spec(), fetcher, renderer);

    match engine.run().await {
        Ok(output_path) => {
            let marker_count = engine.store().current().records.len();
            tracing::info!("✅ Map pipeline completed successfully!");
            println!("✅ Map rendered with {} markers", marker_count);
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Map pipeline failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
