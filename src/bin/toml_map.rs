use birthmap::config::toml_config::TomlConfig;
use birthmap::core::ConfigProvider;
use birthmap::utils::{logger, validation::Validate};
use birthmap::{LeafletRenderer, LocalStorage, MapEngine, SparqlFetcher};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-map")]
#[command(about = "Birthplace map pipeline driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "birthmap.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the result limit from the config
    #[arg(long)]
    limit: Option<usize>,

    /// Dry run - show the generated query without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting TOML-based map pipeline");
    tracing::info!("Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(limit) = args.limit {
        config.query.limit = Some(limit);
        tracing::info!("Result limit overridden to: {}", limit);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        println!("🔍 DRY RUN MODE - no request will be sent");
        println!();
        println!("Generated SPARQL query:");
        println!("{}", config.query_spec().to_sparql());
        return Ok(());
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Map: {}", config.map.name);
    if let Some(description) = &config.map.description {
        println!("  Description: {}", description);
    }
    println!("  Endpoint: {}", config.sparql_endpoint());
    println!("  Output: {}", config.output_path());
    println!("  Result limit: {}", config.result_limit());

    let spec = config.query_spec();
    println!(
        "  Pattern: ?person wdt:{} wd:{} / wdt:{} / wdt:{}",
        spec.category_property,
        spec.category_entity,
        spec.birthplace_property,
        spec.coordinate_property
    );

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
