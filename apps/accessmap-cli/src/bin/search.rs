use std::env;
use std::path::PathBuf;

use accessmap_core::catalog::Catalog;
use accessmap_core::config::Config;
use accessmap_search::rank;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = env::args().collect();
    // Wider shortlist when picking travel endpoints.
    let endpoints = if let Some(i) = args.iter().position(|a| a == "--endpoints") {
        args.remove(i);
        true
    } else {
        false
    };
    if args.len() < 2 {
        eprintln!("Usage: {} [--endpoints] <query> [data_dir]", args[0]);
        eprintln!("Example: {} 'grocery princess' data", args[0]);
        std::process::exit(1);
    }
    let query = &args[1];
    let config = Config::load()?;
    let data_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| config.data_dir());
    let limit = if endpoints {
        config.travel_search_limit()
    } else {
        config.search_limit()
    };

    println!("🔍 accessmap-search\n===================");
    println!("Query: {}", query);
    println!("Data directory: {}", data_dir.display());

    let catalog = Catalog::load_dir(&data_dir)?;
    let hits = rank(query, catalog.all(), limit);

    println!("\n🔍 Found {} results for: \"{}\"", hits.len(), query);
    for (i, service) in hits.iter().enumerate() {
        println!(
            "\n  {}. {}  [{}]",
            i + 1,
            service.name,
            service.category.label()
        );
        println!("     📍 {}", service.address);
        if !service.description.is_empty() {
            println!("     📝 {}", service.description);
        }
    }
    Ok(())
}
