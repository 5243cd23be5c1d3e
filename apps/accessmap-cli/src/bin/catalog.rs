use std::env;
use std::path::PathBuf;

use accessmap_core::catalog::Catalog;
use accessmap_core::config::Config;
use accessmap_core::types::{ServiceCategory, TravelEstimate};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let data_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Config::load().map(|c| c.data_dir()).unwrap_or_else(|_| "data".into()));

    println!("🗺️  accessmap-catalog\n====================");
    println!("Data directory: {}", data_dir.display());

    let catalog = Catalog::load_dir(&data_dir)?;
    println!("\nLoaded {} services", catalog.len());

    let counts = catalog.counts_by_category();
    println!("\n📊 Services per category:");
    for category in ServiceCategory::ALL {
        if let Some(count) = counts.get(&category) {
            println!("  {:<22} {}", category.label(), count);
        }
    }

    // Optional travel estimate between two ids.
    if let (Some(from_id), Some(to_id)) = (args.get(2), args.get(3)) {
        let from = catalog
            .get(from_id)
            .ok_or_else(|| anyhow::anyhow!("unknown service id '{from_id}'"))?;
        let to = catalog
            .get(to_id)
            .ok_or_else(|| anyhow::anyhow!("unknown service id '{to_id}'"))?;
        let est = TravelEstimate::between(from.coordinates, to.coordinates);
        println!("\n🚶 {} → {}", from.name, to.name);
        println!(
            "  {:.1} km, ~{} min walking, ~{} min driving",
            est.distance_km, est.walking_minutes, est.driving_minutes
        );
    }

    Ok(())
}
