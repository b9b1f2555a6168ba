use anyhow::Result;
use tracing::info;
use vec_loader::logging::setup_logging;
use vec_loader::services::database::create_mongo_client;
use vec_loader::{Loader, LoaderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let config = LoaderConfig::default();
    let mongo_client = create_mongo_client(&config.mongo_url).await?;
    let loader = Loader::new(&mongo_client, &config);

    let reports = loader.run(&mut std::io::stdout().lock()).await?;
    let total: u64 = reports.iter().map(|r| r.inserted).sum();
    info!(collections = reports.len(), documents = total, "load finished");
    Ok(())
}
