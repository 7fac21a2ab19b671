use clap::Parser;
use tracing::info;

use finserve_dashboard::{
    api::YahooApi,
    app::App,
    cli::{Cli, expand_path},
    config::DashboardConfig,
    logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let _guard = logger::init(&expand_path(&cli.log_dir))?;

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_path(&expand_path(path))?,
        None => DashboardConfig::default(),
    }
    .with_default_ticker(cli.ticker.clone());
    info!(
        indices = config.indices().len(),
        default_ticker = config.default_ticker().as_str(),
        "starting dashboard"
    );

    let fetch = YahooApi::new()?;
    let mut app = App::new(Box::new(fetch), config, expand_path(&cli.export_dir));
    app.run().await?;

    Ok(())
}
