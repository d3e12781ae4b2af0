use anyhow::Result;
use tracing::info;

use support_portal::{api, config, db};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("support_portal=info".parse()?)
        )
        .init();

    info!("Starting SupportPortal v{}", env!("CARGO_PKG_VERSION"));

    let cfg = config::load()?;
    info!("Configuration loaded");

    let db_pool = db::init(&cfg).await?;
    info!("Database initialized");

    api::serve(cfg, db_pool).await?;

    info!("SupportPortal stopped");
    Ok(())
}
