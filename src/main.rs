use std::error::Error;

use tokio::fs;
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use ticket_stats::{report, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = fs::read_to_string("config.toml").await?;
    let config = Config::from_toml(&config)?;

    tracing_subscriber::registry()
        .with(config.log.level)
        .with(tracing_subscriber::fmt::layer())
        .init();

    report::run(&config).await?;

    Ok(())
}
