use anyhow::Result;
use push_relay::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
