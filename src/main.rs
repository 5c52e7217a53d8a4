use anyhow::Result;
use event_scheduler::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
