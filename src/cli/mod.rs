use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod list;
pub mod query;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Print all events ordered by start time
    List {},
    /// Search event titles and descriptions
    Query {
        #[arg(long)]
        term: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the events file, overrides SCHEDULER_DATA_PATH
    #[arg(long, global = true)]
    data_path: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let config = match args.data_path {
        Some(path) => AppConfig::new(&path),
        None => AppConfig::default(),
    };

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::List {}) => {
            list::run(&config)?;
        }
        Some(Command::Query { term }) => {
            query::run(term, &config)?;
        }
        None => {}
    }

    Ok(())
}
