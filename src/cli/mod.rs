use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod notify;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the background worker and delivery API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Show a test notification through the desktop notifier
    Notify {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Notify { title, body }) => {
            notify::run(title, body)?;
        }
        None => {}
    }

    Ok(())
}
