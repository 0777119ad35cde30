//! `onsen` — list and browse onsen.ag radio shows from the command line.

use clap::{Parser, Subcommand};

mod dump;
mod fetch;
mod ls;
mod lsm;

#[derive(Debug, Parser)]
#[command(name = "onsen")]
#[command(about = "List and browse onsen.ag radio shows")]
struct Cli {
    /// Backend to read the catalog page from; `file://PATH` reads an
    /// archived page from disk.
    #[arg(long, global = true, default_value = "https://onsen.ag/")]
    backend: String,

    /// Session id (the `_session_id` browser cookie) for signed-in listings.
    #[arg(short, long, global = true, env = "ONSEN_SESSION")]
    session: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List radio shows, or the episodes of the named shows
    Ls {
        /// List every show's episodes as well
        #[arg(short, long)]
        recursive: bool,

        /// Show names to list episodes for
        names: Vec<String>,
    },
    /// Print episode manifest URLs
    ///
    /// With no targets, prints every accessible manifest. A `NAME` target
    /// prints one show's; a `NAME/ID` target prints one episode's.
    /// Inaccessible episodes are reported on stderr.
    Lsm {
        /// `name` or `name/id` targets
        targets: Vec<String>,
    },
    /// Dump the raw embedded state as JSON (pipe to `jq` to explore)
    Dump,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let html = fetch::fetch_page(&cli.backend, cli.session.as_deref()).await?;

    match cli.command {
        Commands::Ls { recursive, names } => ls::run(&html, recursive, &names),
        Commands::Lsm { targets } => lsm::run(&html, &targets),
        Commands::Dump => dump::run(&html),
    }
}
