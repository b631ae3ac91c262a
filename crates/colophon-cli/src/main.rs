use anyhow::Result;
use clap::Parser;

use colophon_repair::{CatalogClient, Config, CURRENT_BNF_KEY, DEPRECATED_BNF_KEY};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "colophon", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog base URL (default: from config, then https://openlibrary.org)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Merge a deprecated identifier key into its current name
    ///
    /// Finds editions whose identifier map still carries the deprecated key,
    /// then for each one:
    ///
    /// - Renames the key in place when the current key is absent
    /// - Otherwise folds its values into the current key's list, in order,
    ///   skipping values already present
    /// - Leaves every other identifier key, value, and position untouched
    ///
    /// Records whose transform comes out identical to what was fetched are
    /// reported as already current and never written. Defaults target the
    /// BnF key rename; pass --deprecated/--current for other key pairs.
    ///
    /// Output: one status line per record and a closing summary with
    /// updated / already current / not found / failed counts.
    Identifiers {
        /// Deprecated identifier key to collapse
        #[arg(long, default_value = DEPRECATED_BNF_KEY)]
        deprecated: String,

        /// Current identifier key to merge into
        #[arg(long, default_value = CURRENT_BNF_KEY)]
        current: String,

        /// Maximum number of candidate records per discovery query
        #[arg(long, default_value_t = 500)]
        limit: u32,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Move legacy isbn/publisher values into their array fields
    Fields {
        /// Maximum number of candidate records per discovery query
        #[arg(long, default_value_t = 500)]
        limit: u32,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: Option<commands::config::ConfigAction>,
    },
}

/// Load the configuration, check credentials, and open a logged-in client.
///
/// Credentials are checked before any network call: a batch must not start
/// without them.
async fn connect(base_url: Option<String>) -> Result<CatalogClient> {
    let config = Config::load_with_base_url(base_url)?;
    let credentials = config.credentials()?;

    let client = CatalogClient::new(config.base_url.as_str())?;
    client.login(&credentials).await?;

    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Identifiers {
            deprecated,
            current,
            limit,
            dry_run,
        } => {
            let client = connect(cli.base_url).await?;
            commands::run_identifiers(&client, &deprecated, &current, limit, dry_run).await?;
        }
        Commands::Fields { limit, dry_run } => {
            let client = connect(cli.base_url).await?;
            commands::run_fields(&client, limit, dry_run).await?;
        }
        Commands::Config { action } => {
            commands::config::run(action)?;
        }
    }

    Ok(())
}
