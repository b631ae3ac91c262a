use anyhow::Result;

use colophon_repair::config;
use colophon_repair::Config;

#[derive(Debug, clap::Subcommand)]
pub enum ConfigAction {
    /// Create the config file with commented defaults
    Init,
    /// Print the config file path
    Path,
    /// Print an example configuration
    Example,
}

pub fn run(action: Option<ConfigAction>) -> Result<()> {
    match action {
        None => show_config(),
        Some(ConfigAction::Init) => init_config(),
        Some(ConfigAction::Path) => {
            println!("{}", config::config_file_path().display());
            Ok(())
        }
        Some(ConfigAction::Example) => {
            print!("{}", config::example_config());
            Ok(())
        }
    }
}

/// Show the current effective configuration.
fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() {
            "yes"
        } else {
            "no (using defaults)"
        }
    );

    println!("Settings:");
    println!(
        "  username: {}",
        config.username.as_deref().unwrap_or("<not set>")
    );
    println!(
        "  password: {}",
        if config.password.is_some() {
            "<set>"
        } else {
            "<not set>"
        }
    );
    println!("  base_url: {}", config.base_url);

    println!("\nPriority: CLI args > ENV vars (COLOPHON_*) > Config file > Defaults");

    Ok(())
}

/// Initialize config file with defaults.
fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("Created config file: {}", config_path.display());
        println!("\nEdit this file to configure colophon.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
