//! rush-config - Inspect and edit rush's per-user settings
//!
//! Run with `rush-config --help` for usage.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use rush_config::{APP_NAME, Config, SettingFile, SettingsStore, VERSION};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Inspect and edit rush's per-user settings")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Settings directory (default: ~/.rush)
    #[arg(long)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where each settings file lives
    Path,

    /// Print the shell history
    History,

    /// Print the shell startup script
    Env,

    /// Print the custom commands script
    Commands,

    /// List users allowed to connect to the daemon
    Passwords,

    /// Show client credentials, generating them if absent
    Credentials {
        /// Replace existing credentials with new random ones
        #[arg(long)]
        generate: bool,
    },

    /// Manage the SSH tunnel registry
    Tunnels {
        #[command(subcommand)]
        action: Option<TunnelAction>,
    },

    /// Show configuration
    Config {
        /// Initialize config file with defaults
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
enum TunnelAction {
    /// List registered tunnels (default)
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a tunnel
    Add { host: String, port: u16 },

    /// Forget a tunnel
    Remove { host: String },
}

fn setup_logging(debug: bool, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(file).with_target(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    }

    Ok(())
}

fn run_tunnels(store: &SettingsStore, action: TunnelAction) -> Result<()> {
    match action {
        TunnelAction::List { json } => {
            let tunnels = store.tunnels()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tunnels)?);
            } else if tunnels.is_empty() {
                println!("No tunnels registered.");
            } else {
                for (host, port) in &tunnels {
                    println!("  {} -> localhost:{}", host, port);
                }
            }
        }

        TunnelAction::Add { host, port } => {
            if host.is_empty() || host.contains(':') {
                bail!("Invalid tunnel host: {:?}", host);
            }
            let mut tunnels = store.tunnels()?;
            tunnels.insert(host.clone(), port);
            store.save_tunnels(&tunnels)?;
            info!("Registered tunnel {}:{}", host, port);
        }

        TunnelAction::Remove { host } => {
            let mut tunnels = store.tunnels()?;
            if tunnels.shift_remove(&host).is_none() {
                bail!("No tunnel registered for {}", host);
            }
            store.save_tunnels(&tunnels)?;
            info!("Removed tunnel for {}", host);
        }
    }

    Ok(())
}

fn run_command(store: &SettingsStore, command: Commands) -> Result<()> {
    match command {
        Commands::Path => {
            println!("Settings dir: {:?}", store.dir());
            for file in SettingFile::ALL {
                println!("  {:<12} {:?}", file.file_name(), store.file_path(file));
            }
        }

        Commands::History => {
            for (i, command) in store.load_history()?.iter().enumerate() {
                println!("{:>5}  {}", i + 1, command);
            }
        }

        Commands::Env => print!("{}", store.load_env()?),

        Commands::Commands => print!("{}", store.load_commands()?),

        Commands::Passwords => {
            let passwords = store.passwords()?;
            if passwords.is_empty() {
                println!("No daemon users configured.");
            }
            for user in passwords.keys() {
                println!("  {}", user);
            }
        }

        Commands::Credentials { generate } => {
            if generate {
                store.generate_credentials()?;
            } else {
                store.ensure_credentials_exist()?;
            }
            let credentials = store.credentials()?;
            println!("{}:{}", credentials.user, credentials.password);
        }

        Commands::Tunnels { action } => {
            run_tunnels(store, action.unwrap_or(TunnelAction::List { json: false }))?;
        }

        Commands::Config { .. } => bail!("config does not use the settings store"),
    }

    Ok(())
}

fn main() -> Result<()> {
    // Install color-eyre error hooks
    color_eyre::install()?;

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {}", e);
        Config::default()
    });
    if cli.dir.is_some() {
        config.settings_dir = cli.dir.clone();
    }

    setup_logging(cli.debug || config.debug, config.log_file.as_ref())?;
    debug!("{} v{}", APP_NAME, VERSION);

    match cli.command {
        Commands::Config { init } => {
            if init {
                config.save()?;
                println!(
                    "Configuration initialized at {:?}",
                    Config::config_file_path()?
                );
            } else {
                println!("Configuration:");
                println!("{}", toml::to_string_pretty(&config)?);
                println!("\nConfig file: {:?}", Config::config_file_path()?);
                println!("Settings dir: {:?}", config.settings_dir()?);
            }
        }

        command => run_command(&config.open_store()?, command)?,
    }

    Ok(())
}
