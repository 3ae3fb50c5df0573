use anyhow::Result;
use clap::{Parser, Subcommand};
use pqssh_launcher::{client, config, launch, paths, server};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pqssh-launcher")]
#[command(about = "Launcher for post-quantum OpenSSH interop testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the ssh client against the test server
    Client {
        /// Target host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// OpenSSH build directory (overrides config)
        #[arg(long)]
        openssh_dir: Option<String>,

        /// Path to config file (default: search for .pqssh.toml in current dir and parents)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the resolved command line without executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Launch sshd in foreground (non-daemonizing) mode
    Server {
        /// OpenSSH build directory (overrides config)
        #[arg(long)]
        openssh_dir: Option<String>,

        /// Path to config file (default: search for .pqssh.toml in current dir and parents)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the resolved command line without executing it
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Client {
            host,
            openssh_dir,
            config,
            dry_run,
        } => {
            let cfg = load_config(config)?;
            let base_dir = resolve_base_dir(openssh_dir.as_deref(), &cfg)?;

            let launcher = client::ClientLauncher::new(base_dir, cfg.client).with_host(host);

            if dry_run {
                println!("{}", launcher.plan().rendered());
                return Ok(());
            }

            let status = launcher.run()?;
            std::process::exit(launch::propagate_exit_code(status));
        }

        Commands::Server {
            openssh_dir,
            config,
            dry_run,
        } => {
            let cfg = load_config(config)?;
            let base_dir = resolve_base_dir(openssh_dir.as_deref(), &cfg)?;

            let launcher = server::ServerLauncher::new(base_dir, cfg.server);

            if dry_run {
                println!("{}", launcher.plan().rendered());
                return Ok(());
            }

            let status = launcher.run()?;
            std::process::exit(launch::propagate_exit_code(status));
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<config::Config> {
    match path {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            config::Config::from_file(&path)
        }
        None => config::Config::find_and_load(),
    }
}

fn resolve_base_dir(override_dir: Option<&str>, cfg: &config::Config) -> Result<PathBuf> {
    let dir = override_dir.unwrap_or(&cfg.paths.openssh_dir);
    paths::resolve_base_dir(dir)
}
