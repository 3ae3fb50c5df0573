// Configuration file parsing for .pqssh.toml
//
// The config file overrides the launch defaults: OpenSSH build directory,
// target host, regress file names, and algorithm selections. Every field
// has a default reproducing the stock interop setup, so the launcher runs
// with no config file at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".pqssh.toml";

/// Root configuration structure for .pqssh.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filesystem layout of the OpenSSH build tree
    pub paths: PathsConfig,

    /// Client launch settings
    pub client: ClientConfig,

    /// Server launch settings
    pub server: ServerConfig,
}

/// Filesystem layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// OpenSSH build tree root. A leading ~ expands to the home directory.
    pub openssh_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            openssh_dir: "~/openssh".to_string(),
        }
    }
}

/// Settings for the ssh client invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Target host for the test connection
    pub host: String,

    /// Remote command to run once the session is up
    pub remote_command: String,

    /// ssh_config path, relative to the build directory unless absolute
    pub config_file: String,

    /// Private key presented for public-key authentication
    pub identity_file: String,

    /// KexAlgorithms override passed to ssh
    pub kex_algorithms: String,

    /// HostKeyAlgorithms override passed to ssh
    pub host_key_algorithms: String,

    /// PubkeyAcceptedKeyTypes override passed to ssh
    pub pubkey_accepted_key_types: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "somehost".to_string(),
            remote_command: "true".to_string(),
            config_file: "regress/ssh_config".to_string(),
            identity_file: "regress/ssh-dilithium2".to_string(),
            kex_algorithms: "kyber-512-sha256".to_string(),
            host_key_algorithms: "ssh-dilithium2".to_string(),
            pubkey_accepted_key_types: "ssh-dilithium2".to_string(),
        }
    }
}

/// Settings for the sshd invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// sshd_config path, relative to the build directory unless absolute
    pub config_file: String,

    /// Host key presented to connecting clients
    pub host_key_file: String,

    /// KexAlgorithms override passed to sshd
    pub kex_algorithms: String,

    /// HostKeyAlgorithms override passed to sshd
    pub host_key_algorithms: String,

    /// PubkeyAcceptedKeyTypes override passed to sshd
    pub pubkey_accepted_key_types: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_file: "regress/sshd_config".to_string(),
            host_key_file: "regress/host.ssh-dilithium3".to_string(),
            kex_algorithms: "kyber-512-sha256".to_string(),
            host_key_algorithms: "ssh-dilithium3".to_string(),
            pubkey_accepted_key_types: "ssh-dilithium3".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a .pqssh.toml file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find .pqssh.toml by searching current directory and ancestors.
    ///
    /// Falls back to the built-in defaults when no config file exists.
    pub fn find_and_load() -> Result<Self> {
        let mut current =
            std::env::current_dir().context("Failed to get current directory")?;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::info!("Loaded config from: {}", config_path.display());
                return Self::from_file(&config_path);
            }

            // Try parent directory
            if !current.pop() {
                log::debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                return Ok(Self::default());
            }
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let fields = [
            ("paths.openssh_dir", &self.paths.openssh_dir),
            ("client.host", &self.client.host),
            ("client.remote_command", &self.client.remote_command),
            ("client.config_file", &self.client.config_file),
            ("client.identity_file", &self.client.identity_file),
            ("client.kex_algorithms", &self.client.kex_algorithms),
            ("client.host_key_algorithms", &self.client.host_key_algorithms),
            (
                "client.pubkey_accepted_key_types",
                &self.client.pubkey_accepted_key_types,
            ),
            ("server.config_file", &self.server.config_file),
            ("server.host_key_file", &self.server.host_key_file),
            ("server.kex_algorithms", &self.server.kex_algorithms),
            ("server.host_key_algorithms", &self.server.host_key_algorithms),
            (
                "server.pubkey_accepted_key_types",
                &self.server.pubkey_accepted_key_types,
            ),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                anyhow::bail!("{}: cannot be empty", name);
            }
        }

        Ok(())
    }
}
