// Server launcher: assembles and runs sshd in foreground debug mode.
//
// -D keeps the daemon attached to the terminal; it runs until signalled or
// until a fatal startup error (port already bound, malformed config,
// missing key file). Supervision and restart are out of scope.

use anyhow::Result;
use std::net::{IpAddr, UdpSocket};
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::config::ServerConfig;
use crate::launch::LaunchPlan;
use crate::paths;

pub struct ServerLauncher {
    base_dir: PathBuf,
    config: ServerConfig,
}

impl ServerLauncher {
    pub fn new(base_dir: PathBuf, config: ServerConfig) -> Self {
        Self { base_dir, config }
    }

    /// Assemble the sshd argument vector in its fixed order.
    pub fn plan(&self) -> LaunchPlan {
        let sshd = self.base_dir.join("sshd");
        let config_file = paths::resolve_in(&self.base_dir, &self.config.config_file);
        let host_key = paths::resolve_in(&self.base_dir, &self.config.host_key_file);

        LaunchPlan::new(sshd)
            .arg("-D")
            .arg("-f")
            .arg(config_file)
            .option("KexAlgorithms", &self.config.kex_algorithms)
            .option("HostKeyAlgorithms", &self.config.host_key_algorithms)
            .option(
                "PubkeyAcceptedKeyTypes",
                &self.config.pubkey_accepted_key_types,
            )
            .arg("-h")
            .arg(host_key)
    }

    /// Launch sshd in the foreground. Blocks until the daemon exits.
    pub fn run(&self) -> Result<ExitStatus> {
        match local_ip() {
            Some(ip) => log::info!("Server address: {}", ip),
            None => log::debug!("Could not determine local IP address"),
        }

        log::info!("Launching sshd in foreground mode");
        self.plan().run()
    }
}

/// Outward-facing local address, found by opening a UDP socket toward a
/// public address. connect() only selects a route; no packet is sent.
fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(("8.8.8.8", 1)).ok()?;
    Some(socket.local_addr().ok()?.ip())
}
