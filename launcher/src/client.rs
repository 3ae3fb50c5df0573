// Client launcher: assembles and runs the post-quantum ssh invocation.
//
// The client negotiates Kyber key exchange with a Dilithium identity, runs
// a trivial remote command, and exits. Password authentication is disabled
// so a failed public-key exchange fails the run instead of falling back to
// an interactive prompt.

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::config::ClientConfig;
use crate::launch::LaunchPlan;
use crate::paths;

pub struct ClientLauncher {
    base_dir: PathBuf,
    config: ClientConfig,
}

impl ClientLauncher {
    pub fn new(base_dir: PathBuf, config: ClientConfig) -> Self {
        Self { base_dir, config }
    }

    /// Override the target host. A CLI flag beats the config file.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            self.config.host = host;
        }
        self
    }

    /// Assemble the ssh argument vector in its fixed order.
    ///
    /// Relative config and key paths resolve against the build directory so
    /// the invocation does not depend on the caller's working directory.
    pub fn plan(&self) -> LaunchPlan {
        let ssh = self.base_dir.join("ssh");
        let config_file = paths::resolve_in(&self.base_dir, &self.config.config_file);
        let identity = paths::resolve_in(&self.base_dir, &self.config.identity_file);

        LaunchPlan::new(ssh)
            .arg("-F")
            .arg(config_file)
            .option("KexAlgorithms", &self.config.kex_algorithms)
            .option("HostKeyAlgorithms", &self.config.host_key_algorithms)
            .option(
                "PubkeyAcceptedKeyTypes",
                &self.config.pubkey_accepted_key_types,
            )
            .option("PasswordAuthentication", "no")
            .arg("-i")
            .arg(identity)
            .arg(self.config.host.as_str())
            .arg(self.config.remote_command.as_str())
    }

    /// Launch ssh in the foreground, blocking until the session ends.
    pub fn run(&self) -> Result<ExitStatus> {
        log::info!("Launching ssh client against {}", self.config.host);
        self.plan().run()
    }
}
