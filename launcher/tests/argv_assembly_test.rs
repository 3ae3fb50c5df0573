// Integration tests for argument-vector assembly.
//
// These cover the launcher's only real logic: for a given home directory
// the base path resolves predictably, and the client/server argument
// vectors come out with exactly the fixed flags in a stable order.

use pqssh_launcher::client::ClientLauncher;
use pqssh_launcher::config::Config;
use pqssh_launcher::paths;
use pqssh_launcher::server::ServerLauncher;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_base_dir_is_home_joined_with_fixed_subdir() {
    let config = Config::default();

    for home in ["/home/alice", "/Users/bob", "/tmp/h"] {
        let base = paths::expand_home(&config.paths.openssh_dir, Path::new(home));
        assert_eq!(base, Path::new(home).join("openssh"));
    }
}

#[test]
fn test_client_argv_matches_fixed_order() {
    let config = Config::default();
    let launcher = ClientLauncher::new(PathBuf::from("/home/alice/openssh"), config.client);
    let plan = launcher.plan();

    assert_eq!(plan.program, PathBuf::from("/home/alice/openssh/ssh"));
    assert_eq!(
        plan.args,
        os_args(&[
            "-F",
            "/home/alice/openssh/regress/ssh_config",
            "-o",
            "KexAlgorithms=kyber-512-sha256",
            "-o",
            "HostKeyAlgorithms=ssh-dilithium2",
            "-o",
            "PubkeyAcceptedKeyTypes=ssh-dilithium2",
            "-o",
            "PasswordAuthentication=no",
            "-i",
            "/home/alice/openssh/regress/ssh-dilithium2",
            "somehost",
            "true",
        ])
    );
}

#[test]
fn test_server_argv_matches_fixed_order() {
    let config = Config::default();
    let launcher = ServerLauncher::new(PathBuf::from("/home/alice/openssh"), config.server);
    let plan = launcher.plan();

    assert_eq!(plan.program, PathBuf::from("/home/alice/openssh/sshd"));
    assert_eq!(
        plan.args,
        os_args(&[
            "-D",
            "-f",
            "/home/alice/openssh/regress/sshd_config",
            "-o",
            "KexAlgorithms=kyber-512-sha256",
            "-o",
            "HostKeyAlgorithms=ssh-dilithium3",
            "-o",
            "PubkeyAcceptedKeyTypes=ssh-dilithium3",
            "-h",
            "/home/alice/openssh/regress/host.ssh-dilithium3",
        ])
    );
}

#[test]
fn test_plan_construction_is_deterministic() {
    let config = Config::default();

    let client = ClientLauncher::new(PathBuf::from("/opt/openssh"), config.client.clone());
    assert_eq!(client.plan(), client.plan());

    let server = ServerLauncher::new(PathBuf::from("/opt/openssh"), config.server.clone());
    assert_eq!(server.plan(), server.plan());
}

#[test]
fn test_host_override_replaces_config_host() {
    let config = Config::default();
    let launcher = ClientLauncher::new(PathBuf::from("/opt/openssh"), config.client)
        .with_host(Some("192.168.1.50".to_string()));

    let plan = launcher.plan();
    let args: Vec<String> = plan
        .args
        .iter()
        .map(|a| a.to_string_lossy().to_string())
        .collect();

    assert!(args.contains(&"192.168.1.50".to_string()));
    assert!(!args.contains(&"somehost".to_string()));
}

#[test]
fn test_absolute_auxiliary_paths_are_not_rebased() {
    let mut config = Config::default();
    config.client.identity_file = "/etc/keys/ssh-dilithium2".to_string();

    let launcher = ClientLauncher::new(PathBuf::from("/opt/openssh"), config.client);
    let plan = launcher.plan();
    let args: Vec<String> = plan
        .args
        .iter()
        .map(|a| a.to_string_lossy().to_string())
        .collect();

    assert!(args.contains(&"/etc/keys/ssh-dilithium2".to_string()));
}
