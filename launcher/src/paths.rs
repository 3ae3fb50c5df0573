// Path resolution for the OpenSSH build tree.
//
// The build directory defaults to ~/openssh; regress configs and key files
// resolve against it unless given as absolute paths.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolve the invoking user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    // Try HOME first (Unix/Linux/WSL)
    if let Ok(home) = std::env::var("HOME")
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    // Fall back to USERPROFILE (Windows)
    if let Ok(profile) = std::env::var("USERPROFILE")
        && !profile.is_empty()
    {
        return Ok(PathBuf::from(profile));
    }

    anyhow::bail!(
        "Could not determine home directory. Neither HOME nor USERPROFILE environment variables are set."
    )
}

/// Expand a leading `~` in `path` against `home`.
///
/// `~` alone and `~/rest` are expanded; any other value is returned verbatim.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return home.join(rest);
    }

    PathBuf::from(path)
}

/// Expand the configured build directory, resolving a leading `~`.
///
/// The home directory is only looked up when the value actually needs it,
/// so an absolute override works even without HOME set.
pub fn resolve_base_dir(dir: &str) -> Result<PathBuf> {
    if dir == "~" || dir.starts_with("~/") {
        let home = home_dir()?;
        return Ok(expand_home(dir, &home));
    }

    Ok(PathBuf::from(dir))
}

/// Resolve an auxiliary path (config file, key file) against the build
/// directory. Absolute paths are used as-is.
pub fn resolve_in(base: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}
