//! Discovery and creation of the `.cpc/` directory.
//!
//! The `.cpc/` directory holds the project configuration. It is found by
//! walking up from the working directory, the way `git` finds `.git/`.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the cpc configuration directory.
const CPC_DIR_NAME: &str = ".cpc";

/// The name of the environment variable that can override the directory.
const CPC_DIR_ENV: &str = "CPC_DIR";

/// Walk up the directory tree from `start` looking for a `.cpc/` directory.
///
/// The `CPC_DIR` environment variable is checked first and wins when it
/// names an existing directory.
///
/// # Examples
///
/// ```no_run
/// use cpc_config::cpc_dir::find_cpc_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_cpc_dir(Path::new(".")) {
///     println!("Found config dir at {}", dir.display());
/// }
/// ```
pub fn find_cpc_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(CPC_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(CPC_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Ensure a `.cpc/` directory exists at the given path.
///
/// If `path` itself is not called `.cpc`, a `.cpc/` subdirectory is created
/// under it. Returns the path to the `.cpc/` directory.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if directory creation fails.
pub fn ensure_cpc_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let cpc_dir = if path.ends_with(CPC_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(CPC_DIR_NAME)
    };

    std::fs::create_dir_all(&cpc_dir)?;
    Ok(cpc_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cpc_dir_in_temp() {
        let dir = tempfile::tempdir().unwrap();
        let cpc = dir.path().join(".cpc");
        std::fs::create_dir(&cpc).unwrap();

        let found = find_cpc_dir(dir.path()).unwrap().canonicalize().unwrap();
        assert_eq!(found, cpc.canonicalize().unwrap());
    }

    #[test]
    fn test_find_cpc_dir_in_child() {
        let dir = tempfile::tempdir().unwrap();
        let cpc = dir.path().join(".cpc");
        std::fs::create_dir(&cpc).unwrap();

        let child = dir.path().join("notas").join("aula1");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_cpc_dir(&child).unwrap().canonicalize().unwrap();
        assert_eq!(found, cpc.canonicalize().unwrap());
    }

    #[test]
    fn test_find_cpc_dir_missing_start() {
        // An override from the environment would win over the walk.
        if std::env::var(CPC_DIR_ENV).is_err() {
            assert!(find_cpc_dir(Path::new("/nonexistent/start/dir")).is_none());
        }
    }

    #[test]
    fn test_ensure_cpc_dir_creates() {
        let dir = tempfile::tempdir().unwrap();
        let result = ensure_cpc_dir(dir.path()).unwrap();
        assert!(result.is_dir());
        assert!(result.ends_with(".cpc"));
    }

    #[test]
    fn test_ensure_cpc_dir_already_named() {
        let dir = tempfile::tempdir().unwrap();
        let cpc = dir.path().join(".cpc");
        let result = ensure_cpc_dir(&cpc).unwrap();
        assert!(result.is_dir());
        assert_eq!(result, cpc);
    }

    #[test]
    fn test_ensure_cpc_dir_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_cpc_dir(dir.path()).unwrap();
        let second = ensure_cpc_dir(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
