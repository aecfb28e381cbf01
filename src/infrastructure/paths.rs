//! Filesystem path utilities.
//!
//! Handles tilde expansion against the user's home directory and the default
//! snapshot location, keeping path conventions out of the core modules.

use std::path::PathBuf;

/// Returns the default snapshot file location.
///
/// Resolves to `~/.local/share/chainview/snapshot.json`, falling back to a
/// relative path when `$HOME` is unset.
#[must_use]
pub fn default_snapshot_path() -> PathBuf {
    let base = std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    base.join(".local/share/chainview/snapshot.json")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged; if `$HOME` is unset
/// the input is returned as-is.
///
/// # Examples
///
/// ```
/// use chainview::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_tilde_prefix() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_tilde("~/snapshots/a.json"), format!("{home}/snapshots/a.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn leaves_other_paths_alone() {
        assert_eq!(expand_tilde("/tmp/a.json"), "/tmp/a.json");
        assert_eq!(expand_tilde("a.json"), "a.json");
    }

    #[test]
    fn default_path_ends_with_snapshot_file() {
        assert!(default_snapshot_path().ends_with(".local/share/chainview/snapshot.json"));
    }
}
