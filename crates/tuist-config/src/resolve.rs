//! Path resolution for configuration values.
//!
//! Resolves relative and tilde-prefixed paths written in `.tuist.toml` to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path against `base` without touching the filesystem.
///
/// Tilde paths are expanded to the home directory, relative paths are joined onto `base`,
/// and absolute paths are returned unchanged.
pub fn resolve_config_path(path: &str, base: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(base.join(expanded))
    }
}

/// Resolves a local plugin path to a canonical directory.
///
/// The path must exist and be a directory. Returns an error otherwise.
pub fn resolve_plugin_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let absolute = resolve_config_path(path, config_dir)?;

    let canonical = absolute
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: absolute.clone(),
            source,
        })?;

    if !canonical.is_dir() {
        return Err(ConfigError::PluginPathNotDirectory { path: canonical });
    }

    Ok(canonical)
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::ProjectTree;

    #[test]
    fn test_resolve_config_path_relative() {
        let resolved = resolve_config_path(".plugins", Path::new("/repo/app")).unwrap();
        assert_eq!(resolved, PathBuf::from("/repo/app/.plugins"));
    }

    #[test]
    fn test_resolve_config_path_absolute() {
        let resolved = resolve_config_path("/opt/plugins", Path::new("/repo/app")).unwrap();
        assert_eq!(resolved, PathBuf::from("/opt/plugins"));
    }

    #[test]
    fn test_resolve_config_path_does_not_require_existence() {
        let tree = ProjectTree::new();
        let resolved = resolve_config_path("missing/plugins", tree.path()).unwrap();
        assert_eq!(resolved, tree.path().join("missing/plugins"));
        assert!(!resolved.exists());
    }

    #[test]
    fn test_resolve_plugin_path_relative() {
        let tree = ProjectTree::new();
        let plugin = tree.dir("LocalPlugin");
        let project = tree.dir("project");

        let resolved = resolve_plugin_path("../LocalPlugin", &project).unwrap();
        assert_eq!(resolved, plugin.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_plugin_path_nonexistent() {
        let tree = ProjectTree::new();
        let result = resolve_plugin_path("./nonexistent", tree.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::PathResolution { .. }
        ));
    }

    #[test]
    fn test_resolve_plugin_path_file_not_directory() {
        let tree = ProjectTree::new();
        fs::write(tree.path().join("Plugin.swift"), "").unwrap();

        let result = resolve_plugin_path("./Plugin.swift", tree.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::PluginPathNotDirectory { .. }
        ));
    }

    #[test]
    fn test_expand_tilde_alone() {
        let result = expand_tilde("~").unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(result, home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let result = expand_tilde("~/.tuist/plugins").unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(result, home.join(".tuist/plugins"));
    }

    #[test]
    fn test_expand_tilde_not_at_start() {
        let result = expand_tilde("foo/~/bar").unwrap();
        assert_eq!(result, PathBuf::from("foo/~/bar"));
    }
}
