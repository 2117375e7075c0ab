//! Plugin declarations.
//!
//! Turns raw `[[plugin]]` entries into validated [`Plugin`] values with resolved names and
//! locations.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use crate::{ConfigError, parse::RawPlugin, resolve::resolve_plugin_path};

/// A plugin declared in the project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Plugin name, unique within a configuration.
    pub name: String,
    /// Where the plugin comes from.
    pub location: PluginLocation,
}

/// Source of a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginLocation {
    /// A plugin living in a directory on disk.
    Local {
        /// Canonical path to the plugin directory.
        path: PathBuf,
    },
    /// A plugin fetched from a git repository.
    Git {
        /// Repository URL.
        url: String,
        /// Revision to fetch.
        reference: GitReference,
    },
}

/// A git revision pinned by a plugin declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitReference {
    /// A tag name.
    Tag(String),
    /// A commit hash.
    Sha(String),
}

impl fmt::Display for GitReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "tag {tag}"),
            Self::Sha(sha) => write!(f, "sha {sha}"),
        }
    }
}

impl Plugin {
    /// Returns true if the plugin is fetched from git.
    pub fn is_git(&self) -> bool {
        matches!(self.location, PluginLocation::Git { .. })
    }
}

/// Validates and resolves raw plugin entries, preserving their order.
///
/// `config_path` is used for error reporting and its parent directory anchors relative
/// local plugin paths.
pub fn resolve_plugins(raw: &[RawPlugin], config_path: &Path) -> Result<Vec<Plugin>, ConfigError> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));
    let mut seen = HashSet::new();
    let mut plugins = Vec::with_capacity(raw.len());

    for (i, entry) in raw.iter().enumerate() {
        let invalid = |reason: &str| ConfigError::InvalidPlugin {
            path: config_path.to_path_buf(),
            index: i + 1,
            reason: reason.to_string(),
        };

        let (location, derived_name) = match (&entry.path, &entry.git) {
            (Some(path), None) => {
                if entry.tag.is_some() || entry.sha.is_some() {
                    return Err(invalid("tag and sha only apply to git plugins"));
                }
                let path = resolve_plugin_path(path, config_dir)?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                (PluginLocation::Local { path }, name)
            }
            (None, Some(url)) => {
                let reference = match (&entry.tag, &entry.sha) {
                    (Some(tag), None) => GitReference::Tag(tag.clone()),
                    (None, Some(sha)) => GitReference::Sha(sha.clone()),
                    _ => return Err(invalid("git plugins need exactly one of tag or sha")),
                };
                let name = repository_name(url);
                (
                    PluginLocation::Git {
                        url: url.clone(),
                        reference,
                    },
                    name,
                )
            }
            _ => return Err(invalid("expected exactly one of path or git")),
        };

        let name = match entry.name.clone().or(derived_name) {
            Some(name) if !name.is_empty() => name,
            _ => return Err(invalid("could not derive a name; set `name` explicitly")),
        };

        if !seen.insert(name.clone()) {
            return Err(ConfigError::DuplicatePlugin {
                path: config_path.to_path_buf(),
                name,
            });
        }

        plugins.push(Plugin { name, location });
    }

    Ok(plugins)
}

/// Derives a repository name from a git URL.
///
/// Handles `https://host/org/repo.git`, `git@host:org/repo.git` and trailing slashes.
fn repository_name(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ProjectTree;

    fn git(url: &str, tag: Option<&str>, sha: Option<&str>) -> RawPlugin {
        RawPlugin {
            git: Some(url.to_string()),
            tag: tag.map(String::from),
            sha: sha.map(String::from),
            ..RawPlugin::default()
        }
    }

    #[test]
    fn test_repository_name() {
        assert_eq!(
            repository_name("https://github.com/acme/tuist-plugin-lint.git").as_deref(),
            Some("tuist-plugin-lint")
        );
        assert_eq!(
            repository_name("git@github.com:acme/swiftformat.git").as_deref(),
            Some("swiftformat")
        );
        assert_eq!(
            repository_name("https://example.com/acme/tools/").as_deref(),
            Some("tools")
        );
        assert_eq!(repository_name(".git"), None);
    }

    #[test]
    fn test_git_plugin_with_tag() {
        let raw = [git("https://github.com/acme/lint.git", Some("1.0.0"), None)];
        let plugins = resolve_plugins(&raw, Path::new("/repo/.tuist.toml")).unwrap();

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "lint");
        assert_eq!(
            plugins[0].location,
            PluginLocation::Git {
                url: "https://github.com/acme/lint.git".into(),
                reference: GitReference::Tag("1.0.0".into()),
            }
        );
        assert!(plugins[0].is_git());
    }

    #[test]
    fn test_explicit_name_overrides_derived() {
        let mut entry = git("https://github.com/acme/lint.git", None, Some("abc123"));
        entry.name = Some("A".into());
        let plugins = resolve_plugins(&[entry], Path::new("/repo/.tuist.toml")).unwrap();
        assert_eq!(plugins[0].name, "A");
    }

    #[test]
    fn test_git_plugin_needs_exactly_one_reference() {
        let none = [git("https://github.com/acme/lint.git", None, None)];
        let both = [git("https://github.com/acme/lint.git", Some("1.0"), Some("abc"))];

        for raw in [&none, &both] {
            let err = resolve_plugins(raw, Path::new("/repo/.tuist.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPlugin { index: 1, .. }));
        }
    }

    #[test]
    fn test_plugin_needs_exactly_one_source() {
        let raw = [RawPlugin {
            name: Some("empty".into()),
            ..RawPlugin::default()
        }];
        let err = resolve_plugins(&raw, Path::new("/repo/.tuist.toml")).unwrap_err();
        assert!(err.to_string().contains("exactly one of path or git"));
    }

    #[test]
    fn test_local_plugin_resolves_relative_to_config() {
        let tree = ProjectTree::new();
        let plugin_dir = tree.dir("plugins/Local");
        let config_path = tree.config("project", "");

        let raw = [RawPlugin {
            path: Some("../plugins/Local".into()),
            ..RawPlugin::default()
        }];
        let plugins = resolve_plugins(&raw, &config_path).unwrap();

        assert_eq!(plugins[0].name, "Local");
        assert_eq!(
            plugins[0].location,
            PluginLocation::Local {
                path: plugin_dir.canonicalize().unwrap()
            }
        );
        assert!(!plugins[0].is_git());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let raw = [
            git("https://github.com/acme/lint.git", Some("1.0"), None),
            git("https://gitlab.com/other/lint.git", Some("2.0"), None),
        ];
        let err = resolve_plugins(&raw, Path::new("/repo/.tuist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePlugin { name, .. } if name == "lint"));
    }

    #[test]
    fn test_git_reference_display() {
        assert_eq!(GitReference::Tag("1.0".into()).to_string(), "tag 1.0");
        assert_eq!(GitReference::Sha("abc".into()).to_string(), "sha abc");
    }
}
