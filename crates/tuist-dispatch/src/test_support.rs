//! Deterministic fakes for dispatcher tests.
//!
//! Kept behind `cfg(test)` to avoid leaking into the public API surface.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap, HashSet},
    path::{Path, PathBuf},
    rc::Rc,
};

use tuist_config::{Config, ConfigError, ConfigProvider};
use tuist_plugin::{DirectoryLister, ListedEntry, PluginError, PluginRegistry};

use crate::{
    ChildExit, CommandDispatcher, CommandLocator, DispatchError, Environment, ProcessRunner,
};

/// A recorded call to the process runner.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Arguments passed to the runner.
    pub args: Vec<String>,
    /// Verbosity passed to the runner.
    pub verbose: bool,
    /// Environment overlay passed to the runner.
    pub env: BTreeMap<String, String>,
}

/// Calls observed by the fakes, shared with the harness.
#[derive(Debug, Default)]
struct Log {
    /// Roots passed to the config provider.
    loaded_roots: Vec<PathBuf>,
    /// Runner invocations.
    invocations: Vec<Invocation>,
}

/// Builder for a dispatcher wired to fakes.
pub struct Harness {
    /// Working directory reported by the environment.
    pub cwd: PathBuf,
    /// Verbosity reported by the environment.
    pub verbose: bool,
    /// Make the config provider fail.
    pub fail_config: bool,
    /// Exit reported by the runner.
    pub exit: ChildExit,
    /// Release directories returned by the registry, in order.
    release_dirs: Vec<PathBuf>,
    /// Directory contents returned by the lister.
    listings: HashMap<PathBuf, Vec<ListedEntry>>,
    /// Directories the lister fails on.
    failing: HashSet<PathBuf>,
    /// Installed commands and the executable each resolves to.
    system_commands: HashMap<String, PathBuf>,
    /// Shared call log.
    log: Rc<RefCell<Log>>,
}

impl Harness {
    /// Creates a harness with an empty environment rooted at `cwd`.
    pub fn new(cwd: &str) -> Self {
        Self {
            cwd: PathBuf::from(cwd),
            verbose: false,
            fail_config: false,
            exit: ChildExit::Code(0),
            release_dirs: Vec::new(),
            listings: HashMap::new(),
            failing: HashSet::new(),
            system_commands: HashMap::new(),
            log: Rc::default(),
        }
    }

    /// Adds a plugin release directory holding `files`.
    pub fn add_release(&mut self, dir: &str, files: &[&str]) {
        self.release_dirs.push(PathBuf::from(dir));
        self.add_listing(dir, files);
    }

    /// Adds a plugin release directory that cannot be listed.
    pub fn add_failing_release(&mut self, dir: &str) {
        self.release_dirs.push(PathBuf::from(dir));
        self.fail_listing(dir);
    }

    /// Makes the lister fail for `dir`.
    pub fn fail_listing(&mut self, dir: &str) {
        self.failing.insert(PathBuf::from(dir));
    }

    /// Makes the lister return `files` for `dir`.
    pub fn add_listing(&mut self, dir: &str, files: &[&str]) {
        let dir = PathBuf::from(dir);
        let entries = files
            .iter()
            .map(|file| ListedEntry::from_path(dir.join(file)))
            .collect();
        self.listings.insert(dir, entries);
    }

    /// Installs the executable at `path` on the search path under its file name.
    pub fn add_system_command(&mut self, path: &str) {
        let entry = ListedEntry::from_path(PathBuf::from(path));
        self.system_commands.insert(entry.name, entry.path);
    }

    /// Builds a dispatcher from the current fake state.
    pub fn dispatcher(&self) -> CommandDispatcher {
        CommandDispatcher::new(
            Environment {
                cwd: self.cwd.clone(),
                verbose: self.verbose,
            },
            Box::new(FakeConfig {
                fail: self.fail_config,
                log: Rc::clone(&self.log),
            }),
            Box::new(FakeRegistry {
                dirs: self.release_dirs.clone(),
            }),
            Box::new(FakeLister {
                listings: self.listings.clone(),
                failing: self.failing.clone(),
            }),
            Box::new(FakeLocator {
                commands: self.system_commands.clone(),
            }),
            Box::new(RecordingRunner {
                exit: self.exit,
                log: Rc::clone(&self.log),
            }),
        )
    }

    /// Roots the config provider was asked to load.
    pub fn loaded_roots(&self) -> Vec<PathBuf> {
        self.log.borrow().loaded_roots.clone()
    }

    /// Calls made to the runner.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.log.borrow().invocations.clone()
    }
}

/// Config provider returning defaults.
struct FakeConfig {
    /// Fail every load.
    fail: bool,
    /// Shared call log.
    log: Rc<RefCell<Log>>,
}

impl ConfigProvider for FakeConfig {
    fn load(&self, root: &Path) -> Result<Config, ConfigError> {
        self.log.borrow_mut().loaded_roots.push(root.to_path_buf());
        if self.fail {
            return Err(ConfigError::NoHomeDirectory);
        }
        Ok(Config::default())
    }
}

/// Registry returning a fixed list of directories.
struct FakeRegistry {
    /// Directories to return.
    dirs: Vec<PathBuf>,
}

impl PluginRegistry for FakeRegistry {
    fn release_dirs(&self, _config: &Config) -> Result<Vec<PathBuf>, PluginError> {
        Ok(self.dirs.clone())
    }
}

/// Lister backed by an in-memory map; unknown directories list as empty.
struct FakeLister {
    /// Contents per directory.
    listings: HashMap<PathBuf, Vec<ListedEntry>>,
    /// Directories that fail to list.
    failing: HashSet<PathBuf>,
}

impl DirectoryLister for FakeLister {
    fn list(&self, dir: &Path) -> Result<Vec<ListedEntry>, PluginError> {
        if self.failing.contains(dir) {
            return Err(PluginError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        Ok(self.listings.get(dir).cloned().unwrap_or_default())
    }
}

/// Locator backed by a fixed map of names.
struct FakeLocator {
    /// Installed commands and their executables.
    commands: HashMap<String, PathBuf>,
}

impl CommandLocator for FakeLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.commands.get(name).cloned()
    }
}

/// Runner that records calls instead of spawning.
struct RecordingRunner {
    /// Exit to report.
    exit: ChildExit,
    /// Shared call log.
    log: Rc<RefCell<Log>>,
}

impl ProcessRunner for RecordingRunner {
    fn exec(
        &self,
        args: &[String],
        verbose: bool,
        env: &BTreeMap<String, String>,
    ) -> Result<ChildExit, DispatchError> {
        self.log.borrow_mut().invocations.push(Invocation {
            args: args.to_vec(),
            verbose,
            env: env.clone(),
        });
        Ok(self.exit)
    }
}
