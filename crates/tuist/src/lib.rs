//! tuist: project tooling with pluggable tasks.
//!
//! Built-in commands cover introspection (`tasks`, `config`). Any other sub-command is an
//! external task: it is resolved to a plugin binary or an installed `tuist-<task>` command and
//! run in place of the tool, inheriting its terminal and environment.

#![warn(missing_docs)]

pub mod cli;
