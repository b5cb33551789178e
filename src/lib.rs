//! relog - release changelogs for multi-package repositories
//!
//! Builds a per-release changelog from git history and GitHub pull request
//! labels, grouped by category and by the packages each change touched.
//!
//! This library provides:
//! - [`changelog`]: End-to-end generation
//! - [`config`]: Configuration loading
//! - [`engine`]: Bucketing, classification and attribution
//! - [`git`]: git command execution and parsing
//! - [`github`]: GitHub API access
//! - [`model`]: Domain models
//! - [`render`]: Markdown output

pub mod changelog;
pub mod cli;
pub mod config;
pub mod engine;
mod error;
pub mod git;
pub mod github;
pub mod model;
pub mod render;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
