//! # Resource Name Mapping
//!
//! A local file becomes a resource named by its path relative to the
//! working directory, always with `/` separators, minus a configured prefix.
//!
//! Prefix removal defaults to [`StripMode::FirstOccurrence`]: the first
//! occurrence of the prefix is removed wherever it appears, not only at the
//! start. This matches how existing publish configurations behave, so it is
//! kept as the default. [`StripMode::Anchored`] removes the prefix only when
//! the name starts with it.
//!
//! No validation is applied to the result: empty names, `..` segments, and
//! names that look absolute are passed through as-is. Names with `.` or `..`
//! segments have no resource URL and are refused when a write is attempted.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

const INDEX_FILE: &str = "index.html";

/// How a strip prefix is removed from a relative path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StripMode {
    /// Remove the first occurrence anywhere in the name.
    #[default]
    FirstOccurrence,
    /// Remove the prefix only if the name starts with it.
    Anchored,
}

/// Name of a resource within a space. May be empty (the space root).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for `index.html` and any `.../index.html`.
    pub fn is_index(&self) -> bool {
        self.0 == INDEX_FILE || self.0.ends_with(&format!("/{INDEX_FILE}"))
    }

    /// `true` if any `/`-separated segment is `.` or `..`.
    ///
    /// URL parsing collapses such segments, percent-encoded or not, so these
    /// names have no URL of their own.
    pub fn has_dot_segment(&self) -> bool {
        self.0.split('/').any(|segment| segment == "." || segment == "..")
    }

    /// Directory-style alias for an index file.
    ///
    /// `assets/index.html` aliases to `assets/`; the root `index.html`
    /// aliases to the empty name. Non-index names have no alias.
    pub fn container_alias(&self) -> Option<ResourceName> {
        if !self.is_index() {
            return None;
        }
        let alias = &self.0[..self.0.len() - INDEX_FILE.len()];
        Some(Self(alias.to_string()))
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lexical path of `path` relative to `cwd`, joined with `/`.
///
/// Paths outside `cwd` are expressed with leading `..` segments. Neither
/// path is touched on disk.
pub fn relative_to(path: &Path, cwd: &Path) -> String {
    let path_parts: Vec<Component<'_>> = normal_components(path);
    let cwd_parts: Vec<Component<'_>> = normal_components(cwd);

    let common = path_parts
        .iter()
        .zip(cwd_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    std::iter::repeat("..".to_string())
        .take(cwd_parts.len() - common)
        .chain(
            path_parts[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect::<Vec<_>>()
        .join("/")
}

fn normal_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Remove `prefix` from `name` according to `mode`. An empty prefix is a no-op.
pub fn strip_prefix(name: &str, prefix: &str, mode: StripMode) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }
    match mode {
        StripMode::FirstOccurrence => name.replacen(prefix, "", 1),
        StripMode::Anchored => name.strip_prefix(prefix).unwrap_or(name).to_string(),
    }
}

/// Map a local file path to its resource name.
///
/// Components that are not valid UTF-8 are replaced lossily, so distinct
/// files can share a name. [`is_lossless`] detects this.
pub fn map_resource_name(
    path: &Path,
    cwd: &Path,
    prefix: &str,
    mode: StripMode,
) -> ResourceName {
    ResourceName(strip_prefix(&relative_to(path, cwd), prefix, mode))
}

/// `true` if `path` is valid UTF-8 and so maps to a name without loss.
pub fn is_lossless(path: &Path) -> bool {
    path.to_str().is_some()
}
