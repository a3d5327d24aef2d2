//! # File Selection
//!
//! Resolves a selection spec into the candidate paths to publish.
//!
//! A spec is one or more newline-separated glob patterns:
//!
//! ```text
//! dist/**
//! !dist/**/*.map
//! # comments and blank lines are ignored
//! ```
//!
//! - Relative patterns are matched against paths relative to the working
//!   directory; absolute patterns against absolute paths.
//! - `*` does not cross `/`; `**` does.
//! - A pattern that matches a directory also matches everything below it.
//! - `!pattern` excludes matches of earlier and later include patterns.
//!
//! Enumeration yields directories as well as files, in walk order (sorted by
//! file name per directory, patterns in the order given), without duplicates.
//! The publish planner discards directories.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::EnumerateError;
use crate::resource::relative_to;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A compiled glob pattern plus how candidate paths are keyed for matching.
#[derive(Debug)]
struct Matcher {
    raw: String,
    set: GlobSet,
    absolute: bool,
    /// Directory the walk starts from: the pattern's leading literal segments.
    base: PathBuf,
}

impl Matcher {
    fn compile(raw: &str, cwd: &Path) -> Result<Self, EnumerateError> {
        let pattern = raw.trim_start_matches("./").trim_end_matches('/');
        let absolute = Path::new(pattern).is_absolute();

        let compile_err = |source| EnumerateError::Pattern {
            pattern: raw.to_string(),
            source,
        };
        let mut builder = GlobSetBuilder::new();
        for glob in [pattern.to_string(), format!("{pattern}/**")] {
            builder.add(
                GlobBuilder::new(&glob)
                    .literal_separator(true)
                    .build()
                    .map_err(compile_err)?,
            );
        }
        let set = builder.build().map_err(compile_err)?;

        let literal: Vec<&str> = pattern
            .split('/')
            .take_while(|segment| !segment.contains(GLOB_META))
            .collect();
        let literal = literal.join("/");
        let base = if absolute {
            PathBuf::from(if literal.is_empty() { "/" } else { literal.as_str() })
        } else {
            cwd.join(literal)
        };

        Ok(Self {
            raw: raw.to_string(),
            set,
            absolute,
            base,
        })
    }

    fn is_match(&self, path: &Path, cwd: &Path) -> bool {
        if self.absolute {
            self.set.is_match(path)
        } else {
            self.set.is_match(relative_to(path, cwd))
        }
    }
}

/// A parsed selection spec, bound to the directory it is relative to.
#[derive(Debug)]
pub struct FileSelection {
    cwd: PathBuf,
    includes: Vec<Matcher>,
    excludes: Vec<Matcher>,
}

impl FileSelection {
    /// Parse a selection spec relative to `cwd`.
    pub fn parse(spec: &str, cwd: &Path) -> Result<Self, EnumerateError> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for line in spec.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.strip_prefix('!') {
                Some(negated) => excludes.push(Matcher::compile(negated.trim(), cwd)?),
                None => includes.push(Matcher::compile(line, cwd)?),
            }
        }

        if includes.is_empty() {
            return Err(EnumerateError::NoPatterns);
        }
        Ok(Self {
            cwd: cwd.to_path_buf(),
            includes,
            excludes,
        })
    }

    /// The directory relative patterns are resolved against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Walk the file system and return every matching path.
    ///
    /// Reflects the file system at call time. A pattern whose literal base
    /// does not exist contributes nothing.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>, EnumerateError> {
        let mut seen = HashSet::new();
        let mut matches = Vec::new();

        for include in &self.includes {
            if !include.base.exists() {
                tracing::debug!(pattern = %include.raw, base = %include.base.display(), "pattern base does not exist");
                continue;
            }
            for entry in WalkDir::new(&include.base)
                .follow_links(false)
                .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            {
                let entry = entry.map_err(|source| EnumerateError::Walk {
                    path: include.base.display().to_string(),
                    source,
                })?;
                let path = entry.path();
                if !include.is_match(path, &self.cwd) || self.is_excluded(path) {
                    continue;
                }
                if seen.insert(path.to_path_buf()) {
                    matches.push(path.to_path_buf());
                }
            }
        }

        tracing::debug!(count = matches.len(), "enumerated file selection");
        Ok(matches)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|m| m.is_match(path, &self.cwd))
    }
}
