//! Run outputs: printed to stdout and, inside a GitHub Actions step,
//! appended to the `$GITHUB_OUTPUT` file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::ValueEnum;
use serde::Serialize;

use wasp_core::PublishSummary;

/// How outputs are printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key=value` lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Outputs of a publish run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutputs {
    /// `<origin>/space/<uuid>`. Always present.
    pub space: String,
    /// Full URL of the last file attempted; absent when nothing was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Finish time, RFC 3339.
    pub time: String,
}

impl RunOutputs {
    pub fn from_summary(summary: &PublishSummary) -> Self {
        Self {
            space: summary.space_url.clone(),
            resource: summary.resource_url().map(str::to_string),
            time: summary
                .finished_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// `key=value` lines in a fixed order.
    pub fn to_lines(&self) -> String {
        let mut lines = format!("space={}\n", self.space);
        if let Some(resource) = &self.resource {
            lines.push_str(&format!("resource={resource}\n"));
        }
        lines.push_str(&format!("time={}\n", self.time));
        lines
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_lines()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self).context("failed to encode outputs")?;
                Ok(format!("{json}\n"))
            }
        }
    }

    /// Append the outputs to a GitHub Actions output file.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open output file: {}", path.display()))?;
        file.write_all(self.to_lines().as_bytes())
            .with_context(|| format!("failed to write output file: {}", path.display()))
    }
}
