//! `wasp resolve`: report the space a storage URL designates.
//!
//! Nothing is written. A URL without a space id resolves to a freshly
//! minted one, which differs on every invocation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wasp_core::{resolve_space, ResolvedSpace};

use crate::inputs::{flag_or_env, process_env, URL_VARS};
use crate::output::OutputFormat;

/// Arguments for `wasp resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Storage URL, optionally naming a space: `<origin>/space/<uuid>`.
    #[arg(long, visible_alias = "space")]
    pub url: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Resolution {
    space: String,
    space_id: String,
    generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_path: Option<String>,
}

impl From<&ResolvedSpace> for Resolution {
    fn from(space: &ResolvedSpace) -> Self {
        Self {
            space: space.space_url().to_string(),
            space_id: space.space_id().to_string(),
            generated: space.generated,
            sub_path: space.address.sub_path.clone(),
        }
    }
}

pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let url = flag_or_env(args.url.as_deref(), URL_VARS, &process_env);
    let space = resolve_space(url.as_deref()).context("failed to resolve storage URL")?;
    let resolution = Resolution::from(&space);

    match args.output {
        OutputFormat::Text => {
            println!("{}", resolution.space);
            if resolution.generated {
                eprintln!("  (new space id generated)");
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&resolution).context("failed to encode resolution")?;
            println!("{json}");
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_reports_sub_path_and_id() {
        let space = resolve_space(Some(
            "https://s.example/space/0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a/docs/a.html",
        ))
        .unwrap();
        let resolution = Resolution::from(&space);
        assert_eq!(
            resolution.space,
            "https://s.example/space/0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a"
        );
        assert_eq!(resolution.space_id, "0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a");
        assert!(!resolution.generated);
        assert_eq!(resolution.sub_path.as_deref(), Some("docs/a.html"));
    }

    #[test]
    fn bare_origin_is_generated() {
        let space = resolve_space(Some("https://s.example")).unwrap();
        assert!(Resolution::from(&space).generated);
    }
}
