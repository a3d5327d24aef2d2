//! # Publish Subcommand
//!
//! Resolves the identity, the space, and the file selection (all fatal on
//! error, before any network activity), then publishes through the HTTP
//! storage gateway and reports `space`, `resource`, and `time` outputs.
//!
//! Write failures are soft: they are logged and the run still succeeds,
//! unless `--strict` is given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use zeroize::Zeroizing;

use wasp_client::{StorageClient, StorageConfig};
use wasp_core::{
    plan, publish, resolve_space, FileSelection, PublishOptions, PublishSummary, SpaceHandle,
    StripMode,
};
use wasp_crypto::resolve_identity;

use crate::inputs::{
    flag_or_env, process_env, FILES_VARS, GITHUB_OUTPUT_VAR, ID_VARS, STRIP_PREFIX_VARS, URL_VARS,
};
use crate::output::{OutputFormat, RunOutputs};

/// Arguments for `wasp publish`.
#[derive(Args, Debug, Default)]
pub struct PublishArgs {
    /// Storage URL: a bare origin (new space) or `<origin>/space/<uuid>`.
    /// Env: WASP_URL, INPUT_URL, INPUT_SPACE.
    #[arg(long, visible_alias = "space")]
    pub url: Option<String>,

    /// Signing key as hex (64 chars seed, or 128 chars seed + public key).
    /// A fresh key is generated when absent. Env: WASP_ID, INPUT_ID.
    #[arg(long, conflicts_with = "id_file")]
    pub id: Option<String>,

    /// Read the signing key from a file, as written by `wasp keygen`.
    #[arg(long)]
    pub id_file: Option<PathBuf>,

    /// Newline-separated glob patterns; `!pattern` excludes.
    /// Env: WASP_FILES, INPUT_FILES.
    #[arg(long)]
    pub files: Option<String>,

    /// Removed from each resource name.
    /// Env: WASP_FILES_STRIP_PREFIX, INPUT_FILESSTRIPPREFIX.
    #[arg(long)]
    pub files_strip_prefix: Option<String>,

    /// Strip the prefix only at the start of a name, not at its first
    /// occurrence anywhere.
    #[arg(long)]
    pub anchored_strip: bool,

    /// Stop after the first failed write and exit non-zero.
    #[arg(long)]
    pub strict: bool,

    /// Files uploaded at once.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Print the planned writes without sending anything.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Publish inputs after flag and environment resolution.
pub struct PublishInputs {
    pub url: Option<String>,
    pub key_material: Option<Zeroizing<String>>,
    pub files: String,
    pub options: PublishOptions,
}

impl std::fmt::Debug for PublishInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishInputs")
            .field("url", &self.url)
            .field("key_material", &self.key_material.as_ref().map(|_| "[REDACTED]"))
            .field("files", &self.files)
            .field("options", &self.options)
            .finish()
    }
}

impl PublishInputs {
    /// Merge flags with the environment seen through `lookup`.
    pub fn resolve<F>(args: &PublishArgs, lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_material = match &args.id_file {
            Some(path) => Some(read_key_file(path)?),
            None => flag_or_env(args.id.as_deref(), ID_VARS, lookup).map(Zeroizing::new),
        };
        let files = flag_or_env(args.files.as_deref(), FILES_VARS, lookup).context(
            "no files selected: pass --files or set WASP_FILES (INPUT_FILES in an action)",
        )?;
        let strip_prefix =
            flag_or_env(args.files_strip_prefix.as_deref(), STRIP_PREFIX_VARS, lookup)
                .unwrap_or_default();

        Ok(Self {
            url: flag_or_env(args.url.as_deref(), URL_VARS, lookup),
            key_material,
            files,
            options: PublishOptions {
                strip_prefix,
                strip_mode: if args.anchored_strip {
                    StripMode::Anchored
                } else {
                    StripMode::FirstOccurrence
                },
                strict: args.strict,
                concurrency: usize::from(args.concurrency),
                dry_run: args.dry_run,
            },
        })
    }
}

fn read_key_file(path: &Path) -> Result<Zeroizing<String>> {
    std::fs::read_to_string(path)
        .map(Zeroizing::new)
        .with_context(|| format!("failed to read key file: {}", path.display()))
}

pub fn run_publish(args: &PublishArgs) -> Result<u8> {
    let inputs = PublishInputs::resolve(args, &process_env)?;
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let (handle, plan) = prepare(&inputs, &cwd)?;
    let client = StorageClient::new(StorageConfig::from_env())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let summary = runtime.block_on(publish(&client, &handle, &plan, &inputs.options));

    report(&summary, args.output)?;

    if args.strict && !summary.is_clean() {
        tracing::error!(failed = summary.failed(), "publish incomplete");
        return Ok(1);
    }
    Ok(0)
}

/// Everything that can fail fatally, done before the first write.
fn prepare(inputs: &PublishInputs, cwd: &Path) -> Result<(SpaceHandle, wasp_core::PublishPlan)> {
    let identity = resolve_identity(inputs.key_material.as_ref().map(|k| k.as_str()))
        .context("invalid signing key")?;
    let space = resolve_space(inputs.url.as_deref()).context("invalid storage URL")?;
    tracing::debug!(
        controller = %identity.controller(),
        space = %space.space_url(),
        generated = space.generated,
        "resolved identity and space"
    );

    let selection = FileSelection::parse(&inputs.files, cwd).context("invalid file selection")?;
    let candidates = selection.enumerate().context("failed to enumerate files")?;
    let plan = plan(candidates, cwd, &inputs.options);
    if plan.is_empty() {
        tracing::warn!(files = %inputs.files, "file selection matched no files");
    }

    Ok((SpaceHandle::new(identity, space), plan))
}

fn report(summary: &PublishSummary, format: OutputFormat) -> Result<()> {
    for record in summary.records.iter().filter(|r| !r.is_ok()) {
        tracing::warn!(resource = %record.resource, outcome = ?record.outcome, "write did not succeed");
    }
    eprintln!(
        "{} {} of {} writes succeeded ({} failed)",
        if summary.dry_run { "DRY RUN:" } else { "OK:" },
        summary.succeeded(),
        summary.records.len(),
        summary.failed(),
    );

    let outputs = RunOutputs::from_summary(summary);
    print!("{}", outputs.render(format)?);

    if let Some(path) = process_env(GITHUB_OUTPUT_VAR).filter(|p| !p.trim().is_empty()) {
        outputs.append_to(Path::new(&path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn args() -> PublishArgs {
        PublishArgs {
            concurrency: 1,
            ..PublishArgs::default()
        }
    }

    #[test]
    fn action_inputs_fill_missing_flags() {
        let lookup = env(&[
            ("INPUT_SPACE", "https://s.example/space/"),
            ("INPUT_FILES", "dist/**"),
            ("INPUT_FILESSTRIPPREFIX", "dist/"),
        ]);
        let inputs = PublishInputs::resolve(&args(), &lookup).unwrap();
        assert_eq!(inputs.url.as_deref(), Some("https://s.example/space/"));
        assert_eq!(inputs.files, "dist/**");
        assert_eq!(inputs.options.strip_prefix, "dist/");
        assert_eq!(inputs.options.strip_mode, StripMode::FirstOccurrence);
        assert!(inputs.key_material.is_none());
    }

    #[test]
    fn missing_files_is_an_error() {
        let err = PublishInputs::resolve(&args(), &env(&[])).unwrap_err();
        assert!(err.to_string().contains("no files selected"));
    }

    #[test]
    fn id_file_overrides_environment_key() {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("wasp.key");
        std::fs::write(&key, "11".repeat(32)).unwrap();
        let args = PublishArgs {
            id_file: Some(key),
            files: Some("*.txt".into()),
            anchored_strip: true,
            ..args()
        };

        let inputs = PublishInputs::resolve(&args, &env(&[("WASP_ID", "22")])).unwrap();

        assert_eq!(inputs.key_material.as_deref().map(String::as_str), Some("11".repeat(32).as_str()));
        assert_eq!(inputs.options.strip_mode, StripMode::Anchored);
        assert!(!format!("{inputs:?}").contains("1111"));
    }

    #[test]
    fn bad_key_fails_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let args = PublishArgs {
            id: Some("not-hex".into()),
            files: Some("*".into()),
            ..args()
        };
        let inputs = PublishInputs::resolve(&args, &env(&[])).unwrap();
        let err = prepare(&inputs, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid signing key"));
    }

    #[test]
    fn url_without_space_segment_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = PublishArgs {
            url: Some("https://s.example/not-a-space".into()),
            files: Some("*".into()),
            ..args()
        };
        let inputs = PublishInputs::resolve(&args, &env(&[])).unwrap();
        let err = prepare(&inputs, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid storage URL"));
    }

    #[test]
    fn prepare_plans_selected_files_under_given_key() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("dist/docs")).unwrap();
        std::fs::write(dir.path().join("dist/docs/index.html"), "docs").unwrap();
        std::fs::write(dir.path().join("dist/app.js"), "app").unwrap();
        let seed = "07".repeat(32);
        let args = PublishArgs {
            url: Some("https://s.example/space/0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a".into()),
            id: Some(seed.clone()),
            files: Some("dist/**".into()),
            files_strip_prefix: Some("dist/".into()),
            ..args()
        };

        let inputs = PublishInputs::resolve(&args, &env(&[])).unwrap();
        let (handle, plan) = prepare(&inputs, dir.path()).unwrap();

        let expected = wasp_crypto::Identity::from_key_material(&seed).unwrap();
        assert_eq!(handle.identity().controller(), expected.controller());
        assert_eq!(handle.space_id().to_string(), "0b8c5a52-8b9e-4b7c-a4f0-1f2e3d4c5b6a");
        let names: Vec<String> = plan
            .writes()
            .iter()
            .map(|w| w.resource.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["app.js", "docs/index.html", "docs/"]);
    }
}
