//! # Keygen Subcommand
//!
//! Writes a fresh Ed25519 signing key as `<prefix>.key` (64 hex chars, the
//! seed) and its controller as `<prefix>.did`. The key file is accepted by
//! `wasp publish --id-file`, and its content by `--id` / `WASP_ID`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use wasp_crypto::Identity;

/// Arguments for `wasp keygen`.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the key files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Prefix for the key file names.
    #[arg(long, default_value = "wasp")]
    pub prefix: String,

    /// Replace existing key files.
    #[arg(long)]
    pub force: bool,
}

/// Paths written by [`write_keypair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFiles {
    pub key: PathBuf,
    pub did: PathBuf,
}

pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    let identity = Identity::generate();
    let files = write_keypair(&identity, &args.output, &args.prefix, args.force)?;

    tracing::info!(controller = %identity.controller(), "generated signing key");
    println!("{}", identity.controller());
    eprintln!("  Private key: {}", files.key.display());
    eprintln!("  DID:         {}", files.did.display());
    Ok(0)
}

/// Write `identity`'s seed and controller under `output_dir`.
///
/// Refuses to overwrite an existing key file unless `force` is set. The key
/// file is created owner-only (0600 on unix); a replaced key file is
/// removed first so it is never written under its old mode.
pub fn write_keypair(
    identity: &Identity,
    output_dir: &Path,
    prefix: &str,
    force: bool,
) -> Result<KeyFiles> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("failed to create output directory: {}", output_dir.display())
    })?;

    let files = KeyFiles {
        key: output_dir.join(format!("{prefix}.key")),
        did: output_dir.join(format!("{prefix}.did")),
    };
    if files.key.exists() && !force {
        bail!(
            "key file already exists: {} (pass --force to replace it)",
            files.key.display()
        );
    }

    if force && files.key.exists() {
        std::fs::remove_file(&files.key)
            .with_context(|| format!("failed to replace private key: {}", files.key.display()))?;
    }

    let seed = identity.seed_hex();
    create_private(&files.key)
        .and_then(|mut file| {
            file.write_all(seed.as_bytes())?;
            file.write_all(b"\n")
        })
        .with_context(|| format!("failed to write private key: {}", files.key.display()))?;
    std::fs::write(&files.did, format!("{}\n", identity.controller()))
        .with_context(|| format!("failed to write DID: {}", files.did.display()))?;

    Ok(files)
}

/// Create a new file readable only by its owner.
fn create_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
