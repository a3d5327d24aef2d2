//! # wasp-cli -- the `wasp` command
//!
//! ## Subcommands
//!
//! - `wasp publish` -- enumerate files, map them to resource names, and
//!   upload them to a space.
//! - `wasp keygen` -- write a fresh signing key and its `did:key`.
//! - `wasp resolve` -- show which space a storage URL designates.
//!
//! ```bash
//! wasp keygen --output .keys
//! wasp publish --id-file .keys/wasp.key --files 'dist/**' --files-strip-prefix dist/
//! ```
//!
//! ## Inputs From The Environment
//!
//! Every `publish` input may come from the environment when the flag is
//! absent. `WASP_*` variables are checked first, then the `INPUT_*`
//! variables a GitHub Actions step receives (see [`inputs`]).

pub mod inputs;
pub mod keygen;
pub mod output;
pub mod publish;
pub mod resolve;
