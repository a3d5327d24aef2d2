//! Flag and environment input resolution.
//!
//! A flag always wins. Otherwise the variables listed for the input are
//! checked in order and the first non-blank value is used. GitHub Actions
//! passes unset inputs as empty strings, so blank counts as unset.

/// Storage URL. `INPUT_SPACE` is the older name of the same input.
pub const URL_VARS: &[&str] = &["WASP_URL", "INPUT_URL", "INPUT_SPACE"];

/// Signing key material.
pub const ID_VARS: &[&str] = &["WASP_ID", "INPUT_ID"];

/// File selection patterns.
pub const FILES_VARS: &[&str] = &["WASP_FILES", "INPUT_FILES"];

/// Prefix stripped from resource names.
pub const STRIP_PREFIX_VARS: &[&str] = &["WASP_FILES_STRIP_PREFIX", "INPUT_FILESSTRIPPREFIX"];

/// File that receives `key=value` step outputs.
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Read a variable from the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// The flag value if given, else the first non-blank variable in `vars`.
pub fn flag_or_env<F>(flag: Option<&str>, vars: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = flag.filter(|v| !v.trim().is_empty()) {
        return Some(value.to_string());
    }
    vars.iter().find_map(|name| {
        let value = lookup(name).filter(|v| !v.trim().is_empty())?;
        tracing::debug!(var = %name, "input taken from environment");
        Some(value)
    })
}
