//! # Error Types
//!
//! Structured errors for the publish engine, built with `thiserror`.
//!
//! [`AddressError`] and [`EnumerateError`] are fatal: they are raised while
//! resolving inputs, before any network activity. [`GatewayError`] is a
//! per-write transport failure and is recorded, not propagated, by the
//! publish loop.

use thiserror::Error;

/// The supplied storage URL does not describe a space.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The URL could not be parsed or is not http(s).
    #[error("invalid storage URL \"{url}\": {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The URL has a path, but no `/space/` segment in it.
    #[error("storage URL path \"{path}\" has no /space/ segment")]
    MissingSpaceSegment {
        /// The URL path that was searched.
        path: String,
    },

    /// The segment after `/space/` is not a UUID.
    #[error("space id \"{segment}\" is not a valid UUID")]
    InvalidSpaceId {
        /// The segment following `space`.
        segment: String,
    },
}

/// The file selection could not be resolved.
#[derive(Error, Debug)]
pub enum EnumerateError {
    /// The selection contained no include patterns.
    #[error("file selection has no include patterns")]
    NoPatterns,

    /// A pattern is not valid glob syntax.
    #[error("invalid file pattern \"{pattern}\": {source}")]
    Pattern {
        /// The offending pattern as written.
        pattern: String,
        /// The globset diagnostic.
        source: globset::Error,
    },

    /// Walking the file system failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// The directory being walked.
        path: String,
        /// The walkdir error.
        source: walkdir::Error,
    },
}

/// A single write could not be delivered to the storage service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport failure (connection refused, timeout, TLS).
    #[error("transport error writing {resource}: {reason}")]
    Transport {
        /// Target resource URL or path.
        resource: String,
        /// Transport diagnostic.
        reason: String,
    },

    /// The request could not be built (bad URL, bad header value).
    #[error("cannot build request for {resource}: {reason}")]
    Request {
        /// Target resource URL or path.
        resource: String,
        /// What was wrong.
        reason: String,
    },
}
