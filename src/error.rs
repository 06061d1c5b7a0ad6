// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use thiserror::Error;

/// Convenience type alias for errors returned by the random source.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// An invalid generator configuration.
///
/// Always reported by [`Builder::finalize`] before any entropy is consumed.
///
/// [`Builder::finalize`]: struct.Builder.html#method.finalize
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the type must not be empty")]
    EmptyType,
    #[error("the shard must not be empty when include_shard is set")]
    EmptyShard,
    #[error("random_length must be at least 1, got {0}")]
    RandomLength(usize),
    #[error("unknown encoding `{0}`, expected one of hex, base64url, base62")]
    UnknownEncoding(String),
    #[error("{field} `{value}` contains the `-` separator")]
    ContainsSeparator { field: &'static str, value: String },
}

/// A malformed identifier handed to [`decode_id`].
///
/// [`decode_id`]: fn.decode_id.html
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid id format: expected at least 2 segments, got {0}")]
    TooFewSegments(usize),
    #[error("malformed presence flag `{0}`")]
    MalformedFlag(String),
    #[error("presence flag `{flag}` needs {expected} segments before it, got {actual}")]
    MissingSegments {
        flag: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid compact timestamp `{0}`")]
    InvalidTimestamp(String),
}

/// The error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid identifier: {0}")]
    Format(#[from] FormatError),
    #[error("random source returned an error: {0}")]
    RandomSource(#[source] BoxDynError),
    #[error("clock returned `{0}`, which has no four digit year")]
    TimestampOutOfRange(DateTime<Utc>),
}

impl Error {
    /// Returns true if the error was raised while validating a configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns true if the error was raised while decoding an identifier.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}
