use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading a document or reading a value.
///
/// Parse variants carry the 1-based line number where the problem was
/// detected; lookup and conversion variants carry the offending path or raw
/// value instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open config file {path:?}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config data")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("failed to write default config file {path:?}")]
    DefaultWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: section header is missing a closing ']'")]
    MalformedSection { line: usize },

    #[error("line {line}: section name cannot be empty")]
    EmptySectionName { line: usize },

    #[error("line {line}: name {name:?} contains whitespace")]
    NameContainsWhitespace { name: String, line: usize },

    #[error("line {line}: key/value pair appears outside of any section")]
    KeyOutsideSection { line: usize },

    #[error("line {line}: key/value pair is missing '='")]
    MissingEquals { line: usize },

    #[error("line {line}: key cannot be empty")]
    EmptyKey { line: usize },

    #[error("malformed path {path:?}: expected \"section.key\"")]
    MalformedPath { path: String },

    #[error("path {path:?} has an empty section or key component")]
    EmptyPathComponent { path: String },

    #[error("section {section:?} not found; available sections: {available}")]
    SectionNotFound { section: String, available: String },

    #[error("key {key:?} not found in section {section:?}; available keys: {available}")]
    KeyNotFound {
        key: String,
        section: String,
        available: String,
    },

    #[error("cannot convert {value:?} to {target}")]
    TypeConversion {
        value: String,
        target: &'static str,
    },
}
