#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Typed reader for line-oriented INI configuration files.
//!
//! A [`Config`] is built once from a file (or from the compiled-in default
//! document when the file is missing and default creation is allowed) and is
//! read-only afterward. Values are stored as trimmed text and converted to a
//! requested type only at lookup time, addressed by a dotted
//! `"section.key"` path.

mod document;
mod error;
mod parser;
mod value;

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

pub use crate::document::{Document, Section};
pub use crate::error::Error;
pub use crate::value::FromValue;

use crate::parser::Parser;

/// The document parsed in memory and written to disk when the backing file
/// does not exist and default creation is allowed.
pub const DEFAULT_CONFIG: &str = "\
[Section1]
; sample section
var1 = 5
var2 = Hello, world!

[Section2]
var1 = 42
var2 = Sample text line
";

/// An immutable store of typed configuration values.
#[derive(Debug, Clone)]
pub struct Config {
    document: Document,
    using_default: bool,
}

impl Config {
    /// Load the configuration at `path`.
    ///
    /// When the file does not exist and `create_default` is true, the
    /// compiled-in [`DEFAULT_CONFIG`] document is parsed instead and then
    /// written back to `path`. A failed write-back keeps the in-memory store
    /// usable; it is reported through the `log` facade rather than as an
    /// error, since the document was already parsed successfully. Use
    /// [`write_default_config`] directly when the write itself must be
    /// checked.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be opened (and defaults are disallowed or
    /// it exists but is unreadable), or when its contents violate the
    /// format.
    pub fn open(path: impl AsRef<Path>, create_default: bool) -> Result<Self, Error> {
        let path = path.as_ref();

        match fs::File::open(path) {
            Ok(mut file) => Self::from_reader(&mut file),
            Err(source) if source.kind() == io::ErrorKind::NotFound && create_default => {
                let mut config = DEFAULT_CONFIG.parse::<Self>()?;
                config.using_default = true;

                match write_default_config(path) {
                    Ok(()) => info!("created default config file: {}", path.display()),
                    Err(e) => warn!("default config could not be persisted: {e}"),
                }

                Ok(config)
            }
            Err(source) => Err(Error::FileOpen {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse a configuration document from any reader.
    ///
    /// # Errors
    ///
    /// Fails when reading fails or the text violates the format.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| Error::Read { source })?;

        text.parse()
    }

    /// Whether this store was built from [`DEFAULT_CONFIG`] because the
    /// backing file was missing.
    #[must_use]
    pub fn using_default(&self) -> bool {
        self.using_default
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Look up the raw stored text for a `"section.key"` path.
    ///
    /// # Errors
    ///
    /// Fails when the path is malformed or the section or key is unknown.
    pub fn get_raw(&self, path: &str) -> Result<&str, Error> {
        self.document.resolve(path)
    }

    /// Look up a value and convert it to `T`.
    ///
    /// # Errors
    ///
    /// Fails on lookup misses and when the raw text does not parse as `T`.
    pub fn get<T: FromValue>(&self, path: &str) -> Result<T, Error> {
        T::from_value(self.get_raw(path)?)
    }

    /// # Errors
    ///
    /// Fails on lookup misses; the conversion itself cannot fail.
    pub fn get_string(&self, path: &str) -> Result<String, Error> {
        self.get(path)
    }

    /// # Errors
    ///
    /// Fails on lookup misses and on values that are not base-10 integers.
    pub fn get_int(&self, path: &str) -> Result<i64, Error> {
        self.get(path)
    }

    /// # Errors
    ///
    /// Fails on lookup misses and on values that are not decimal literals.
    pub fn get_double(&self, path: &str) -> Result<f64, Error> {
        self.get(path)
    }

    /// # Errors
    ///
    /// Fails on lookup misses and on values that are not decimal literals.
    pub fn get_float(&self, path: &str) -> Result<f32, Error> {
        self.get(path)
    }

    /// # Errors
    ///
    /// Fails on lookup misses and on values outside the accepted true/false
    /// token sets.
    pub fn get_bool(&self, path: &str) -> Result<bool, Error> {
        self.get(path)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            document: Parser::new(s).into_document()?,
            using_default: false,
        })
    }
}

/// Write the compiled-in default document verbatim to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Fails when the file cannot be created or written.
pub fn write_default_config(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();

    fs::write(path, DEFAULT_CONFIG).map_err(|source| Error::DefaultWrite {
        path: path.to_path_buf(),
        source,
    })
}
