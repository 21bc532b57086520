//! Fatal errors raised by the verification engine.
//!
//! Missing locales, extra locales, and unmatched keys are ordinary findings
//! and come back inside a [`crate::VerificationResult`]. The variants here
//! cover faults in configuration or the environment, where carrying on would
//! produce a misleading result.

use camino::Utf8PathBuf;
use resx_reader::ResourceReadError;
use thiserror::Error;

use crate::locale::Locale;

/// Classification tag attached to every [`VerifyError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The filename pattern is invalid or did not match a discovered file.
    ResourceFileRegexPattern,
    /// The resource directory could not be listed.
    ResourceDirectory,
    /// A locale's resource file could not be read.
    ResourceFile,
    /// The audit configuration file could not be loaded.
    Configuration,
}

/// Errors that abort a verification check.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A discovered file produced anything other than exactly one match
    /// against the configured filename pattern.
    #[error(
        "the resource file ({file_name}) was not matched with the regular expression in the settings"
    )]
    FilenameParse {
        /// Name of the file that failed to parse.
        file_name: String,
    },

    /// The configured filename pattern is not a valid regular expression.
    #[error("invalid resource filename pattern `{pattern}`")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler diagnostic from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// Listing candidate resource files failed.
    #[error("failed to list resource files matching `{pattern}`: {reason}")]
    Discovery {
        /// Glob pattern used for the listing.
        pattern: String,
        /// Description of the failure.
        reason: String,
    },

    /// A supported locale's resource file could not be loaded.
    #[error("failed to load resources for locale `{locale}`")]
    ReadResource {
        /// Locale whose file failed to load.
        locale: Locale,
        /// The reader's failure, unchanged.
        #[source]
        source: ResourceReadError,
    },

    /// The audit configuration file could not be read.
    #[error("failed to read configuration file {path}")]
    Config {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The audit configuration is not valid TOML for this schema.
    #[error("invalid configuration: {source}")]
    ConfigParse {
        /// Deserialisation failure.
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl VerifyError {
    /// Classification tag for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FilenameParse { .. } | Self::InvalidPattern { .. } => {
                ErrorKind::ResourceFileRegexPattern
            }
            Self::Discovery { .. } => ErrorKind::ResourceDirectory,
            Self::ReadResource { .. } => ErrorKind::ResourceFile,
            Self::Config { .. } | Self::ConfigParse { .. } => ErrorKind::Configuration,
        }
    }
}
