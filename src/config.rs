//! Audit configuration loaded from `resx-verify.toml`.
//!
//! A configuration file lists the resource sets to audit and may override
//! the naming scheme shared by all of them:
//!
//! ```toml
//! [naming]
//! locale_pattern = "{resourceName}.{locale}.resx"
//!
//! [[resources]]
//! resource_name = "AppStrings"
//! directory = "resources"
//! default_locale = "en-US"
//! supported_locales = ["en-US", "es-ES"]
//! ```
//!
//! Omitted naming fields keep their defaults. Relative resource directories
//! are resolved against the directory holding the configuration file when it
//! is loaded with [`AuditConfig::load`].

use std::fs;

use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

use crate::error::VerifyError;
use crate::naming::NamingConfig;
use crate::request::ResourceRequest;

/// Conventional name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "resx-verify.toml";

/// Resource sets to audit together with their naming scheme.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Naming scheme shared by every listed resource set.
    pub naming: NamingConfig,
    /// Resource sets to audit, in file order.
    pub resources: Vec<ResourceRequest>,
}

impl AuditConfig {
    /// Parse configuration from TOML source.
    ///
    /// Resource directories are kept exactly as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use resx_verify::AuditConfig;
    ///
    /// let config = AuditConfig::from_toml_str("")?;
    /// assert!(config.resources.is_empty());
    /// assert_eq!(config.naming.default_pattern, "{resourceName}.resx");
    /// # Ok::<(), resx_verify::VerifyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ConfigParse`] for malformed TOML, unknown
    /// fields, or missing request fields.
    pub fn from_toml_str(source: &str) -> Result<Self, VerifyError> {
        toml::from_str(source).map_err(|error| VerifyError::ConfigParse {
            source: Box::new(error),
        })
    }

    /// Load configuration from `path`, resolving relative resource
    /// directories against the file's parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Config`] when the file cannot be read and
    /// [`VerifyError::ConfigParse`] when it cannot be parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, VerifyError> {
        let source = fs::read_to_string(path).map_err(|error| VerifyError::Config {
            path: path.to_owned(),
            source: error,
        })?;
        let mut config = Self::from_toml_str(&source)?;

        let root = path.parent().unwrap_or_else(|| Utf8Path::new(""));
        for request in &mut config.resources {
            request.resolve_against(root);
        }

        debug!(
            target: "resx_verify::config",
            "loaded {} resource set(s) from {path}",
            config.resources.len(),
        );
        Ok(config)
    }
}
