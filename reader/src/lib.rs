//! Readers for localised string resource files.
//!
//! The verification engine only needs to know which keys a resource file
//! defines, so this crate keeps the file format behind the
//! [`ResourceReader`] seam. [`ResxReader`] understands the XML `.resx`
//! layout: every `<data name="...">` element directly below the document
//! root becomes one [`ResourceEntry`], in document order. Schema, header,
//! and `<metadata>` elements are ignored.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use log::trace;
use thiserror::Error;

/// One `(key, value)` pair read from a resource file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceEntry {
    key: String,
    value: String,
}

impl ResourceEntry {
    /// Create an entry from its key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The resource key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The resource value; empty when the file omits it.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the entry, yielding the key.
    #[must_use]
    pub fn into_key(self) -> String {
        self.key
    }
}

/// Errors raised while reading a resource file.
#[derive(Debug, Error)]
pub enum ResourceReadError {
    /// The file could not be opened or read.
    #[error("failed to read resource file {path}")]
    Io {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed XML.
    #[error("resource file {path} is not valid XML: {reason}")]
    Malformed {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// A `<data>` element has no `name` attribute.
    #[error("resource file {path} has a data element without a name")]
    MissingName {
        /// Path of the offending file.
        path: Utf8PathBuf,
    },
}

impl ResourceReadError {
    /// Path of the file that failed to load.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Io { path, .. } | Self::Malformed { path, .. } | Self::MissingName { path } => {
                path
            }
        }
    }
}

/// Source of resource entries for a file on disk.
///
/// Implementations return entries in the order the file declares them.
/// Whether duplicate keys survive is up to the implementation; callers that
/// only care about key presence should treat the result as a set.
pub trait ResourceReader {
    /// Read every entry declared by the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceReadError`] when the file is missing, unreadable,
    /// or not in the expected format.
    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<ResourceEntry>, ResourceReadError>;

    /// Read only the keys declared by the file at `path`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`ResourceReader::read_entries`].
    fn read_keys(&self, path: &Utf8Path) -> Result<Vec<String>, ResourceReadError> {
        Ok(self
            .read_entries(path)?
            .into_iter()
            .map(ResourceEntry::into_key)
            .collect())
    }
}

impl<R: ResourceReader + ?Sized> ResourceReader for &R {
    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<ResourceEntry>, ResourceReadError> {
        (**self).read_entries(path)
    }
}

/// Reader for XML `.resx` files.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResxReader;

impl ResxReader {
    /// Parse `.resx` XML that has already been loaded into memory.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceReadError::Malformed`] for invalid XML and
    /// [`ResourceReadError::MissingName`] for unnamed `<data>` elements.
    pub fn parse_str(
        &self,
        path: &Utf8Path,
        content: &str,
    ) -> Result<Vec<ResourceEntry>, ResourceReadError> {
        let document =
            roxmltree::Document::parse(content).map_err(|error| ResourceReadError::Malformed {
                path: path.to_owned(),
                reason: error.to_string(),
            })?;

        document
            .root_element()
            .children()
            .filter(|node| node.has_tag_name("data"))
            .map(|node| {
                let name = node
                    .attribute("name")
                    .ok_or_else(|| ResourceReadError::MissingName {
                        path: path.to_owned(),
                    })?;
                let value = node
                    .children()
                    .find(|child| child.has_tag_name("value"))
                    .and_then(|child| child.text())
                    .unwrap_or_default();
                Ok(ResourceEntry::new(name, value))
            })
            .collect()
    }
}

impl ResourceReader for ResxReader {
    fn read_entries(&self, path: &Utf8Path) -> Result<Vec<ResourceEntry>, ResourceReadError> {
        let content = fs::read_to_string(path).map_err(|source| ResourceReadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let entries = self.parse_str(path, &content)?;
        trace!(
            target: "resx_reader",
            "read {} entries from {path}",
            entries.len(),
        );
        Ok(entries)
    }
}
