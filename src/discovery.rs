//! Resource file discovery and filename parsing.
//!
//! Discovery lists every file in a directory whose name starts with the
//! resource name and ends in `.resx`, mirroring a `<name>*.resx` glob. Each
//! name is then taken apart with the configured filename pattern to learn
//! which locale it holds.

use camino::{Utf8Path, Utf8PathBuf};
use glob::{Pattern, glob};
use log::trace;
use regex::Regex;

use crate::error::VerifyError;
use crate::locale::Locale;
use crate::naming::LOCALE_GROUP;

/// Extension shared by every discovered resource file.
pub const RESOURCE_EXTENSION: &str = "resx";

/// List the names of files in `directory` matching `<resource_name>*.resx`.
///
/// Names are returned in the glob's (sorted) order. Directories matching the
/// pattern are skipped, and a directory that does not exist yields no files.
///
/// # Errors
///
/// Returns [`VerifyError::Discovery`] when the glob cannot be built, an entry
/// cannot be inspected, or a file name is not valid UTF-8.
pub fn discover_resource_files(
    directory: &Utf8Path,
    resource_name: &str,
) -> Result<Vec<String>, VerifyError> {
    let pattern = Utf8Path::new(&Pattern::escape(directory.as_str()))
        .join(format!(
            "{}*.{RESOURCE_EXTENSION}",
            Pattern::escape(resource_name)
        ))
        .into_string();
    let discovery_error = |reason: String| VerifyError::Discovery {
        pattern: pattern.clone(),
        reason,
    };

    let walker = glob(&pattern).map_err(|error| discovery_error(error.to_string()))?;
    let mut file_names = Vec::new();

    for entry in walker {
        let path = entry.map_err(|error| discovery_error(error.to_string()))?;
        if !path.is_file() {
            continue;
        }

        let path = Utf8PathBuf::from_path_buf(path).map_err(|path| {
            discovery_error(format!("{} is not valid UTF-8", path.display()))
        })?;
        if let Some(file_name) = path.file_name() {
            trace!(target: "resx_verify::discovery", "discovered {file_name}");
            file_names.push(file_name.to_owned());
        }
    }

    Ok(file_names)
}

/// Compiled filename pattern used to recover a file's locale.
#[derive(Clone, Debug)]
pub struct FilenameParser {
    pattern: Regex,
}

impl FilenameParser {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidPattern`] when `pattern` is not a valid
    /// regular expression.
    pub fn compile(pattern: &str) -> Result<Self, VerifyError> {
        Regex::new(pattern)
            .map(|compiled| Self { pattern: compiled })
            .map_err(|source| VerifyError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Locale held by `file_name`.
    ///
    /// The pattern must match the name exactly once. An empty or missing
    /// `locale` group means the file belongs to `default_locale`.
    ///
    /// ```
    /// use resx_verify::{FilenameParser, Locale, NamingConfig};
    ///
    /// let parser = FilenameParser::compile(&NamingConfig::default().filename_pattern)?;
    /// let default = Locale::from("en-US");
    /// assert_eq!(parser.locale_of("Menu.fr-FR.resx", &default)?, "fr-FR");
    /// assert_eq!(parser.locale_of("Menu.resx", &default)?, "en-US");
    /// # Ok::<(), resx_verify::VerifyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::FilenameParse`] when the pattern matches zero
    /// times or more than once.
    pub fn locale_of(&self, file_name: &str, default_locale: &Locale) -> Result<Locale, VerifyError> {
        let mut matches = self.pattern.captures_iter(file_name);
        let (Some(captures), None) = (matches.next(), matches.next()) else {
            return Err(VerifyError::FilenameParse {
                file_name: file_name.to_owned(),
            });
        };

        Ok(captures
            .name(LOCALE_GROUP)
            .map(|group| group.as_str())
            .filter(|locale| !locale.is_empty())
            .map_or_else(|| default_locale.clone(), Locale::from))
    }
}
