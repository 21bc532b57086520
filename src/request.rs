//! Description of one localised resource set to verify.

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::locale::Locale;
use crate::naming::NamingConfig;

/// A resource set: its base name, where it lives, and which locales it must
/// provide.
///
/// The request is immutable once built. Supported locales keep the order the
/// caller gave them; that order is reflected in every result the engine
/// produces. Uniqueness is the caller's concern; duplicates are tolerated but
/// logged by the verifier.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResourceRequest {
    resource_name: String,
    directory: Utf8PathBuf,
    default_locale: Locale,
    supported_locales: Vec<Locale>,
}

impl ResourceRequest {
    /// Describe the resource set `resource_name` stored under `directory`.
    ///
    /// ```
    /// use resx_verify::ResourceRequest;
    ///
    /// let request = ResourceRequest::new("AppStrings", "resources", "en-US", ["en-US", "es-ES"]);
    /// assert_eq!(request.resource_name(), "AppStrings");
    /// assert_eq!(request.supported_locales().len(), 2);
    /// ```
    #[must_use]
    pub fn new<L>(
        resource_name: impl Into<String>,
        directory: impl Into<Utf8PathBuf>,
        default_locale: impl Into<Locale>,
        supported_locales: impl IntoIterator<Item = L>,
    ) -> Self
    where
        L: Into<Locale>,
    {
        Self {
            resource_name: resource_name.into(),
            directory: directory.into(),
            default_locale: default_locale.into(),
            supported_locales: supported_locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Base name shared by every file in the set, e.g. `AppStrings`.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Directory holding the resource files.
    #[must_use]
    pub fn directory(&self) -> &Utf8Path {
        &self.directory
    }

    /// Locale whose file omits the locale segment.
    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales the set must provide, in caller order.
    #[must_use]
    pub fn supported_locales(&self) -> &[Locale] {
        &self.supported_locales
    }

    /// Whether `locale` is one of the supported locales.
    #[must_use]
    pub fn supports(&self, locale: &Locale) -> bool {
        self.supported_locales.contains(locale)
    }

    /// Path of the file expected to hold `locale`'s resources.
    ///
    /// The default locale uses the naming configuration's default template;
    /// every other locale uses the locale template.
    #[must_use]
    pub fn resource_path(&self, naming: &NamingConfig, locale: &Locale) -> Utf8PathBuf {
        let file_name = if *locale == self.default_locale {
            naming.default_file_name(&self.resource_name, locale.as_str())
        } else {
            naming.locale_file_name(&self.resource_name, locale.as_str())
        };
        self.directory.join(file_name)
    }

    /// Rebase a relative directory onto `root`; absolute directories are
    /// left untouched.
    pub(crate) fn resolve_against(&mut self, root: &Utf8Path) {
        if self.directory.is_relative() {
            self.directory = root.join(&self.directory);
        }
    }

    /// Supported locales that appear more than once, in first-repeat order.
    pub(crate) fn duplicate_locales(&self) -> Vec<&Locale> {
        let mut seen: BTreeSet<&Locale> = BTreeSet::new();
        let mut reported: BTreeSet<&Locale> = BTreeSet::new();
        self.supported_locales
            .iter()
            .filter(|locale| !seen.insert(*locale) && reported.insert(*locale))
            .collect()
    }
}
