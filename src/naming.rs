//! File naming conventions for localised resource sets.
//!
//! A resource set such as `AppStrings` stores its default locale in
//! `AppStrings.resx` and every other locale in `AppStrings.<locale>.resx`.
//! [`NamingConfig`] holds the two templates used to build those names and
//! the regular expression used to take them apart again. The defaults
//! implement the convention above; custom values adapt the engine to other
//! schemes.

use serde::Deserialize;

/// Placeholder replaced by the resource name in filename templates.
pub const RESOURCE_NAME_PLACEHOLDER: &str = "{resourceName}";

/// Placeholder replaced by the locale in filename templates.
pub const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Capture group holding the resource name in the filename pattern.
pub const RESOURCE_NAME_GROUP: &str = "resource_name";

/// Capture group holding the locale in the filename pattern.
pub const LOCALE_GROUP: &str = "locale";

/// Templates and pattern used to build and parse resource file names.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Template for the default locale's file, e.g. `{resourceName}.resx`.
    pub default_pattern: String,
    /// Template for every other locale, e.g. `{resourceName}.{locale}.resx`.
    pub locale_pattern: String,
    /// Regular expression with a `resource_name` group and an optional
    /// `locale` group. A file whose `locale` group is empty or absent
    /// belongs to the default locale.
    pub filename_pattern: String,
}

impl NamingConfig {
    const DEFAULT_PATTERN: &'static str = "{resourceName}.resx";
    const LOCALE_PATTERN: &'static str = "{resourceName}.{locale}.resx";
    const FILENAME_PATTERN: &'static str = r"(?P<resource_name>[^.]+)(\.(?P<locale>.+))?\.resx";

    /// Build a configuration from explicit templates and pattern.
    ///
    /// No validation happens here: an empty or broken pattern is accepted
    /// and only reported when a check needs to parse file names.
    ///
    /// ```
    /// use resx_verify::NamingConfig;
    ///
    /// let naming = NamingConfig::new("{resourceName}.xml", "{resourceName}-{locale}.xml", "");
    /// assert_eq!(naming.default_file_name("Menu", "en-GB"), "Menu.xml");
    /// assert_eq!(naming.locale_file_name("Menu", "fr-FR"), "Menu-fr-FR.xml");
    /// ```
    #[must_use]
    pub fn new(
        default_pattern: impl Into<String>,
        locale_pattern: impl Into<String>,
        filename_pattern: impl Into<String>,
    ) -> Self {
        Self {
            default_pattern: default_pattern.into(),
            locale_pattern: locale_pattern.into(),
            filename_pattern: filename_pattern.into(),
        }
    }

    /// File name of the default locale's resource file.
    ///
    /// The default template normally omits `{locale}`; when it does not, the
    /// default locale is substituted.
    #[must_use]
    pub fn default_file_name(&self, resource_name: &str, default_locale: &str) -> String {
        expand(&self.default_pattern, resource_name, default_locale)
    }

    /// File name of a non-default locale's resource file.
    #[must_use]
    pub fn locale_file_name(&self, resource_name: &str, locale: &str) -> String {
        expand(&self.locale_pattern, resource_name, locale)
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_PATTERN,
            Self::LOCALE_PATTERN,
            Self::FILENAME_PATTERN,
        )
    }
}

fn expand(template: &str, resource_name: &str, locale: &str) -> String {
    template
        .replace(RESOURCE_NAME_PLACEHOLDER, resource_name)
        .replace(LOCALE_PLACEHOLDER, locale)
}
