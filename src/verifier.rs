//! The verification engine.
//!
//! [`ResxVerifier`] answers three questions about a resource set described by
//! a [`ResourceRequest`]:
//!
//! 1. Does every supported locale have a file?
//! 2. Are there files for locales that are not supported?
//! 3. Does every key appear in every supported locale's file?
//!
//! Each answer is a [`VerificationResult`]. Only configuration and I/O faults
//! surface as [`VerifyError`]. The verifier keeps no state between calls.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use resx_reader::{ResourceReader, ResxReader};

use crate::discovery::{FilenameParser, discover_resource_files};
use crate::error::VerifyError;
use crate::locale::{self, Locale};
use crate::naming::NamingConfig;
use crate::outcome::{MissingKeys, VerificationResult};
use crate::request::ResourceRequest;

const LOG_TARGET: &str = "resx_verify::verifier";

/// The three checks calling test code relies on.
///
/// [`ResxVerifier`] is the real implementation; the trait lets test suites
/// substitute their own, building results with
/// [`VerificationResult::evaluate`].
pub trait ResourceTester {
    /// Verify that a file exists for every supported locale.
    ///
    /// The result lists the supported locales whose file is missing, in
    /// request order. A missing directory reports every locale as missing.
    fn verify_supported_locales_present(
        &self,
        request: &ResourceRequest,
    ) -> VerificationResult<Vec<Locale>>;

    /// Verify that no files exist for locales outside the supported set.
    ///
    /// The result lists the unexpected locales in file-listing order.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifyError`] tagged
    /// [`crate::ErrorKind::ResourceFileRegexPattern`] when the filename
    /// pattern is invalid or fails to match a discovered file, and
    /// [`VerifyError::Discovery`] when the directory cannot be listed.
    fn verify_only_supported_locales_present(
        &self,
        request: &ResourceRequest,
    ) -> Result<VerificationResult<Vec<Locale>>, VerifyError>;

    /// Verify that every key is defined by every supported locale.
    ///
    /// The result maps each key missing somewhere to the supported locales
    /// lacking it, in request order.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ReadResource`] when any supported locale's file
    /// cannot be loaded.
    fn verify_all_keys_match(
        &self,
        request: &ResourceRequest,
    ) -> Result<VerificationResult<MissingKeys>, VerifyError>;
}

/// Verification engine for localised resource sets.
///
/// ```no_run
/// use resx_verify::{ResourceRequest, ResourceTester, ResxVerifier};
///
/// let verifier = ResxVerifier::default();
/// let request = ResourceRequest::new("AppStrings", "resources", "en-US", ["en-US", "es-ES"]);
///
/// let result = verifier.verify_supported_locales_present(&request);
/// assert!(result.passed(), "{}", result.error_message().unwrap_or_default());
/// ```
#[derive(Clone, Debug)]
pub struct ResxVerifier<R = ResxReader> {
    naming: NamingConfig,
    reader: R,
}

impl ResxVerifier {
    /// Create a verifier reading `.resx` files with the given naming scheme.
    #[must_use]
    pub const fn new(naming: NamingConfig) -> Self {
        Self::with_reader(naming, ResxReader)
    }
}

impl Default for ResxVerifier {
    fn default() -> Self {
        Self::new(NamingConfig::default())
    }
}

impl<R: ResourceReader> ResxVerifier<R> {
    /// Create a verifier that loads keys through `reader`.
    #[must_use]
    pub const fn with_reader(naming: NamingConfig, reader: R) -> Self {
        Self { naming, reader }
    }

    /// Naming scheme used to build and parse file names.
    #[must_use]
    pub const fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    fn missing_locales(&self, request: &ResourceRequest) -> Vec<Locale> {
        request
            .supported_locales()
            .iter()
            .filter(|locale| !request.resource_path(&self.naming, locale).is_file())
            .cloned()
            .collect()
    }

    fn unsupported_locales(&self, request: &ResourceRequest) -> Result<Vec<Locale>, VerifyError> {
        let parser = FilenameParser::compile(&self.naming.filename_pattern)?;
        let files = discover_resource_files(request.directory(), request.resource_name())?;
        let mut unsupported = Vec::new();
        for file_name in &files {
            let locale = parser.locale_of(file_name, request.default_locale())?;
            if !request.supports(&locale) {
                unsupported.push(locale);
            }
        }

        Ok(unsupported)
    }

    fn missing_keys(&self, request: &ResourceRequest) -> Result<MissingKeys, VerifyError> {
        let mut seen: BTreeMap<String, BTreeSet<&Locale>> = BTreeMap::new();

        for locale in request.supported_locales() {
            let path = request.resource_path(&self.naming, locale);
            let keys = self
                .reader
                .read_keys(&path)
                .map_err(|source| VerifyError::ReadResource {
                    locale: locale.clone(),
                    source,
                })?;
            for key in keys {
                seen.entry(key).or_default().insert(locale);
            }
        }

        let expected: BTreeSet<&Locale> = request.supported_locales().iter().collect();
        Ok(seen
            .into_iter()
            .filter(|(_, holders)| *holders != expected)
            .map(|(key, holders)| {
                let mut listed: BTreeSet<&Locale> = BTreeSet::new();
                let absent: Vec<Locale> = request
                    .supported_locales()
                    .iter()
                    .filter(|locale| !holders.contains(locale) && listed.insert(*locale))
                    .cloned()
                    .collect();
                (key, absent)
            })
            .collect())
    }

    fn warn_on_duplicates(request: &ResourceRequest) {
        let duplicates = request.duplicate_locales();
        if !duplicates.is_empty() {
            let listed: Vec<Locale> = duplicates.into_iter().cloned().collect();
            warn!(
                target: LOG_TARGET,
                "supported locales for {} repeat ({}); results may list them more than once",
                request.resource_name(),
                locale::join(&listed),
            );
        }
    }

    fn log_outcome<T>(check: &str, request: &ResourceRequest, result: &VerificationResult<T>) {
        debug!(
            target: LOG_TARGET,
            "{check} for {}: {}",
            request.resource_name(),
            result.error_message().unwrap_or("passed"),
        );
    }
}

impl<R: ResourceReader> ResourceTester for ResxVerifier<R> {
    fn verify_supported_locales_present(
        &self,
        request: &ResourceRequest,
    ) -> VerificationResult<Vec<Locale>> {
        Self::warn_on_duplicates(request);
        let result = VerificationResult::evaluate(self.missing_locales(request), |missing| {
            format!(
                "Supported locales missing ({}) for {} resx files.",
                locale::join(missing),
                request.resource_name(),
            )
        });
        Self::log_outcome("supported locale check", request, &result);
        result
    }

    fn verify_only_supported_locales_present(
        &self,
        request: &ResourceRequest,
    ) -> Result<VerificationResult<Vec<Locale>>, VerifyError> {
        Self::warn_on_duplicates(request);
        let result = VerificationResult::evaluate(self.unsupported_locales(request)?, |extra| {
            format!(
                "Extra locales ({}) exist for {} resx files.",
                locale::join(extra),
                request.resource_name(),
            )
        });
        Self::log_outcome("extra locale check", request, &result);
        Ok(result)
    }

    fn verify_all_keys_match(
        &self,
        request: &ResourceRequest,
    ) -> Result<VerificationResult<MissingKeys>, VerifyError> {
        Self::warn_on_duplicates(request);
        let result = VerificationResult::evaluate(self.missing_keys(request)?, |missing| {
            format!(
                "Some keys ({}) are not in all of the {} resx files.",
                missing.keys().map(String::as_str).collect::<Vec<_>>().join(", "),
                request.resource_name(),
            )
        });
        Self::log_outcome("key match check", request, &result);
        Ok(result)
    }
}
