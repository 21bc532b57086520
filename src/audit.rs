//! Run every check for a resource set and summarise the outcome.

use std::fmt;

use log::debug;
use resx_reader::ResourceReader;

use crate::config::AuditConfig;
use crate::error::VerifyError;
use crate::locale::Locale;
use crate::outcome::{MissingKeys, VerificationResult};
use crate::request::ResourceRequest;
use crate::verifier::{ResourceTester, ResxVerifier};

/// Results of all three checks for one resource set.
///
/// Keys are only compared once every supported locale has a file, so an
/// audit of an incomplete set reports the missing locales instead of failing
/// on the first file it cannot read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceAudit {
    resource_name: String,
    supported_locales: VerificationResult<Vec<Locale>>,
    extra_locales: VerificationResult<Vec<Locale>>,
    keys: Option<VerificationResult<MissingKeys>>,
}

impl ResourceAudit {
    /// Run the three checks of `tester` against `request`.
    ///
    /// The key check is skipped when a supported locale's file is missing.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal [`VerifyError`] raised by a check.
    pub fn run(tester: &impl ResourceTester, request: &ResourceRequest) -> Result<Self, VerifyError> {
        let supported_locales = tester.verify_supported_locales_present(request);
        let extra_locales = tester.verify_only_supported_locales_present(request)?;
        let keys = if supported_locales.passed() {
            Some(tester.verify_all_keys_match(request)?)
        } else {
            debug!(
                target: "resx_verify::audit",
                "skipping key check for {}: supported locales are missing",
                request.resource_name(),
            );
            None
        };

        Ok(Self {
            resource_name: request.resource_name().to_owned(),
            supported_locales,
            extra_locales,
            keys,
        })
    }

    /// Name of the audited resource set.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Whether every check passed. A skipped key check counts as failed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        let keys_passed = match &self.keys {
            Some(keys) => keys.passed(),
            None => false,
        };
        self.supported_locales.passed() && self.extra_locales.passed() && keys_passed
    }

    /// Outcome of the supported-locale check.
    #[must_use]
    pub const fn supported_locales(&self) -> &VerificationResult<Vec<Locale>> {
        &self.supported_locales
    }

    /// Outcome of the extra-locale check.
    #[must_use]
    pub const fn extra_locales(&self) -> &VerificationResult<Vec<Locale>> {
        &self.extra_locales
    }

    /// Outcome of the key-match check, `None` when it was skipped.
    #[must_use]
    pub const fn keys(&self) -> Option<&VerificationResult<MissingKeys>> {
        self.keys.as_ref()
    }

    /// Messages of the failed checks, in check order.
    #[must_use]
    pub fn failure_messages(&self) -> Vec<&str> {
        [
            self.supported_locales.error_message(),
            self.extra_locales.error_message(),
            self.keys
                .as_ref()
                .and_then(VerificationResult::error_message),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl fmt::Display for ResourceAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failures = self.failure_messages();
        if failures.is_empty() {
            return write!(f, "all checks passed for {} resx files", self.resource_name);
        }
        f.write_str(&failures.join("\n"))
    }
}

impl<R: ResourceReader> ResxVerifier<R> {
    /// Run every check for `request`.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal [`VerifyError`] raised by a check.
    pub fn audit(&self, request: &ResourceRequest) -> Result<ResourceAudit, VerifyError> {
        ResourceAudit::run(self, request)
    }
}

/// Audit every resource set listed in `config`, in file order.
///
/// # Errors
///
/// Stops at the first fatal [`VerifyError`].
pub fn audit_all(config: &AuditConfig) -> Result<Vec<ResourceAudit>, VerifyError> {
    let verifier = ResxVerifier::new(config.naming.clone());
    config
        .resources
        .iter()
        .map(|request| verifier.audit(request))
        .collect()
}
