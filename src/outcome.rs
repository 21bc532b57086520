//! Uniform pass/fail record returned by every verification check.

use std::collections::BTreeMap;

use crate::locale::Locale;

/// Locales missing each key, keyed by resource key.
pub type MissingKeys = BTreeMap<String, Vec<Locale>>;

/// Outcome of a single verification check.
///
/// `data` always holds the check's findings: empty when the check passed,
/// otherwise the locales or keys that need attention. `error_message` is
/// present exactly when the check failed and is phrased for display in a
/// failing test assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult<T> {
    passed: bool,
    data: T,
    error_message: Option<String>,
}

impl<T: Findings> VerificationResult<T> {
    /// Judge `data`, formatting a message with `describe` only on failure.
    ///
    /// Custom [`crate::ResourceTester`] implementations build their results
    /// here, so the message is present exactly when the findings are not
    /// clear.
    ///
    /// ```
    /// use resx_verify::{Locale, VerificationResult};
    ///
    /// let result = VerificationResult::evaluate(vec![Locale::from("fr")], |missing| {
    ///     format!("{} locale(s) missing", missing.len())
    /// });
    /// assert!(!result.passed());
    /// assert_eq!(result.error_message(), Some("1 locale(s) missing"));
    /// ```
    #[must_use]
    pub fn evaluate(data: T, describe: impl FnOnce(&T) -> String) -> Self {
        let passed = data.is_clear();
        let error_message = if passed { None } else { Some(describe(&data)) };
        Self {
            passed,
            data,
            error_message,
        }
    }
}

impl<T> VerificationResult<T> {
    /// Whether the check passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Findings gathered by the check.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Human-readable failure description, absent when the check passed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Consume the result, yielding its findings.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Check payloads that can tell whether they report any problem.
pub trait Findings {
    /// `true` when there is nothing to report.
    fn is_clear(&self) -> bool;
}

impl Findings for Vec<Locale> {
    fn is_clear(&self) -> bool {
        self.is_empty()
    }
}

impl Findings for MissingKeys {
    fn is_clear(&self) -> bool {
        self.is_empty()
    }
}
