//! Verification helpers for localised `.resx` resource sets.
//!
//! A resource set is a family of files sharing a base name, such as
//! `AppStrings.resx` and `AppStrings.es-ES.resx`. [`ResxVerifier`] checks
//! that every supported locale has a file, that no unsupported locale has
//! one, and that every key is defined by every locale. The checks are meant
//! to be called from test suites so missing translations and stray locale
//! files are caught before release.
//!
//! ```no_run
//! use resx_verify::{ResourceRequest, ResourceTester, ResxVerifier};
//!
//! let verifier = ResxVerifier::default();
//! let request = ResourceRequest::new("AppStrings", "resources", "en-US", ["en-US", "es-ES"]);
//!
//! let keys = verifier.verify_all_keys_match(&request)?;
//! assert!(keys.passed(), "{}", keys.error_message().unwrap_or_default());
//! # Ok::<(), resx_verify::VerifyError>(())
//! ```

pub mod audit;
pub mod config;
pub mod discovery;
pub mod error;
pub mod locale;
pub mod naming;
pub mod outcome;
pub mod request;
pub mod verifier;

pub use audit::{ResourceAudit, audit_all};
pub use config::{AuditConfig, CONFIG_FILE_NAME};
pub use discovery::{FilenameParser, discover_resource_files};
pub use error::{ErrorKind, VerifyError};
pub use locale::Locale;
pub use naming::NamingConfig;
pub use outcome::{Findings, MissingKeys, VerificationResult};
pub use request::ResourceRequest;
pub use resx_reader::{ResourceEntry, ResourceReadError, ResourceReader, ResxReader};
pub use verifier::{ResourceTester, ResxVerifier};
