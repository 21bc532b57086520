//! Checks against the checked-in fixture resource sets.
//!
//! Every set lives in `tests/fixtures/resources`, uses `test1` as its default
//! locale, and supports `test1` and `test2`:
//!
//! - `AllGood` is complete and consistent.
//! - `MissingLocales` lacks the `test2` file.
//! - `ExtraLocales` carries an unsupported `test3` file.
//! - `MissingKeys` lacks `String2` in `test2`.

mod support;

use resx_verify::{
    ErrorKind, Locale, NamingConfig, ResourceRequest, ResourceTester, ResxVerifier,
    VerificationResult, VerifyError,
};
use rstest::{fixture, rstest};
use support::resx::fixtures_dir;

fn request(resource_name: &str) -> ResourceRequest {
    ResourceRequest::new(
        resource_name,
        fixtures_dir().join("resources"),
        "test1",
        ["test1", "test2"],
    )
}

#[fixture]
fn verifier() -> ResxVerifier {
    ResxVerifier::default()
}

#[rstest]
fn missing_locales_fail_with_the_absent_locale(verifier: ResxVerifier) {
    let result = verifier.verify_supported_locales_present(&request("MissingLocales"));

    assert!(!result.passed());
    assert_eq!(result.data(), &vec![Locale::from("test2")]);
    assert_eq!(
        result.error_message(),
        Some("Supported locales missing (test2) for MissingLocales resx files.")
    );
}

#[rstest]
#[case("AllGood")]
#[case("ExtraLocales")]
#[case("MissingKeys")]
fn complete_locale_sets_pass(verifier: ResxVerifier, #[case] resource_name: &str) {
    let result = verifier.verify_supported_locales_present(&request(resource_name));

    assert!(result.passed());
    assert!(result.data().is_empty());
    assert_eq!(result.error_message(), None);
}

#[rstest]
fn extra_locales_fail_with_the_unsupported_locale(verifier: ResxVerifier) {
    let result = verifier
        .verify_only_supported_locales_present(&request("ExtraLocales"))
        .expect("file names should parse");

    assert!(!result.passed());
    assert_eq!(result.data(), &vec![Locale::from("test3")]);
    assert_eq!(
        result.error_message(),
        Some("Extra locales (test3) exist for ExtraLocales resx files.")
    );
}

#[rstest]
#[case("AllGood")]
#[case("MissingLocales")]
#[case("MissingKeys")]
fn supported_only_sets_pass(verifier: ResxVerifier, #[case] resource_name: &str) {
    let result = verifier
        .verify_only_supported_locales_present(&request(resource_name))
        .expect("file names should parse");

    assert!(result.passed());
    assert!(result.data().is_empty());
    assert_eq!(result.error_message(), None);
}

#[rstest]
fn empty_filename_pattern_is_a_fatal_regex_error() {
    let verifier = ResxVerifier::new(NamingConfig::new("", "", ""));

    let error = verifier
        .verify_only_supported_locales_present(&request("ExtraLocales"))
        .expect_err("an empty pattern cannot match exactly once");

    assert_eq!(error.kind(), ErrorKind::ResourceFileRegexPattern);
    assert!(matches!(error, VerifyError::FilenameParse { .. }));
}

#[rstest]
fn missing_keys_fail_with_the_locales_lacking_them(verifier: ResxVerifier) {
    let result = verifier
        .verify_all_keys_match(&request("MissingKeys"))
        .expect("resource files should load");

    assert!(!result.passed());
    assert_eq!(result.data().len(), 1);
    assert_eq!(
        result.data().get("String2"),
        Some(&vec![Locale::from("test2")])
    );
    assert_eq!(
        result.error_message(),
        Some("Some keys (String2) are not in all of the MissingKeys resx files.")
    );
}

#[rstest]
#[case("AllGood")]
#[case("ExtraLocales")]
fn matching_keys_pass(verifier: ResxVerifier, #[case] resource_name: &str) {
    let result = verifier
        .verify_all_keys_match(&request(resource_name))
        .expect("resource files should load");

    assert!(result.passed());
    assert!(result.data().is_empty());
    assert_eq!(result.error_message(), None);
}

#[rstest]
fn key_check_refuses_to_skip_missing_files(verifier: ResxVerifier) {
    let error = verifier
        .verify_all_keys_match(&request("MissingLocales"))
        .expect_err("the test2 file is absent");

    assert_eq!(error.kind(), ErrorKind::ResourceFile);
    match error {
        VerifyError::ReadResource { locale, .. } => assert_eq!(locale, "test2"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn audit_collects_every_failure(verifier: ResxVerifier) {
    let audit = verifier
        .audit(&request("ExtraLocales"))
        .expect("audit should run");

    assert!(!audit.passed());
    assert!(audit.supported_locales().passed());
    assert!(audit.keys().is_some_and(VerificationResult::passed));
    assert_eq!(
        audit.failure_messages(),
        vec!["Extra locales (test3) exist for ExtraLocales resx files."]
    );
}

#[rstest]
fn audit_reports_missing_locales_without_reading_keys(verifier: ResxVerifier) {
    let audit = verifier
        .audit(&request("MissingLocales"))
        .expect("missing files are findings, not faults");

    assert!(!audit.passed());
    assert_eq!(audit.keys(), None);
    assert_eq!(
        audit.failure_messages(),
        vec!["Supported locales missing (test2) for MissingLocales resx files."]
    );
}
