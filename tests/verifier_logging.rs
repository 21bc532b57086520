//! Log records emitted while verifying resource sets.
//!
//! `logtest` installs a process-wide logger, so this binary holds a single
//! test that checks every record it cares about.

mod support;

use log::Level;
use logtest::Logger;
use resx_verify::{ResourceRequest, ResourceTester, ResxVerifier};
use support::resx::ResourceDirectory;

#[test]
fn verifier_logs_repeated_locales_and_outcomes() {
    let mut logger = Logger::start();
    let directory = ResourceDirectory::new();
    directory.write("Menu.resx", &["Open"]);
    directory.write("Menu.fr.resx", &["Open"]);
    let request = ResourceRequest::new("Menu", directory.path(), "en", ["en", "fr", "fr"]);

    let result = ResxVerifier::default().verify_supported_locales_present(&request);
    assert!(result.passed());

    let mut warned = false;
    let mut reported = false;
    while let Some(record) = logger.pop() {
        let message = record.args().to_string();
        if record.level() == Level::Warn && message.contains("supported locales for Menu repeat (fr)")
        {
            warned = true;
        }
        if record.level() == Level::Debug
            && record.target() == "resx_verify::verifier"
            && message.contains("Menu: passed")
        {
            reported = true;
        }
    }

    assert!(warned, "expected a warning about the repeated fr locale");
    assert!(reported, "expected the check outcome to be logged");
}
