//! Shared test support utilities for the verifier suites.
//!
//! `locale` parses locale lists supplied through behaviour steps, and `resx`
//! builds throwaway resource directories and points at the checked-in
//! fixtures. Reach for these helpers whenever a test needs resource files on
//! disk before exercising the verifier.
pub mod locale;
pub mod resx;
