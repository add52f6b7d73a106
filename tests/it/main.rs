//! Single integration test binary.

mod helpers;
mod lifecycle_tests;
