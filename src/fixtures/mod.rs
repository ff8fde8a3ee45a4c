// fixtures/mod.rs - Test fixtures module
//
// Reusable builders for items and pages. Unit tests, integration tests and
// the fake REST service in tests/common all draw their data from here so the
// same catalogue is used everywhere.

pub mod items;
