//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the cycle controller
//! against mock adapters. All tests run on the host with no real
//! hardware required.

mod property_tests;
