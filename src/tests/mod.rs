//! Unit and integration tests for the Sicherung library.
//!
//! ## Test Modules
//!
//! - **flow_tests**: Backup creation state machine and its effects
//! - **error_tests**: Error translation and display
//! - **store_tests**: Backup collection, flash store, validation and checksum display
//! - **config_tests**: Configuration loading and validation
//! - **client_tests**: HTTP client against a fake panel
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test flow_tests
//! cargo test client_tests
//! ```

pub mod support;

pub mod client_tests;
pub mod config_tests;
