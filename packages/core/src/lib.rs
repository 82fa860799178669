// Library root — exposes the estimator for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod error;
pub mod estimator;

// These modules are only needed by the binary.
// Declared pub so integration tests can drive the CLI without spawning it.
pub mod cli;
pub mod config;
pub mod logging;
