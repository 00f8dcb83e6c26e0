//! Registry test suites
//!
//! - Declaration tests: validation, dispatch, initial push, configuration
//! - Propagation tests: viewmodel→control fan-out and two-way write-back
//! - Lifecycle tests: viewmodel replacement, unbind, reference release,
//!   shared viewmodels
//! - Command tests: enabled-state tracking and guarded execution

#[cfg(test)]
mod command_tests;
