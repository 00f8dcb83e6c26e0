//! Core module tests
//!
//! Contains test suites for the toolkit-agnostic building blocks:
//! - Signal dispatch tests
//! - Command / RelayCommand tests
//! - Configuration type tests
