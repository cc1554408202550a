//! ui
//!
//! User-facing output utilities.
//!
//! # Design
//!
//! All output goes through this module so that formatting stays consistent
//! and quiet mode is respected everywhere.

pub mod output;
