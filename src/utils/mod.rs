//! Filesystem helpers.

pub mod file_finder;
