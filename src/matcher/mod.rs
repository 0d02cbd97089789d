//! Matchers for selecting the test plans to rewrite.

pub mod file;

pub use file::FileMatcher;
