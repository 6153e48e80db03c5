//! Utilities shared by jsource tests.
//!
//! The main piece is a structural diff over the node tree ([`Diff`]): comparing two nodes yields
//! either nothing or an ordered list of human-readable differences such as
//! `"Name is different!"`, `"Annotations length is different!"` or
//! `"Annotations differs on #1!\n\tName is different!"`. [`assert_same!`] turns a non-empty
//! report into a test failure that points at the exact field.

mod diff;

pub use diff::{Diff, Report};

/// Panics with the diff report when two nodes differ.
///
/// Both arguments are taken by reference internally, so owned values and places both work.
#[macro_export]
macro_rules! assert_same {
    ($expected:expr, $actual:expr $(,)?) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                let report = $crate::Diff::diff(expected, actual);
                if !report.is_empty() {
                    panic!("nodes differ:\n{}", report.join("\n"));
                }
            }
        }
    };
}

#[cfg(test)]
mod tests;
