//! Invariant checks for the canonical topology tables.

use crate::cell_error::ReferenceCellError;

/// Types whose internal consistency can be checked after construction.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), ReferenceCellError>;

    /// Panic on the first violation when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "reference topology");
    }
}

/// Validate a reference topology table and panic with the table's context
/// when invariant checking is on: debug builds, or release builds with the
/// `check-invariants` or `strict-invariants` feature. Compiles to nothing
/// otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($table:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        match $check {
            Ok(()) => {}
            Err(violation) => panic!(
                concat!("[invariants] ", $($table)*, " table is inconsistent: {}"),
                violation
            ),
        }
    };
}
