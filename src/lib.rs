//! # logic-ring
//!
//! A boolean-ring simplifier for chains of bitwise logical operations in a
//! host compiler IR.
//!
//! Given a root value built from AND, OR, and XOR over opaque leaves and
//! the constants 0 / all-ones, the simplifier canonicalizes the whole chain
//! into a polynomial over GF(2), where AND is ring multiplication and XOR
//! is ring addition (so `a | b = a*b + a + b` and `~a = a + 1`), lets the
//! ring arithmetic cancel what it can, and rebuilds an IR value when the
//! result is trivial: a constant or a single leaf. Expressions that do not
//! reduce that far are left untouched.
//!
//! The host IR stays opaque: the crate only asks it to classify values
//! (logical op, constant zero, constant all-ones, anything else) and to
//! synthesize the two constants, through the [`LogicHost`] trait.
//!
//! ## Example
//!
//! ```rust,ignore
//! use logic_ring::{LogicHost, Options, Simplifier};
//!
//! // MyIr implements LogicHost for the host compiler's value handles.
//! let ir = MyIr::new();
//! let mut simplifier = Simplifier::new(&ir, Options::default());
//!
//! // root is ((a & b) | (a ^ c)) ^ (~(b & c) & a), which is just c.
//! match simplifier.simplify(&root) {
//!     Some(replacement) => ir.replace_all_uses(&root, &replacement),
//!     None => {} // nothing simpler was found; keep the original
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2024_compatibility)]

/// Host-IR boundary: opcodes and the access trait
pub mod ir;

/// Boolean-ring polynomial representation
pub mod ring;

/// Expression scanning and the simplification driver
pub mod simplify;

/// Error types
pub mod error {
    //! Abort conditions for a simplification attempt.

    use thiserror::Error;

    /// Why a scan gave up on a root expression.
    ///
    /// Every variant collapses to "no change" at the public boundary: the
    /// caller keeps the original IR, and nothing needs to be undone.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ScanAbort {
        /// The expression DAG is deeper than the configured bound.
        #[error("scan depth limit of {0} reached")]
        DepthLimit(u32),

        /// More distinct opaque leaves than the configured budget.
        #[error("more than {0} distinct logic leaves")]
        LeafLimit(u32),

        /// The root is not a supported logical operation.
        #[error("root is not a logical operation")]
        OpaqueRoot,
    }
}

// Re-export commonly used types
pub use error::ScanAbort;
pub use ir::{LogicHost, LogicOp};
pub use ring::Polynomial;
pub use simplify::{Options, Simplifier, Statistics};
