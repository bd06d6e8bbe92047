//! Simplification of complex logical operation chains.
//!
//! The driver walks a rooted expression through the host, translates it
//! into a boolean-ring polynomial (AND as multiplication, XOR as addition),
//! and rebuilds an IR value when the reduced polynomial is trivial: empty
//! (constant 0), a lone constant sentinel, or a single leaf. Anything
//! larger is reported as "no change"; factoring a general polynomial back
//! into compact IR is deliberately out of scope.

mod builder;

use crate::ir::LogicHost;
use crate::ring::LEAF_BITS;
use builder::ExprBuilder;

/// Scan bounds for one simplification attempt.
///
/// Both bounds exist to keep the worst case small: a polynomial over `n`
/// leaves can hold up to `2^n` monomials, so the leaf budget caps the
/// expansion and the depth budget caps the walk.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum distinct opaque leaves tolerated before the attempt aborts.
    /// The hard ceiling is 62: the two top mask bits are reserved for the
    /// constant sentinels.
    pub max_leaves: u32,
    /// Maximum recursion depth into the expression DAG.
    pub max_depth: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_leaves: 8,
            max_depth: 8,
        }
    }
}

/// Counters accumulated across simplification attempts.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    ops_simplified: u64,
}

impl Statistics {
    /// Number of root expressions replaced by a simpler value.
    pub fn ops_simplified(&self) -> u64 {
        self.ops_simplified
    }
}

/// Driver for boolean-ring simplification over one host.
///
/// A `Simplifier` may be reused across any number of roots: every call to
/// [`simplify`](Simplifier::simplify) starts from fresh caches, so leaf
/// bits assigned for one root never leak into the next.
pub struct Simplifier<'h, H: LogicHost> {
    host: &'h H,
    options: Options,
    stats: Statistics,
}

impl<'h, H: LogicHost> Simplifier<'h, H> {
    /// Creates a simplifier over `host` with the given scan bounds.
    ///
    /// # Panics
    ///
    /// Panics if `options.max_leaves` exceeds the 62 available mask slots.
    pub fn new(host: &'h H, options: Options) -> Self {
        assert!(
            options.max_leaves <= LEAF_BITS,
            "leaf budget {} exceeds the {} mask slots",
            options.max_leaves,
            LEAF_BITS
        );
        Self {
            host,
            options,
            stats: Statistics::default(),
        }
    }

    /// Attempts to find a simpler equivalent of `root`.
    ///
    /// Returns the replacement value, or `None` when the scan runs out of
    /// bounds, the root cannot be decomposed, or the reduced polynomial is
    /// not trivial. The caller keeps the original IR in every `None` case.
    pub fn simplify(&mut self, root: &H::Value) -> Option<H::Value> {
        // Fresh caches per attempt: leaf bits are assigned in discovery
        // order and must not survive across roots.
        let mut builder = ExprBuilder::new(self.host, &self.options);
        let root_node = match builder.build(root) {
            Ok(node) => node,
            Err(abort) => {
                log::debug!("no simplification: {abort}");
                return None;
            }
        };
        let replacement = builder.reconstruct(root_node)?;
        if replacement == *root {
            return None;
        }
        self.stats.ops_simplified += 1;
        Some(replacement)
    }

    /// Accumulated counters.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }
}
