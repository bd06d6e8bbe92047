//! The boundary between the simplifier and the host compiler IR.
//!
//! The simplifier never inspects IR values directly; everything it needs is
//! asked of the host through [`LogicHost`]. A host hands out opaque value
//! handles with identity semantics (two handles are equal exactly when they
//! denote the same IR node; reference-counted pointers compared by address
//! are the usual shape), classifies the handful of shapes the simplifier
//! cares about, and synthesizes the two constants a reduced expression can
//! collapse to.

use std::hash::Hash;

/// The binary logical opcodes the simplifier can decompose.
///
/// Everything else (selects, shifts, comparisons, arithmetic, first-class
/// NOT) is opaque and becomes a leaf. NOT reaches the simplifier only in
/// its `x ^ all-ones` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    /// Bitwise conjunction.
    And,
    /// Bitwise disjunction.
    Or,
    /// Bitwise exclusive or.
    Xor,
}

/// Host-IR access for one simplification domain.
///
/// Implementations are expected to be cheap: every method is called during
/// the recursive scan, once per visited value.
pub trait LogicHost {
    /// Opaque IR value handle.
    ///
    /// Equality and hashing must agree with IR identity. Structural
    /// equality is not good enough: cancellation laws like `a ^ a = 0`
    /// depend on the two occurrences of `a` being recognized as the same
    /// node.
    type Value: Clone + Eq + Hash;

    /// If `value` is a binary AND, OR, or XOR, returns the opcode and the
    /// two operand values. Every other shape returns `None` and is treated
    /// as a leaf.
    fn decompose(&self, value: &Self::Value) -> Option<(LogicOp, Self::Value, Self::Value)>;

    /// Whether `value` is the integer constant zero.
    fn is_zero(&self, value: &Self::Value) -> bool;

    /// Whether `value` is the integer constant with all bits set.
    fn is_all_ones(&self, value: &Self::Value) -> bool;

    /// Synthesizes the zero constant of the same type as `exemplar`.
    fn zero_like(&self, exemplar: &Self::Value) -> Self::Value;

    /// Synthesizes the all-ones constant of the same type as `exemplar`.
    fn all_ones_like(&self, exemplar: &Self::Value) -> Self::Value;

    /// A printable name for `value`, used in debug output.
    fn value_name(&self, value: &Self::Value) -> String;
}
