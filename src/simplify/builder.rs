//! Expression scanning: from IR values to polynomials and back.
//!
//! The builder owns all per-attempt state. Nodes live in a vector arena and
//! are found again through an identity-keyed map, so a value reached twice
//! (the expression may be a DAG after upstream common-subexpression
//! elimination) maps to one node and one polynomial. That sharing is what
//! makes the cancellation laws fire: `a ^ a` erases to nothing only because
//! both operands resolve to the same leaf bit.

use super::Options;
use crate::error::ScanAbort;
use crate::ir::{LogicHost, LogicOp};
use crate::ring::{Polynomial, LEAF_BITS};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Index of a node in the builder's arena.
pub(crate) type NodeId = usize;

/// One scanned IR value bound to the polynomial that represents it.
pub(crate) struct ExprNode<V> {
    value: V,
    expr: Polynomial,
}

/// Scans a rooted expression, assigning leaf bits in discovery order and
/// memoizing one polynomial per IR value. All state lives for a single
/// simplification attempt and is dropped together.
pub(crate) struct ExprBuilder<'a, H: LogicHost> {
    host: &'a H,
    options: &'a Options,
    /// Arena of nodes, owned here and freed together.
    nodes: Vec<ExprNode<H::Value>>,
    /// IR identity to arena slot.
    cache: FxHashMap<H::Value, NodeId>,
    /// Opaque leaves in discovery order; the table position is the leaf's
    /// mask bit. Constants never enter the table.
    leaves: IndexSet<H::Value, FxBuildHasher>,
}

impl<'a, H: LogicHost> ExprBuilder<'a, H> {
    pub(crate) fn new(host: &'a H, options: &'a Options) -> Self {
        Self {
            host,
            options,
            nodes: Vec::new(),
            cache: FxHashMap::default(),
            leaves: IndexSet::with_hasher(FxBuildHasher),
        }
    }

    /// Translates the expression rooted at `root` into a node, or reports
    /// why the scan gave up.
    pub(crate) fn build(&mut self, root: &H::Value) -> Result<NodeId, ScanAbort> {
        self.node(root, 0)
    }

    fn node(&mut self, value: &H::Value, depth: u32) -> Result<NodeId, ScanAbort> {
        if depth == self.options.max_depth {
            return Err(ScanAbort::DepthLimit(self.options.max_depth));
        }
        if let Some(&id) = self.cache.get(value) {
            return Ok(id);
        }
        let id = match self.host.decompose(value) {
            Some((op, lhs, rhs)) => self.logic_op(value, op, &lhs, &rhs, depth)?,
            None => self.leaf(value, depth)?,
        };
        log::debug!("{}", self.render_node(id));
        Ok(id)
    }

    fn logic_op(
        &mut self,
        value: &H::Value,
        op: LogicOp,
        lhs: &H::Value,
        rhs: &H::Value,
        depth: u32,
    ) -> Result<NodeId, ScanAbort> {
        let lhs_id = self.node(lhs, depth + 1)?;
        let rhs_id = self.node(rhs, depth + 1)?;
        let lhs_expr = &self.nodes[lhs_id].expr;
        let rhs_expr = &self.nodes[rhs_id].expr;
        let expr = match op {
            LogicOp::And => lhs_expr & rhs_expr,
            LogicOp::Or => lhs_expr | rhs_expr,
            LogicOp::Xor => lhs_expr ^ rhs_expr,
        };
        Ok(self.intern(value.clone(), expr))
    }

    fn leaf(&mut self, value: &H::Value, depth: u32) -> Result<NodeId, ScanAbort> {
        // Depth 0 means the root itself is opaque; a bare leaf simplifies
        // to itself, so there is nothing to do.
        if depth == 0 {
            return Err(ScanAbort::OpaqueRoot);
        }
        if self.leaves.len() as u32 > self.options.max_leaves {
            return Err(ScanAbort::LeafLimit(self.options.max_leaves));
        }
        // The constants 0 and all-ones take part in the ring arithmetic,
        // so they get the sentinel masks instead of leaf slots and never
        // enter the leaf table.
        let expr = if self.host.is_zero(value) {
            Polynomial::from_mask(Polynomial::ZERO)
        } else if self.host.is_all_ones(value) {
            Polynomial::one()
        } else {
            let (slot, _) = self.leaves.insert_full(value.clone());
            if slot as u32 >= LEAF_BITS {
                // A leaf bit must never collide with the sentinel bits.
                return Err(ScanAbort::LeafLimit(self.options.max_leaves));
            }
            Polynomial::from_mask(1 << slot)
        };
        Ok(self.intern(value.clone(), expr))
    }

    fn intern(&mut self, value: H::Value, expr: Polynomial) -> NodeId {
        let id = self.nodes.len();
        self.cache.insert(value.clone(), id);
        self.nodes.push(ExprNode { value, expr });
        id
    }

    /// Maps the polynomial of `id` back to an IR value when it is trivial:
    /// empty is the constant 0, a lone sentinel is a constant, a one-hot
    /// monomial is that leaf. A surviving conjunction or any multi-term
    /// polynomial yields `None`.
    pub(crate) fn reconstruct(&self, id: NodeId) -> Option<H::Value> {
        let node = &self.nodes[id];
        if node.expr.is_empty() {
            // Every monomial cancelled: the whole chain is 0.
            return Some(self.host.zero_like(&node.value));
        }
        let mask = node.expr.single_mask()?;
        if mask == Polynomial::ZERO {
            return Some(self.host.zero_like(&node.value));
        }
        if mask == Polynomial::ALL_ONE {
            return Some(self.host.all_ones_like(&node.value));
        }
        if mask.count_ones() == 1 {
            return Some(self.leaves[mask.trailing_zeros() as usize].clone());
        }
        None
    }

    /// Renders `value --> chain + chain + ...` for debug logging. Monomials
    /// print in ascending mask order so the output is stable.
    fn render_node(&self, id: NodeId) -> String {
        let node = &self.nodes[id];
        let mut out = format!("{} --> ", self.host.value_name(&node.value));
        if node.expr.is_empty() {
            out.push('0');
            return out;
        }
        for (i, mask) in node.expr.sorted_masks().into_iter().enumerate() {
            if i > 0 {
                out.push_str(" + ");
            }
            self.render_chain(&mut out, mask);
        }
        out
    }

    fn render_chain(&self, out: &mut String, mask: u64) {
        if mask == Polynomial::ALL_ONE {
            out.push_str("-1");
            return;
        }
        // The zero sentinel (and the unreachable empty chain) print as
        // nothing.
        if mask & Polynomial::ZERO != 0 || mask == 0 {
            return;
        }
        let mut rest = mask;
        while rest != 0 {
            let slot = rest.trailing_zeros() as usize;
            out.push_str(&self.host.value_name(&self.leaves[slot]));
            rest &= rest - 1;
            if rest != 0 {
                out.push_str(" * ");
            }
        }
    }
}
