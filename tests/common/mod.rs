//! A miniature host IR for exercising the simplifier end to end.
//!
//! Values are Arc-backed handles with identity equality, the usual shape of
//! compiler IR node references. Synthesized constants carry no identity
//! guarantees (zero made twice is two distinct handles), so tests inspect
//! the node kind instead of comparing constant handles.

use logic_ring::{LogicHost, LogicOp};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
enum Node {
    Opaque(String),
    Zero,
    AllOnes,
    Logic(LogicOp, Value, Value),
    // A binary operator outside the supported set; opaque to the scan.
    Add(Value, Value),
}

/// An IR value handle; clones share identity.
#[derive(Debug, Clone)]
pub struct Value {
    inner: Arc<Node>,
}

impl Value {
    fn new(node: Node) -> Self {
        Self {
            inner: Arc::new(node),
        }
    }

    /// Whether this handle is a zero constant node.
    pub fn is_zero_const(&self) -> bool {
        matches!(*self.inner, Node::Zero)
    }

    /// Whether this handle is an all-ones constant node.
    pub fn is_all_ones_const(&self) -> bool {
        matches!(*self.inner, Node::AllOnes)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

/// The host side of the fixture: node constructors plus [`LogicHost`].
pub struct TestIr;

impl TestIr {
    /// An opaque named leaf.
    pub fn var(name: &str) -> Value {
        Value::new(Node::Opaque(name.to_string()))
    }

    /// The integer constant zero.
    pub fn zero() -> Value {
        Value::new(Node::Zero)
    }

    /// The integer constant with all bits set.
    pub fn ones() -> Value {
        Value::new(Node::AllOnes)
    }

    /// Bitwise AND.
    pub fn and(lhs: &Value, rhs: &Value) -> Value {
        Value::new(Node::Logic(LogicOp::And, lhs.clone(), rhs.clone()))
    }

    /// Bitwise OR.
    pub fn or(lhs: &Value, rhs: &Value) -> Value {
        Value::new(Node::Logic(LogicOp::Or, lhs.clone(), rhs.clone()))
    }

    /// Bitwise XOR.
    pub fn xor(lhs: &Value, rhs: &Value) -> Value {
        Value::new(Node::Logic(LogicOp::Xor, lhs.clone(), rhs.clone()))
    }

    /// Bitwise NOT, spelled the way the scan expects: `x ^ -1`.
    pub fn not(value: &Value) -> Value {
        Self::xor(value, &Self::ones())
    }

    /// A binary operator the simplifier does not understand.
    pub fn add(lhs: &Value, rhs: &Value) -> Value {
        Value::new(Node::Add(lhs.clone(), rhs.clone()))
    }
}

impl LogicHost for TestIr {
    type Value = Value;

    fn decompose(&self, value: &Value) -> Option<(LogicOp, Value, Value)> {
        match &*value.inner {
            Node::Logic(op, lhs, rhs) => Some((*op, lhs.clone(), rhs.clone())),
            _ => None,
        }
    }

    fn is_zero(&self, value: &Value) -> bool {
        matches!(*value.inner, Node::Zero)
    }

    fn is_all_ones(&self, value: &Value) -> bool {
        matches!(*value.inner, Node::AllOnes)
    }

    fn zero_like(&self, _exemplar: &Value) -> Value {
        // The fixture has a single value type, so there is nothing to
        // inspect on the exemplar.
        Value::new(Node::Zero)
    }

    fn all_ones_like(&self, _exemplar: &Value) -> Value {
        Value::new(Node::AllOnes)
    }

    fn value_name(&self, value: &Value) -> String {
        match &*value.inner {
            Node::Opaque(name) => name.clone(),
            Node::Zero => "0".to_string(),
            Node::AllOnes => "-1".to_string(),
            Node::Logic(op, lhs, rhs) => {
                let sign = match op {
                    LogicOp::And => "&",
                    LogicOp::Or => "|",
                    LogicOp::Xor => "^",
                };
                format!("({} {} {})", self.value_name(lhs), sign, self.value_name(rhs))
            }
            Node::Add(lhs, rhs) => {
                format!("({} + {})", self.value_name(lhs), self.value_name(rhs))
            }
        }
    }
}
