// src/value/mod.rs

pub mod accessors;
pub mod autograd_methods;
pub mod debug;


use crate::value_data::{Op, ValueData};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Raw identity of a node, used to key visited sets and deduplicate graph
/// traversals. Two `Value` handles share an id iff they designate the same
/// node.
pub type NodeId = *const RefCell<ValueData>;

/// Handle to one scalar node of a dynamic computation graph.
///
/// Cloning a `Value` is cheap and yields another handle to the same node:
/// a node may be an operand of arbitrarily many downstream nodes, so the
/// reachable graph forms a DAG rather than a tree, and a node must outlive
/// every consumer holding it. The engine is single-threaded by
/// construction, hence `Rc`/`RefCell` rather than atomics and locks;
/// `Value` is deliberately `!Send`/`!Sync`.
///
/// The graph is assumed acyclic. The engine does not check this; wiring a
/// node as its own (transitive) operand is a caller error and produces
/// undefined gradient results.
#[derive(Clone)]
pub struct Value {
    pub(crate) inner: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`.
    pub fn new(data: f64) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::new(data, None, Vec::new(), None))),
        }
    }

    /// Creates a labelled leaf node.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }

    /// Creates the result node of a forward operation.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            inner: Rc::new(RefCell::new(ValueData::new(
                data,
                Some(op),
                operands,
                None,
            ))),
        }
    }

    /// Immutable access to the shared node payload.
    pub(crate) fn borrow_value_data(&self) -> Ref<'_, ValueData> {
        self.inner.borrow()
    }

    /// Mutable access to the shared node payload.
    pub(crate) fn borrow_value_data_mut(&self) -> RefMut<'_, ValueData> {
        self.inner.borrow_mut()
    }
}
