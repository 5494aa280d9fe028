// src/value/debug.rs
use crate::value::Value;
use std::fmt;

/// Non-recursive debug formatting: printing operands would walk the whole
/// upstream graph, so only this node's own fields are shown.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_data = self.borrow_value_data();
        f.debug_struct("Value")
            .field("data", &value_data.data)
            .field("grad", &value_data.grad)
            .field("op", &value_data.op)
            .field("label", &value_data.label)
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data = {})", self.data())
    }
}
