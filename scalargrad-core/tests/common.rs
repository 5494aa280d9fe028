use scalargrad_core::Value;

/// Creates a labelled leaf for scenario tests.
pub fn leaf(data: f64, label: &str) -> Value {
    Value::with_label(data, label)
}
