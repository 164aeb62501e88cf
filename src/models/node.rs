//! The closed value tree walked by the flattener.

use serde_json::{Number, Value};

/// A metadata tree node.
///
/// Every input the flattener accepts is one of these five shapes. `Other`
/// stands for booleans, nulls and anything else without a text form; it is
/// skipped during flattening rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered elements, all flattened under the parent's path.
    Sequence(Vec<Node>),

    /// Named sub-fields in insertion order. Repeated keys are kept.
    Mapping(Vec<(String, Node)>),

    Text(String),

    Number(Number),

    Other,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    /// Text emitted for a leaf, or `None` for containers and `Other`.
    pub fn leaf_text(&self) -> Option<String> {
        match self {
            Node::Text(text) => Some(text.clone()),
            Node::Number(number) => Some(number_text(number)),
            _ => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            Value::String(text) => Node::Text(text),
            Value::Number(number) => Node::Number(number),
            Value::Null | Value::Bool(_) => Node::Other,
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value.into())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Node::Other)
    }
}

/// Plain decimal text for a number.
///
/// Integers print as-is. Floats use the shortest digit sequence that reads
/// back to the same value, written positionally without an exponent: `3.0`
/// becomes `"3"`, `-0.0` becomes `"0"` and `1e-7` becomes `"0.0000001"`.
pub fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }
    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}
