//! src/services/flatten_service.rs
//!
//! Flattening of metadata trees into ordered `(property, content)` pairs.
//! The walk uses an explicit work stack so input depth is bounded by
//! `max_depth` instead of the native call stack.

use crate::models::{Metadata, Node, Property};
use thiserror::Error;
use tracing::{debug, trace};

/// Joins a parent path and a child key.
pub const SEPARATOR: char = ':';

/// Default nesting limit. Real documents stay well under ten levels.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("scalar value `{content}` has no property path")]
    UnlabeledScalar { content: String },
    #[error("structure under `{path}` is nested deeper than {max_depth} levels (cyclic input?)")]
    TooDeep { path: String, max_depth: usize },
    #[error("metadata could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type FlattenResult<T> = Result<T, FlattenError>;

/// Stateless tree flattener with a nesting limit.
#[derive(Clone, Copy, Debug)]
pub struct Flattener {
    max_depth: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

struct Frame<'a> {
    node: &'a Node,
    path: Option<String>,
    depth: usize,
}

impl Flattener {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Flatten `node` into pairs, in pre-order.
    ///
    /// - Sequence elements share the parent path; no index is appended.
    /// - Mapping entries append their key: `parent:key`, or `key` at the root.
    /// - Text and numbers emit one pair at the current path.
    /// - `Other` emits nothing.
    ///
    /// An empty `parent` behaves like no parent. A scalar reached without a
    /// path fails with [`FlattenError::UnlabeledScalar`]; nothing is returned
    /// on error.
    pub fn flatten(&self, node: &Node, parent: Option<&str>) -> FlattenResult<Vec<Property>> {
        let mut pairs = Vec::new();
        let mut stack = vec![Frame {
            node,
            path: parent.filter(|p| !p.is_empty()).map(str::to_owned),
            depth: 0,
        }];

        while let Some(Frame { node, path, depth }) = stack.pop() {
            if depth > self.max_depth {
                return Err(FlattenError::TooDeep {
                    path: path.unwrap_or_default(),
                    max_depth: self.max_depth,
                });
            }

            match node {
                Node::Sequence(items) => {
                    // Reversed so the first element is popped first.
                    for item in items.iter().rev() {
                        stack.push(Frame {
                            node: item,
                            path: path.clone(),
                            depth: depth + 1,
                        });
                    }
                }
                Node::Mapping(entries) => {
                    for (key, value) in entries.iter().rev() {
                        stack.push(Frame {
                            node: value,
                            path: Some(child_path(path.as_deref(), key)),
                            depth: depth + 1,
                        });
                    }
                }
                Node::Text(_) | Node::Number(_) => {
                    let content = node.leaf_text().unwrap_or_default();
                    match path {
                        Some(property) => pairs.push(Property { property, content }),
                        None => return Err(FlattenError::UnlabeledScalar { content }),
                    }
                }
                Node::Other => {
                    trace!(path = path.as_deref().unwrap_or(""), "skipping value without text form");
                }
            }
        }

        Ok(pairs)
    }

    /// Flatten a typed metadata object with `og`-namespaced basic fields.
    pub fn flatten_metadata(&self, metadata: &Metadata) -> FlattenResult<Vec<Property>> {
        let node = metadata.to_node()?;
        let pairs = self.flatten(&node, None)?;
        debug!(
            object_type = %metadata.object_type(),
            pairs = pairs.len(),
            "flattened metadata object"
        );
        Ok(pairs)
    }
}

/// `parent:key`, or just `key` at the root.
fn child_path(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => {
            let mut path = String::with_capacity(parent.len() + 1 + key.len());
            path.push_str(parent);
            path.push(SEPARATOR);
            path.push_str(key);
            path
        }
        _ => key.to_string(),
    }
}

/// Flatten with the default depth limit.
pub fn flatten(node: &Node, parent: Option<&str>) -> FlattenResult<Vec<Property>> {
    Flattener::default().flatten(node, parent)
}

/// FlattenService is the shared state behind the HTTP handlers and the
/// one-shot CLI mode. It carries only the configured flattener.
#[derive(Clone, Debug, Default)]
pub struct FlattenService {
    pub flattener: Flattener,
}

impl FlattenService {
    pub fn new(max_depth: usize) -> Self {
        Self {
            flattener: Flattener::new(max_depth),
        }
    }

    /// Flatten an arbitrary JSON document under an optional parent path.
    pub fn flatten_value(
        &self,
        value: serde_json::Value,
        parent: Option<&str>,
    ) -> FlattenResult<Vec<Property>> {
        let node = Node::from(value);
        let pairs = self.flattener.flatten(&node, parent)?;
        debug!(parent = parent.unwrap_or(""), pairs = pairs.len(), "flattened document");
        Ok(pairs)
    }

    pub fn render_metadata(&self, metadata: &Metadata) -> FlattenResult<Vec<Property>> {
        self.flattener.flatten_metadata(metadata)
    }
}
