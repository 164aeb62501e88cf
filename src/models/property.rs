//! A single flattened metadata declaration.

use serde::{Deserialize, Serialize};

/// One `(property, content)` pair, rendered downstream as a `<meta>` tag.
///
/// `content` is passed through verbatim. Escaping for the target document
/// is the renderer's job.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Property {
    /// Colon-joined path, e.g. `og:image:width` or `article:tag`.
    pub property: String,

    pub content: String,
}

impl Property {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}
