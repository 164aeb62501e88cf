//! `article` payload.

use serde::{Deserialize, Serialize};

use super::basic::{OneOrMany, Timestamp};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Article {
    /// When the article was first published.
    pub published_time: Timestamp,

    /// When the article was last changed.
    pub modified_time: Timestamp,

    /// When the article is out of date after.
    pub expiration_time: Timestamp,

    /// Profile URLs of the writers.
    pub author: OneOrMany<String>,

    /// High-level section name, e.g. "Technology".
    pub section: String,

    pub tag: OneOrMany<String>,
}
