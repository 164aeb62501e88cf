//! `book` payload.

use serde::{Deserialize, Serialize};

use super::basic::{OneOrMany, Timestamp};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Book {
    /// Profile URLs of the authors.
    pub author: OneOrMany<String>,

    pub isbn: String,

    pub release_date: Timestamp,

    pub tag: OneOrMany<String>,
}
