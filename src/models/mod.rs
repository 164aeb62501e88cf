//! Data model for Open Graph style metadata.
//!
//! `metadata` and the per-family payload modules describe which nested
//! shapes are legal for each object type. `node` is the untyped tree the
//! flattener walks, and `property` is what it produces.

pub mod article;
pub mod basic;
pub mod book;
pub mod metadata;
pub mod music;
pub mod node;
pub mod product;
pub mod profile;
pub mod property;
pub mod video;

pub use basic::{Audio, Basic, Dimension, Image, Locale, OneOrMany, Timestamp, UrlOr};
pub use metadata::{Metadata, OG_NAMESPACE, ObjectType};
pub use node::Node;
pub use property::Property;
