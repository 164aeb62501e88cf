//! Open Graph style metadata flattening.
//!
//! A typed [`Metadata`] object (or any JSON document) is walked depth-first
//! and turned into an ordered list of [`Property`] pairs such as
//! `og:title` / `article:tag`, ready to be rendered as `<meta>` tags.
//!
//! ```
//! use og_meta::{Basic, Metadata, Property, Flattener};
//!
//! let meta = Metadata::website(Basic::new("Home", "https://example.com/a.png", "https://example.com"));
//! let pairs = Flattener::default().flatten_metadata(&meta).unwrap();
//! assert_eq!(pairs[0], Property::new("og:type", "website"));
//! ```

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{Basic, Metadata, Node, ObjectType, Property};
pub use services::flatten_service::{FlattenError, FlattenService, Flattener, flatten};
