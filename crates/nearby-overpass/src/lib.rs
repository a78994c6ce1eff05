//! Nearby Overpass - POI source adapters
//!
//! Implementations of the `PoiSource` port: an HTTP client speaking the
//! Overpass query language, and a file-backed source for fixtures and
//! offline use.

pub mod client;
pub mod file;
pub mod query;

pub use client::OverpassClient;
pub use file::FilePoiSource;
pub use query::build_query;
