//! Static registries consulted when resolving a request.
//!
//! Both tables are immutable and safe for unsynchronized concurrent reads.

pub mod models;
pub mod rubrics;
