//! Evaluation subdomain: result types, judge parsing, and fallback synthesis.

pub mod fallback;
pub mod parsing;
pub mod stage;
pub mod stream;
pub mod value_objects;
