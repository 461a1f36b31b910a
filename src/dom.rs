//! In-memory document model
//!
//! This module provides access to daniel-dom, the document tree the template
//! engine queries and mutates.

pub use daniel_dom::*;
