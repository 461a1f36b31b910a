//! Template engine and reactive store
//!
//! This module provides access to daniel-pages: placeholder substitution,
//! `d-for` list expansion and whole-tree re-rendering on every data write.
//!
//! ## Architecture
//!
//! - **Store**: observable data object, every write notifies synchronously
//! - **Template**: placeholder scanner, directive dispatcher, tree renderer
//! - **App**: binds a store to a root element and re-renders it
//!
//! ## Example
//!
//! ```rust,ignore
//! use daniel::prelude::*;
//!
//! let document = Document::parse(r#"<div id="app"><b>{{ count }}</b></div>"#);
//! let app = App::mount(&document, MountOptions::new("#app").with("count", 0))?;
//!
//! app.set("count", 1);
//! assert_eq!(app.root().text_content(), "1");
//! ```

pub use daniel_pages::*;
