//! Daniel DOM - In-memory document model
//!
//! A small, single-threaded document tree with the query, traversal and
//! mutation primitives the daniel templating engine consumes:
//!
//! - [`Document`]: document root, [`Document::parse`] for page markup
//! - [`Element`]: clonable element handle (`tag_name`, attributes, `children`,
//!   `text_content`, `inner_html`, `before`, `remove`, ...)
//! - [`Selector`]: `#id`, `.class`, `tag` and their compound forms
//!
//! Markup is parsed by html5ever, the way a browser parses a page or an
//! `innerHTML` assignment: implied end tags are inserted and it never fails. Handles are `Rc`-based and therefore `!Send`,
//! matching the single UI thread model of a browser page.
//!
//! ## Example
//!
//! ```ignore
//! use daniel_dom::Document;
//!
//! let document = Document::parse(r#"<ul id="list"><li>one</li></ul>"#);
//! let list = document.query_selector("#list")?.unwrap();
//! let item = document.create_element("li");
//! item.set_text_content("two");
//! list.append_child(&item)?;
//! assert_eq!(list.inner_html(), "<li>one</li><li>two</li>");
//! ```

#![warn(missing_docs)]

mod document;
mod element;
mod error;
mod node;
mod parser;
mod selector;
mod serializer;

pub use document::Document;
pub use element::Element;
pub use error::DomError;
pub use node::Attribute;
pub use selector::Selector;
