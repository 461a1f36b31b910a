//! The document root.

use std::fmt;

use crate::element::{self, Element};
use crate::error::DomError;
use crate::node::{self, Handle, Node};
use crate::parser;
use crate::selector::Selector;
use crate::serializer;

/// A document: the root every queried element hangs off.
///
/// Like a browser document it is a shared handle; clones observe the same tree.
#[derive(Clone)]
pub struct Document {
	node: Handle,
}

impl Document {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self {
			node: Node::document(),
		}
	}

	/// Creates a document from page markup.
	///
	/// The markup is parsed as a full HTML page, so the tree always has the
	/// `html`, `head` and `body` elements a browser would create.
	///
	/// # Example
	///
	/// ```ignore
	/// let document = Document::parse(r#"<div id="app"><p>{{ message }}</p></div>"#);
	/// let app = document.query_selector("#app")?.unwrap();
	/// ```
	pub fn parse(markup: &str) -> Self {
		let document = Self::new();
		parser::parse_document_into(&document.node, markup);
		document
	}

	/// The `body` element, if the document has one.
	pub fn body(&self) -> Option<Element> {
		self.children()
			.into_iter()
			.filter(|root| root.tag_name() == "html")
			.flat_map(|html| html.children())
			.find(|child| child.tag_name() == "body")
	}

	/// Creates a detached element. Same as [`Element::new`].
	pub fn create_element(&self, tag: &str) -> Element {
		Element::new(tag)
	}

	/// Appends a top-level element.
	pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
		node::append(&self.node, &child.node)
	}

	/// Top-level elements.
	pub fn children(&self) -> Vec<Element> {
		self.node
			.element_children()
			.into_iter()
			.filter_map(Element::from_handle)
			.collect()
	}

	/// First element in document order matching `selector`.
	///
	/// # Errors
	///
	/// [`DomError::InvalidSelector`] when `selector` is not a supported simple selector.
	pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
		let selector = Selector::parse(selector)?;
		Ok(element::query(&self.node, &selector).next())
	}

	/// All elements matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
		let selector = Selector::parse(selector)?;
		Ok(element::query(&self.node, &selector).collect())
	}

	/// The first element whose `id` attribute equals `id`.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		node::descendants(&self.node)
			.into_iter()
			.filter_map(Element::from_handle)
			.find(|element| element.id().as_deref() == Some(id))
	}

	/// Text of the whole document.
	pub fn text_content(&self) -> String {
		self.node.text_content()
	}

	/// Serializes the whole document.
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		serializer::serialize_children(&self.node, &mut out);
		out
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("children", &self.children())
			.finish()
	}
}
