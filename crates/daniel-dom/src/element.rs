//! Element handles.
//!
//! [`Element`] is a cheap, clonable handle in the spirit of `web_sys::Element`:
//! clones refer to the same node, and equality is node identity.

use std::fmt;
use std::rc::Rc;

use crate::error::DomError;
use crate::node::{self, Attribute, Handle, Node, NodeData};
use crate::parser;
use crate::selector::Selector;
use crate::serializer;

/// A handle to an element node.
#[derive(Clone)]
pub struct Element {
	pub(crate) node: Handle,
}

impl Element {
	/// Creates a new detached element with the given tag name.
	///
	/// # Example
	///
	/// ```ignore
	/// let li = Element::new("li");
	/// assert_eq!(li.tag_name(), "li");
	/// ```
	pub fn new(tag: &str) -> Self {
		Self {
			node: Node::element(tag, Vec::new()),
		}
	}

	pub(crate) fn from_handle(node: Handle) -> Option<Self> {
		node.is_element().then_some(Self { node })
	}

	fn attributes_cell(&self) -> &std::cell::RefCell<Vec<Attribute>> {
		match &self.node.data {
			NodeData::Element { attributes, .. } => attributes,
			// Element handles are only ever built around element nodes.
			_ => unreachable!("Element handle wraps a non-element node"),
		}
	}

	/// Lowercase tag name.
	pub fn tag_name(&self) -> &str {
		self.node.tag().unwrap_or_default()
	}

	/// Returns the `id` attribute.
	pub fn id(&self) -> Option<String> {
		self.get_attribute("id")
	}

	/// Whitespace separated entries of the `class` attribute.
	pub fn class_list(&self) -> Vec<String> {
		self.get_attribute("class")
			.map(|class| class.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}

	/// Attributes in document order.
	pub fn attributes(&self) -> Vec<Attribute> {
		self.attributes_cell().borrow().clone()
	}

	/// Returns `true` if the element carries at least one attribute.
	pub fn has_attributes(&self) -> bool {
		!self.attributes_cell().borrow().is_empty()
	}

	/// Value of the named attribute.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		let name = name.to_ascii_lowercase();
		self.attributes_cell()
			.borrow()
			.iter()
			.find(|a| a.name == name)
			.map(|a| a.value.clone())
	}

	/// Sets an attribute, replacing an existing value in place.
	pub fn set_attribute(&self, name: &str, value: &str) {
		let attribute = Attribute::new(name, value);
		let mut attributes = self.attributes_cell().borrow_mut();
		match attributes.iter_mut().find(|a| a.name == attribute.name) {
			Some(existing) => existing.value = attribute.value,
			None => attributes.push(attribute),
		}
	}

	/// Removes an attribute and returns its former value.
	pub fn remove_attribute(&self, name: &str) -> Option<String> {
		let name = name.to_ascii_lowercase();
		let mut attributes = self.attributes_cell().borrow_mut();
		let index = attributes.iter().position(|a| a.name == name)?;
		Some(attributes.remove(index).value)
	}

	/// Element children in document order.
	pub fn children(&self) -> Vec<Element> {
		self.node
			.element_children()
			.into_iter()
			.map(|node| Self { node })
			.collect()
	}

	/// Number of element children.
	pub fn child_element_count(&self) -> usize {
		self.node
			.children
			.borrow()
			.iter()
			.filter(|child| child.is_element())
			.count()
	}

	/// The parent element, if the parent is an element (not the document).
	pub fn parent_element(&self) -> Option<Element> {
		self.node.parent().and_then(Self::from_handle)
	}

	/// Returns `true` while the element is attached to a parent node.
	pub fn has_parent(&self) -> bool {
		self.node.parent().is_some()
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		self.node.text_content()
	}

	/// Replaces all children with a single text node.
	pub fn set_text_content(&self, text: &str) {
		node::clear_children(&self.node);
		if !text.is_empty() {
			node::append_new(&self.node, &Node::text(text));
		}
	}

	/// Serialized markup of the element's children.
	pub fn inner_html(&self) -> String {
		let mut out = String::new();
		serializer::serialize_children(&self.node, &mut out);
		out
	}

	/// Replaces all children with the nodes parsed from `markup`.
	///
	/// `markup` is parsed as an HTML fragment in the context of this element,
	/// as a browser does for `innerHTML`. Parsing never fails: implied end
	/// tags are inserted and stray `<` become text.
	pub fn set_inner_html(&self, markup: &str) {
		node::clear_children(&self.node);
		parser::parse_fragment_into(&self.node, markup);
	}

	/// Serialized markup of the element itself.
	pub fn outer_html(&self) -> String {
		let mut out = String::new();
		serializer::serialize_node(&self.node, &mut out);
		out
	}

	/// Appends `child` as the last child, moving it if already attached.
	///
	/// # Errors
	///
	/// [`DomError::HierarchyRequest`] if `child` is this element or one of its ancestors.
	pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
		node::append(&self.node, &child.node)
	}

	/// Inserts `new` before `reference`, which must be a child of this element.
	pub fn insert_before(&self, new: &Element, reference: &Element) -> Result<(), DomError> {
		node::insert_before(&self.node, &new.node, &reference.node)
	}

	/// Removes `child` from this element.
	pub fn remove_child(&self, child: &Element) -> Result<(), DomError> {
		if !node::is_child(&self.node, &child.node) {
			return Err(DomError::NotAChild);
		}
		node::detach(&child.node);
		Ok(())
	}

	/// Inserts `new` into this element's parent, immediately before this element.
	///
	/// # Errors
	///
	/// [`DomError::Detached`] if this element has no parent.
	pub fn before(&self, new: &Element) -> Result<(), DomError> {
		let parent = self.node.parent().ok_or(DomError::Detached)?;
		node::insert_before(&parent, &new.node, &self.node)
	}

	/// Detaches this element from its parent. No-op when already detached.
	pub fn remove(&self) {
		node::detach(&self.node);
	}

	/// First descendant element matching `selector`.
	pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
		let selector = Selector::parse(selector)?;
		Ok(query(&self.node, &selector).next())
	}

	/// All descendant elements matching `selector`, in document order.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
		let selector = Selector::parse(selector)?;
		Ok(query(&self.node, &selector).collect())
	}
}

pub(crate) fn query<'a>(
	root: &Handle,
	selector: &'a Selector,
) -> impl Iterator<Item = Element> + 'a {
	node::descendants(root)
		.into_iter()
		.map(|node| Element { node })
		.filter(move |element| selector.matches(element))
}

impl PartialEq for Element {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

impl Eq for Element {}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.tag_name())
			.field("attributes", &self.attributes())
			.finish()
	}
}
