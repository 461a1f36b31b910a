//! Node storage shared by [`Document`](crate::Document) and [`Element`](crate::Element).
//!
//! Nodes are reference counted. A parent owns its children through strong
//! references and each child points back through a weak one, so detaching a
//! subtree drops it as soon as no handle refers to it anymore.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::DomError;

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	/// Attribute name, lowercased.
	pub name: String,
	/// Attribute value with entities decoded.
	pub value: String,
}

impl Attribute {
	/// Creates a new attribute.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into().to_ascii_lowercase(),
			value: value.into(),
		}
	}
}

pub(crate) enum NodeData {
	Document,
	Element {
		tag: String,
		attributes: RefCell<Vec<Attribute>>,
	},
	Text(RefCell<String>),
	Comment(String),
}

pub(crate) struct Node {
	pub(crate) data: NodeData,
	parent: RefCell<Weak<Node>>,
	pub(crate) children: RefCell<Vec<Handle>>,
}

pub(crate) type Handle = Rc<Node>;

impl Node {
	fn new(data: NodeData) -> Handle {
		Rc::new(Self {
			data,
			parent: RefCell::new(Weak::new()),
			children: RefCell::new(Vec::new()),
		})
	}

	pub(crate) fn document() -> Handle {
		Self::new(NodeData::Document)
	}

	pub(crate) fn element(tag: &str, attributes: Vec<Attribute>) -> Handle {
		Self::new(NodeData::Element {
			tag: tag.to_ascii_lowercase(),
			attributes: RefCell::new(attributes),
		})
	}

	pub(crate) fn text(text: impl Into<String>) -> Handle {
		Self::new(NodeData::Text(RefCell::new(text.into())))
	}

	pub(crate) fn comment(text: impl Into<String>) -> Handle {
		Self::new(NodeData::Comment(text.into()))
	}

	pub(crate) fn tag(&self) -> Option<&str> {
		match &self.data {
			NodeData::Element { tag, .. } => Some(tag),
			_ => None,
		}
	}

	pub(crate) fn is_element(&self) -> bool {
		matches!(self.data, NodeData::Element { .. })
	}

	pub(crate) fn parent(&self) -> Option<Handle> {
		self.parent.borrow().upgrade()
	}

	pub(crate) fn element_children(&self) -> Vec<Handle> {
		self.children
			.borrow()
			.iter()
			.filter(|child| child.is_element())
			.cloned()
			.collect()
	}

	/// Concatenated text of all descendant text nodes.
	pub(crate) fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match &self.data {
			NodeData::Text(text) => out.push_str(&text.borrow()),
			NodeData::Comment(_) => {}
			NodeData::Document | NodeData::Element { .. } => {
				for child in self.children.borrow().iter() {
					child.collect_text(out);
				}
			}
		}
	}
}

/// Detaches every child of `parent`.
pub(crate) fn clear_children(parent: &Handle) {
	let children = std::mem::take(&mut *parent.children.borrow_mut());
	for child in children {
		*child.parent.borrow_mut() = Weak::new();
	}
}

/// Removes `node` from its parent, if any.
pub(crate) fn detach(node: &Handle) {
	if let Some(parent) = node.parent() {
		parent
			.children
			.borrow_mut()
			.retain(|child| !Rc::ptr_eq(child, node));
	}
	*node.parent.borrow_mut() = Weak::new();
}

/// Appends `child` as the last child of `parent`, moving it if it is attached elsewhere.
pub(crate) fn append(parent: &Handle, child: &Handle) -> Result<(), DomError> {
	ensure_not_ancestor(child, parent)?;
	detach(child);
	*child.parent.borrow_mut() = Rc::downgrade(parent);
	parent.children.borrow_mut().push(child.clone());
	Ok(())
}

/// Appends a freshly created, parentless node. Unlike [`append`] this cannot
/// fail: a new node is neither attached elsewhere nor an ancestor of `parent`.
pub(crate) fn append_new(parent: &Handle, child: &Handle) {
	debug_assert!(child.parent().is_none());
	*child.parent.borrow_mut() = Rc::downgrade(parent);
	parent.children.borrow_mut().push(child.clone());
}

/// Inserts `new` into `parent` immediately before `reference`.
pub(crate) fn insert_before(parent: &Handle, new: &Handle, reference: &Handle) -> Result<(), DomError> {
	if Rc::ptr_eq(new, reference) {
		return Ok(());
	}
	if !is_child(parent, reference) {
		return Err(DomError::NotAChild);
	}
	ensure_not_ancestor(new, parent)?;

	detach(new);
	let mut children = parent.children.borrow_mut();
	let index = children
		.iter()
		.position(|child| Rc::ptr_eq(child, reference))
		.ok_or(DomError::NotAChild)?;
	*new.parent.borrow_mut() = Rc::downgrade(parent);
	children.insert(index, new.clone());
	Ok(())
}

pub(crate) fn is_child(parent: &Handle, node: &Handle) -> bool {
	node.parent().is_some_and(|p| Rc::ptr_eq(&p, parent))
}

// `node` may not become a descendant of itself.
fn ensure_not_ancestor(node: &Handle, target: &Handle) -> Result<(), DomError> {
	let mut current = Some(target.clone());
	while let Some(candidate) = current {
		if Rc::ptr_eq(&candidate, node) {
			return Err(DomError::HierarchyRequest);
		}
		current = candidate.parent();
	}
	Ok(())
}

/// Pre-order walk over the element descendants of `root`, excluding `root`.
pub(crate) fn descendants(root: &Handle) -> Vec<Handle> {
	let mut out = Vec::new();
	let mut stack: Vec<Handle> = root.element_children().into_iter().rev().collect();
	while let Some(node) = stack.pop() {
		stack.extend(node.element_children().into_iter().rev());
		out.push(node);
	}
	out
}
