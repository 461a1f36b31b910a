//! Markup parsing.
//!
//! Markup is parsed by html5ever into an `RcDom` and the result is copied into
//! this crate's node tree. Parsing follows the HTML standard, so implied end
//! tags, entity decoding and error recovery behave as they do in a browser and
//! parsing never fails.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_document, parse_fragment};
use markup5ever_rcdom::{self as rcdom, RcDom};

use crate::node::{self, Attribute, Handle, Node};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parses a full page into `document`, which receives the `html` element.
pub(crate) fn parse_document_into(document: &Handle, markup: &str) {
	let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);
	copy_children(&dom.document, document);
}

/// Parses `markup` the way `innerHTML` assignment on `parent` does and
/// appends the resulting nodes to `parent`.
pub(crate) fn parse_fragment_into(parent: &Handle, markup: &str) {
	let context = QualName::new(
		None,
		Namespace::from(HTML_NAMESPACE),
		LocalName::from(parent.tag().unwrap_or("body")),
	);
	let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new()).one(markup);

	// Fragment results hang off a synthetic `html` element.
	let fragment_root = dom.document.children.borrow().first().cloned();
	if let Some(fragment_root) = fragment_root {
		copy_children(&fragment_root, parent);
	}
}

fn copy_children(source: &rcdom::Handle, target: &Handle) {
	for child in source.children.borrow().iter() {
		if let Some(copy) = copy_node(child) {
			node::append_new(target, &copy);
		}
	}
}

fn copy_node(source: &rcdom::Handle) -> Option<Handle> {
	match &source.data {
		rcdom::NodeData::Element {
			name,
			attrs,
			template_contents,
			..
		} => {
			let attributes = attrs
				.borrow()
				.iter()
				.map(|attr| Attribute::new(&*attr.name.local, &*attr.value))
				.collect();
			let element = Node::element(&name.local, attributes);
			copy_children(source, &element);
			if let Some(contents) = template_contents.borrow().as_ref() {
				copy_children(contents, &element);
			}
			Some(element)
		}
		rcdom::NodeData::Text { contents } => Some(Node::text(contents.borrow().to_string())),
		rcdom::NodeData::Comment { contents } => Some(Node::comment(contents.to_string())),
		rcdom::NodeData::Document
		| rcdom::NodeData::Doctype { .. }
		| rcdom::NodeData::ProcessingInstruction { .. } => None,
	}
}
