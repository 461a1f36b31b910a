//! Markup serialization for `inner_html` / `outer_html`.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{Handle, NodeData};

// Elements without an end tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

// Elements whose text children are written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &[
	"script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

pub(crate) fn serialize_children(node: &Handle, out: &mut String) {
	let raw = node
		.tag()
		.is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
	for child in node.children.borrow().iter() {
		match &child.data {
			NodeData::Text(text) if raw => out.push_str(&text.borrow()),
			_ => serialize_node(child, out),
		}
	}
}

pub(crate) fn serialize_node(node: &Handle, out: &mut String) {
	match &node.data {
		NodeData::Document => serialize_children(node, out),
		NodeData::Element { tag, attributes } => {
			out.push('<');
			out.push_str(tag);
			for attribute in attributes.borrow().iter() {
				out.push(' ');
				out.push_str(&attribute.name);
				out.push_str("=\"");
				out.push_str(&encode_double_quoted_attribute(&attribute.value));
				out.push('"');
			}
			out.push('>');
			if VOID_ELEMENTS.contains(&tag.as_str()) {
				return;
			}
			serialize_children(node, out);
			out.push_str("</");
			out.push_str(tag);
			out.push('>');
		}
		NodeData::Text(text) => out.push_str(&encode_text(text.borrow().as_str())),
		NodeData::Comment(text) => {
			out.push_str("<!--");
			out.push_str(text);
			out.push_str("-->");
		}
	}
}
