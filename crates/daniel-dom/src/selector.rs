//! Simple selectors.
//!
//! Only compound simple selectors are supported: an optional tag name
//! followed by at most one `#id` and any number of `.class` parts, e.g.
//! `#app`, `.list`, `ul`, `div#app`, `li.item.active`. Combinators,
//! attribute selectors and pseudo-classes are rejected.

use std::str::FromStr;

use crate::element::Element;
use crate::error::DomError;

/// A parsed compound simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
}

fn is_ident_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
	/// Parses a selector string.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidSelector`] for empty input, combinators or
	/// any syntax outside the supported subset.
	pub fn parse(input: &str) -> Result<Self, DomError> {
		let invalid = |reason| DomError::InvalidSelector {
			selector: input.to_string(),
			reason,
		};

		let source = input.trim();
		if source.is_empty() {
			return Err(invalid("selector is empty"));
		}

		let mut selector = Selector::default();
		let mut rest = source;

		let tag_len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
		if tag_len > 0 {
			selector.tag = Some(rest[..tag_len].to_ascii_lowercase());
			rest = &rest[tag_len..];
		}

		while let Some(prefix) = rest.chars().next() {
			let body = &rest[prefix.len_utf8()..];
			let len = body.find(|c: char| !is_ident_char(c)).unwrap_or(body.len());
			let name = &body[..len];
			match prefix {
				'#' | '.' if name.is_empty() => return Err(invalid("missing name after `#` or `.`")),
				'#' if selector.id.is_some() => return Err(invalid("more than one id")),
				'#' => selector.id = Some(name.to_string()),
				'.' => selector.classes.push(name.to_string()),
				c if c.is_whitespace() || matches!(c, '>' | '+' | '~' | ',') => {
					return Err(invalid("combinators are not supported"));
				}
				_ => return Err(invalid("unsupported selector syntax")),
			}
			rest = &body[len..];
		}

		Ok(selector)
	}

	/// Returns `true` if `element` matches every part of this selector.
	pub fn matches(&self, element: &Element) -> bool {
		if let Some(tag) = &self.tag
			&& element.tag_name() != tag
		{
			return false;
		}
		if let Some(id) = &self.id
			&& element.id().as_deref() != Some(id.as_str())
		{
			return false;
		}
		if self.classes.is_empty() {
			return true;
		}
		let classes = element.class_list();
		self.classes.iter().all(|class| classes.contains(class))
	}
}

impl FromStr for Selector {
	type Err = DomError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
