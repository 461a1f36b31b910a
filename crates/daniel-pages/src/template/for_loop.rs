//! `d-for` list expansion.
//!
//! `d-for="fruit in fruits"` repeats the carrying element once per item of the
//! `fruits` list. The element's text is the per-item template; every
//! `{{fruit}}` in it receives the item. The generated elements take the
//! directive element's place, in collection order.
//!
//! Item values are inserted as markup, so an item such as `"<b>x</b>"`
//! becomes a child `<b>` element of the generated element. Data bound through
//! `d-for` must therefore be trusted.

use std::fmt;
use std::sync::LazyLock;

use daniel_dom::{DomError, Element};
use regex::Regex;

use super::directive::DirectiveError;
use super::placeholder::{find_placeholders, replace_placeholders};
use super::RenderContext;
use crate::diagnostics::Diagnostic;

static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9_-]+$").expect("IDENTIFIER_REGEX: invalid regex pattern")
});

const IN_KEYWORD: &str = "in";

/// A parsed `item in collection` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
	/// Name each item is bound to inside the template.
	pub item: String,
	/// Data property holding the list.
	pub collection: String,
}

impl ForLoop {
	/// Parses `item in collection`.
	///
	/// Tokens are separated by any amount of whitespace. Exactly one `in`
	/// token must be present, with exactly one identifier on each side.
	///
	/// # Example
	///
	/// ```ignore
	/// let for_loop = ForLoop::parse("fruit in fruits")?;
	/// assert_eq!(for_loop.item, "fruit");
	/// assert_eq!(for_loop.collection, "fruits");
	///
	/// assert_eq!(ForLoop::parse("fruit fruits"), Err(DirectiveError::MissingIn));
	/// ```
	pub fn parse(statement: &str) -> Result<Self, DirectiveError> {
		let tokens: Vec<&str> = statement.split_whitespace().collect();

		let in_count = tokens.iter().filter(|token| **token == IN_KEYWORD).count();
		match in_count {
			0 => return Err(DirectiveError::MissingIn),
			1 => {}
			n => return Err(DirectiveError::MultipleIn(n)),
		}

		let split = tokens
			.iter()
			.position(|token| *token == IN_KEYWORD)
			.ok_or(DirectiveError::MissingIn)?;
		let (before, after) = (&tokens[..split], &tokens[split + 1..]);

		let item = single_identifier(before, DirectiveError::MissingItem)?;
		let collection = single_identifier(after, DirectiveError::MissingCollection)?;

		Ok(Self {
			item: item.to_string(),
			collection: collection.to_string(),
		})
	}

	/// Expands `element` in place.
	///
	/// Returns the generated elements, or `None` when expansion was abandoned.
	/// In that case a diagnostic has been reported and `element` is untouched.
	pub fn expand(&self, ctx: &RenderContext<'_>, element: &Element) -> Option<Vec<Element>> {
		let Some(value) = ctx.store.get(&self.collection) else {
			ctx.report(Diagnostic::UnresolvedCollection {
				collection: self.collection.clone(),
			});
			return None;
		};
		let Some(items) = value.as_list() else {
			ctx.report(Diagnostic::UnsupportedCollection {
				collection: self.collection.clone(),
				kind: value.kind(),
			});
			return None;
		};

		let template = element.text_content();
		if !items.is_empty() && find_placeholders(&template).is_none() {
			ctx.report(Diagnostic::NoPlaceholders { template });
			return None;
		}
		if !element.has_parent() {
			ctx.report(Diagnostic::Dom(DomError::Detached));
			return None;
		}

		let mut generated = Vec::with_capacity(items.len());
		for item in items {
			let clone = Element::new(element.tag_name());
			clone.set_text_content(&template);
			let markup = clone.inner_html();
			let rendered = replace_placeholders(&markup, |name| {
				(name == self.item).then(|| item.to_string())
			});
			if let Some(rendered) = rendered {
				clone.set_inner_html(&rendered);
			}
			generated.push(clone);
		}

		for clone in &generated {
			if let Err(error) = element.before(clone) {
				// Undo the partial insertion so the element is left as it was.
				for inserted in &generated {
					inserted.remove();
				}
				ctx.report(Diagnostic::Dom(error));
				return None;
			}
		}
		element.remove();

		Some(generated)
	}
}

fn single_identifier<'a>(tokens: &[&'a str], missing: DirectiveError) -> Result<&'a str, DirectiveError> {
	match tokens {
		[] => Err(missing),
		[token] if IDENTIFIER_REGEX.is_match(token) => Ok(token),
		[token] => Err(DirectiveError::InvalidIdentifier((*token).to_string())),
		[_, extra, ..] => Err(DirectiveError::UnexpectedToken((*extra).to_string())),
	}
}

impl fmt::Display for ForLoop {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.item, IN_KEYWORD, self.collection)
	}
}
