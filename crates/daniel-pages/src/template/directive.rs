//! Directive parsing and dispatch.
//!
//! Attributes are turned into a closed set of [`Directive`]s before anything
//! runs. Unknown attribute names are not directives and pass through untouched.

use daniel_dom::Element;
use thiserror::Error;

use super::RenderContext;
use super::for_loop::ForLoop;
use crate::diagnostics::Diagnostic;

/// Attribute name of the list-expansion directive.
pub const FOR_ATTRIBUTE: &str = "d-for";

/// Errors produced while parsing a directive's attribute text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
	/// No standalone `in` keyword.
	#[error("expected `<item> in <collection>`, found no `in` keyword")]
	MissingIn,
	/// The `in` keyword appears more than once.
	#[error("the `in` keyword appears {0} times")]
	MultipleIn(usize),
	/// Nothing before `in`.
	#[error("missing item identifier before `in`")]
	MissingItem,
	/// Nothing after `in`.
	#[error("missing collection identifier after `in`")]
	MissingCollection,
	/// More than one token on one side of `in`.
	#[error("unexpected token `{0}`")]
	UnexpectedToken(String),
	/// A token is not made of `[A-Za-z0-9_-]`.
	#[error("`{0}` is not a valid identifier")]
	InvalidIdentifier(String),
}

/// A parsed, validated directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
	/// `d-for="item in collection"`
	For(ForLoop),
}

impl Directive {
	/// Parses an attribute into a directive.
	///
	/// Returns `None` if `name` is not a directive attribute.
	pub fn parse(name: &str, value: &str) -> Option<Result<Self, DirectiveError>> {
		match name {
			FOR_ATTRIBUTE => Some(ForLoop::parse(value).map(Self::For)),
			_ => None,
		}
	}
}

/// What directive dispatch did to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
	/// The element is still in place (untouched, or left as it was after a
	/// fail-soft error) and rendering should descend into it.
	Kept(Element),
	/// The element was replaced by generated elements and is now detached.
	Expanded {
		/// The detached directive element.
		original: Element,
		/// The elements inserted in its place, in document order.
		generated: Vec<Element>,
	},
}

/// Runs every directive carried by `element`.
pub fn dispatch(ctx: &RenderContext<'_>, element: Element) -> Dispatch {
	if !element.has_attributes() {
		return Dispatch::Kept(element);
	}

	for attribute in element.attributes() {
		match Directive::parse(&attribute.name, &attribute.value) {
			None => {}
			Some(Err(error)) => ctx.report(Diagnostic::MalformedDirective {
				statement: attribute.value,
				error,
			}),
			Some(Ok(Directive::For(for_loop))) => {
				if let Some(generated) = for_loop.expand(ctx, &element) {
					return Dispatch::Expanded {
						original: element,
						generated,
					};
				}
			}
		}
	}

	Dispatch::Kept(element)
}
