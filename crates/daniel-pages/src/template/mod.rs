//! Template engine
//!
//! Renders a handwritten HTML template against a [`Store`]:
//!
//! - [`placeholder`]: `{{ name }}` scanning and replacement
//! - [`directive`]: attribute directives and their dispatch
//! - [`for_loop`]: the `d-for` list expansion
//! - [`render`]: the depth-first tree walk and leaf text substitution
//!
//! Rendering is fail-soft. Problems are reported as
//! [`Diagnostic`](crate::Diagnostic)s and the offending element is left as it
//! was.

pub mod directive;
pub mod for_loop;
pub mod placeholder;
pub mod render;

pub use directive::{Directive, DirectiveError, Dispatch, FOR_ATTRIBUTE, dispatch};
pub use for_loop::ForLoop;
pub use placeholder::{Placeholder, clean_placeholder, find_placeholders, replace_placeholders};
pub use render::{render_tree, substitute_text};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::reactive::Store;

/// Everything a render pass reads from and reports to.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
	/// Data placeholders and collections are resolved against.
	pub store: &'a Store,
	/// Sink for fail-soft problems.
	pub diagnostics: &'a Diagnostics,
}

impl<'a> RenderContext<'a> {
	/// Creates a context.
	pub fn new(store: &'a Store, diagnostics: &'a Diagnostics) -> Self {
		Self { store, diagnostics }
	}

	pub(crate) fn report(&self, diagnostic: Diagnostic) {
		self.diagnostics.report(diagnostic);
	}
}
