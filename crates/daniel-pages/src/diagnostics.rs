//! Render diagnostics.
//!
//! Every fail-soft problem met while rendering is recorded as a
//! [`Diagnostic`] on the application and written to the log sink. Nothing
//! here ever aborts a render pass.

use std::cell::RefCell;

use daniel_dom::DomError;
use thiserror::Error;

use crate::template::DirectiveError;
use crate::{error_log, warn_log};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	/// Rendering continued with the offending node left as it was.
	Warning,
	/// The application could not be set up.
	Error,
}

/// A problem reported while mounting or rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
	/// No root selector was configured.
	#[error("daniel needs to have an el-variable")]
	MissingRoot,
	/// The root selector matched nothing.
	#[error("no element matches root selector `{selector}`")]
	RootNotFound {
		/// The configured selector.
		selector: String,
	},
	/// A `d-for` statement could not be parsed.
	#[error("Error handling d-for statement `{statement}`: {error}")]
	MalformedDirective {
		/// The attribute text.
		statement: String,
		/// Why it was rejected.
		error: DirectiveError,
	},
	/// The `d-for` collection is not a data property.
	#[error("Error handling d-for statement: {collection} not found")]
	UnresolvedCollection {
		/// The collection identifier.
		collection: String,
	},
	/// The `d-for` collection exists but is not a list.
	#[error("Error handling d-for statement: {collection} is a {kind}, not a list")]
	UnsupportedCollection {
		/// The collection identifier.
		collection: String,
		/// Kind of the value found instead.
		kind: &'static str,
	},
	/// The `d-for` element's text has nothing to substitute.
	#[error("No valid placeholder found for `{template}`")]
	NoPlaceholders {
		/// The per-item template text.
		template: String,
	},
	/// A document mutation failed.
	#[error("document operation failed: {0}")]
	Dom(#[from] DomError),
}

impl Diagnostic {
	/// Severity of this diagnostic.
	pub fn severity(&self) -> Severity {
		match self {
			Self::MissingRoot | Self::RootNotFound { .. } => Severity::Error,
			_ => Severity::Warning,
		}
	}

	/// Writes the diagnostic to the log sink.
	pub fn emit(&self) {
		match self.severity() {
			Severity::Error => error_log!("{}", self),
			Severity::Warning => warn_log!("{}", self),
		}
	}
}

/// Ordered log of the diagnostics an application produced.
#[derive(Debug, Default)]
pub struct Diagnostics {
	entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
	/// Creates an empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Emits `diagnostic` and keeps it.
	pub fn report(&self, diagnostic: Diagnostic) {
		diagnostic.emit();
		self.entries.borrow_mut().push(diagnostic);
	}

	/// Everything reported so far.
	pub fn entries(&self) -> Vec<Diagnostic> {
		self.entries.borrow().clone()
	}

	/// Number of diagnostics reported so far.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns `true` when nothing was reported.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Forgets every recorded diagnostic.
	pub fn clear(&self) {
		self.entries.borrow_mut().clear();
	}
}
