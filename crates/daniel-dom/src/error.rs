//! Errors raised by document operations.

use thiserror::Error;

/// Errors that can occur while querying or mutating a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// The selector string is not a supported simple selector.
	#[error("invalid selector `{selector}`: {reason}")]
	InvalidSelector {
		/// The rejected selector.
		selector: String,
		/// Why it was rejected.
		reason: &'static str,
	},
	/// The reference node is not a child of the node being mutated.
	#[error("reference node is not a child of this node")]
	NotAChild,
	/// The operation needs a parent but the node is detached.
	#[error("node is not attached to a parent")]
	Detached,
	/// Inserting the node would make it an ancestor of itself.
	#[error("cannot insert a node into its own subtree")]
	HierarchyRequest,
}
