//! Tree rendering.

use daniel_dom::Element;

use super::RenderContext;
use super::directive::{Dispatch, dispatch};
use super::placeholder::replace_placeholders;

/// Renders every descendant of `root`, depth-first in document order.
///
/// Directives run before an element's children are visited, so a `d-for`
/// element is expanded before anything inside it would be substituted.
/// Elements generated by an expansion are final and not visited again.
/// `root` itself is neither dispatched nor substituted.
pub fn render_tree(ctx: &RenderContext<'_>, root: &Element) {
	// Expansion mutates the child list, so walk a snapshot of it.
	for child in root.children() {
		match dispatch(ctx, child) {
			Dispatch::Expanded { .. } => continue,
			Dispatch::Kept(element) if element.child_element_count() > 0 => {
				render_tree(ctx, &element);
			}
			Dispatch::Kept(element) => substitute_text(ctx, &element),
		}
	}
}

/// Replaces the placeholders in `element`'s text with data values.
///
/// Placeholders naming a missing property stay literal. The element is not
/// touched at all when nothing was replaced.
pub fn substitute_text(ctx: &RenderContext<'_>, element: &Element) {
	let text = element.text_content();
	let rendered = replace_placeholders(&text, |name| {
		ctx.store.with(name, |value| value.map(ToString::to_string))
	});
	if let Some(rendered) = rendered {
		element.set_text_content(&rendered);
	}
}
