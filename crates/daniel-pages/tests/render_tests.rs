//! Integration tests for template rendering: placeholders and `d-for`

use daniel_dom::{Document, Element};
use daniel_pages::template::substitute_text;
use daniel_pages::{
	Data, Diagnostic, DirectiveError, Diagnostics, RenderContext, Store, render_tree,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

struct Rendered {
	document: Document,
	root: Element,
	diagnostics: Diagnostics,
}

fn render(markup: &str, data: Data) -> Rendered {
	let document = Document::parse(markup);
	let root = document.query_selector("#app").unwrap().unwrap();
	let store = Store::new(data);
	let diagnostics = Diagnostics::new();
	render_tree(&RenderContext::new(&store, &diagnostics), &root);
	Rendered {
		document,
		root,
		diagnostics,
	}
}

#[fixture]
fn fruits() -> Data {
	Data::new()
		.with("title", "Groceries")
		.with("fruits", vec!["apple", "banana", "cherry"])
		.with("empty", Vec::<String>::new())
		.with("count", 3)
}

#[rstest]
fn test_greeting_is_substituted() {
	let rendered = render(
		r#"<div id="app"><p>Hello {{name}}</p></div>"#,
		Data::new().with("name", "World"),
	);
	assert_eq!(rendered.root.inner_html(), "<p>Hello World</p>");
}

#[rstest]
fn test_every_occurrence_is_substituted() {
	let rendered = render(
		r#"<div id="app"><p>{{ a }}{{a}} {{b}} {{ a}}</p></div>"#,
		Data::new().with("a", "x").with("b", 2),
	);
	assert_eq!(rendered.root.text_content(), "xx 2 x");
}

#[rstest]
fn test_missing_placeholder_stays_literal() {
	let rendered = render(
		r#"<div id="app"><p>{{missing}}</p></div>"#,
		Data::new().with("name", "World"),
	);
	assert_eq!(rendered.root.inner_html(), "<p>{{missing}}</p>");
	assert!(rendered.diagnostics.is_empty());
}

#[rstest]
fn test_substituted_values_are_text() {
	let rendered = render(
		r#"<div id="app"><p>{{markup}}</p></div>"#,
		Data::new().with("markup", "<b>bold</b>"),
	);
	assert_eq!(rendered.root.inner_html(), "<p>&lt;b&gt;bold&lt;/b&gt;</p>");
	assert_eq!(rendered.root.child_element_count(), 1);
}

#[rstest]
fn test_for_loop_expands_in_collection_order(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><ul><li d-for="fruit in fruits">{{ fruit }}</li></ul></div>"#,
		fruits,
	);
	let items = rendered.document.query_selector_all("li").unwrap();
	let texts: Vec<String> = items.iter().map(Element::text_content).collect();
	assert_eq!(texts, vec!["apple", "banana", "cherry"]);
	assert!(items.iter().all(|item| !item.has_attributes()));
	assert!(rendered.diagnostics.is_empty());
}

#[rstest]
fn test_for_loop_keeps_siblings_in_place(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><ul><li>first</li><li d-for="f in fruits">{{f}}</li><li>{{title}}</li></ul></div>"#,
		fruits,
	);
	assert_eq!(
		rendered.root.inner_html(),
		"<ul><li>first</li><li>apple</li><li>banana</li><li>cherry</li><li>Groceries</li></ul>"
	);
}

#[rstest]
fn test_implicitly_closed_sibling_is_not_part_of_the_loop() {
	let rendered = render(
		r#"<div id="app"><ul><li d-for="x in xs">{{x}}<li>{{name}}</ul></div>"#,
		Data::new().with("xs", vec!["a", "b"]).with("name", "N"),
	);
	assert_eq!(
		rendered.root.inner_html(),
		"<ul><li>a</li><li>b</li><li>N</li></ul>"
	);
}

#[rstest]
fn test_for_loop_item_markup_becomes_children() {
	let rendered = render(
		r#"<div id="app"><p d-for="line in lines">{{line}}</p></div>"#,
		Data::new().with("lines", vec!["plain", "<em>loud</em>"]),
	);
	let paragraphs = rendered.root.children();
	assert_eq!(paragraphs.len(), 2);
	assert_eq!(paragraphs[0].child_element_count(), 0);
	assert_eq!(paragraphs[1].inner_html(), "<em>loud</em>");
}

#[rstest]
fn test_for_loop_over_numbers() {
	let rendered = render(
		r#"<div id="app"><span d-for="n in numbers">#{{n}}</span></div>"#,
		Data::new().with("numbers", vec![1, 2, 30]),
	);
	assert_eq!(
		rendered.root.inner_html(),
		"<span>#1</span><span>#2</span><span>#30</span>"
	);
}

#[rstest]
fn test_empty_list_removes_directive_element(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><ul><li d-for="x in empty">{{x}}</li></ul></div>"#,
		fruits,
	);
	assert_eq!(rendered.root.inner_html(), "<ul></ul>");
	assert!(rendered.diagnostics.is_empty());
}

#[rstest]
#[case("x items", DirectiveError::MissingIn)]
#[case("x in in fruits", DirectiveError::MultipleIn(2))]
#[case("x in fruits now", DirectiveError::UnexpectedToken("now".into()))]
fn test_malformed_for_loop_is_left_alone(
	fruits: Data,
	#[case] statement: &str,
	#[case] expected: DirectiveError,
) {
	let markup = format!(r#"<div id="app"><ul><li d-for="{statement}">{{{{x}}}}</li></ul></div>"#);
	let rendered = render(&markup, fruits);

	let item = rendered.document.query_selector("li").unwrap().unwrap();
	assert_eq!(item.get_attribute("d-for").as_deref(), Some(statement));
	assert_eq!(item.text_content(), "{{x}}");
	assert_eq!(
		rendered.diagnostics.entries(),
		vec![Diagnostic::MalformedDirective {
			statement: statement.to_string(),
			error: expected,
		}]
	);
}

#[rstest]
fn test_unknown_collection_is_left_alone(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><ul><li d-for="x in vegetables">{{x}}</li><li>{{title}}</li></ul></div>"#,
		fruits,
	);
	assert_eq!(
		rendered.root.inner_html(),
		r#"<ul><li d-for="x in vegetables">{{x}}</li><li>Groceries</li></ul>"#
	);
	assert_eq!(
		rendered.diagnostics.entries(),
		vec![Diagnostic::UnresolvedCollection {
			collection: "vegetables".into()
		}]
	);
}

#[rstest]
fn test_non_list_collection_is_left_alone(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><li d-for="x in count">{{x}}</li></div>"#,
		fruits,
	);
	assert_eq!(rendered.root.children().len(), 1);
	assert_eq!(
		rendered.diagnostics.entries(),
		vec![Diagnostic::UnsupportedCollection {
			collection: "count".into(),
			kind: "number",
		}]
	);
}

#[rstest]
fn test_template_without_placeholders_aborts(fruits: Data) {
	let rendered = render(
		r#"<div id="app"><li d-for="x in fruits">static</li></div>"#,
		fruits,
	);
	assert_eq!(
		rendered.root.inner_html(),
		r#"<li d-for="x in fruits">static</li>"#
	);
	assert_eq!(
		rendered.diagnostics.entries(),
		vec![Diagnostic::NoPlaceholders {
			template: "static".into()
		}]
	);
}

#[rstest]
fn test_non_directive_attributes_pass_through() {
	let rendered = render(
		r#"<div id="app"><p class="note" d-if="x">{{name}}</p></div>"#,
		Data::new().with("name", "kept"),
	);
	assert_eq!(
		rendered.root.inner_html(),
		r#"<p class="note" d-if="x">kept</p>"#
	);
}

#[rstest]
fn test_substitute_text_leaves_plain_elements_untouched() {
	let element = Element::new("p");
	element.set_inner_html("plain <b>text</b>");
	let store = Store::new(Data::new().with("b", "x"));
	let diagnostics = Diagnostics::new();

	substitute_text(&RenderContext::new(&store, &diagnostics), &element);

	// No placeholder, so the child element survives.
	assert_eq!(element.inner_html(), "plain <b>text</b>");
}

proptest! {
	#[test]
	fn prop_text_without_placeholders_is_unchanged(text in "[^{}<>&]{0,40}") {
		let element = Element::new("p");
		element.set_text_content(&text);
		let store = Store::new(Data::new().with("name", "World"));
		let diagnostics = Diagnostics::new();

		substitute_text(&RenderContext::new(&store, &diagnostics), &element);

		prop_assert_eq!(element.text_content(), text);
	}

	#[test]
	fn prop_for_loop_yields_one_element_per_item(items in prop::collection::vec("[a-z]{1,8}", 0..8)) {
		let rendered = render(
			r#"<div id="app"><li d-for="x in items">{{x}}</li></div>"#,
			Data::new().with("items", items.clone()),
		);
		let texts: Vec<String> = rendered.root.children().iter().map(Element::text_content).collect();
		prop_assert_eq!(texts, items);
	}
}
