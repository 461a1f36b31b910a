//! Integration tests for mounting and reactive re-rendering

use std::cell::RefCell;
use std::rc::Rc;

use daniel_dom::Document;
use daniel_pages::{
	App, Data, Diagnostic, MountError, MountOptions, MountSettings, RerenderStrategy, Value,
};
use rstest::{fixture, rstest};

const PAGE: &str = r#"<body>
<div id="app">
<h1>{{ title }}</h1>
<p>{{title}} has {{count}} items</p>
<ul><li d-for="fruit in fruits">{{ fruit }}</li></ul>
</div>
<footer>{{title}}</footer>
</body>"#;

#[fixture]
fn document() -> Document {
	Document::parse(PAGE)
}

#[fixture]
fn data() -> Data {
	Data::new()
		.with("title", "Groceries")
		.with("count", 2)
		.with("fruits", vec!["apple", "pear"])
}

fn texts(document: &Document, selector: &str) -> Vec<String> {
	document
		.query_selector_all(selector)
		.unwrap()
		.iter()
		.map(|element| element.text_content())
		.collect()
}

#[rstest]
fn test_mount_renders_template(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data)).unwrap();

	assert_eq!(texts(&document, "h1"), vec!["Groceries"]);
	assert_eq!(texts(&document, "p"), vec!["Groceries has 2 items"]);
	assert_eq!(texts(&document, "li"), vec!["apple", "pear"]);
	// Outside the root nothing is rendered.
	assert_eq!(texts(&document, "footer"), vec!["{{title}}"]);
	assert!(app.diagnostics().is_empty());
}

#[rstest]
fn test_write_rerenders_once_and_everywhere(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data)).unwrap();
	assert_eq!(app.render_passes(), 1);

	app.set("title", "Shopping");

	assert_eq!(app.render_passes(), 2);
	assert_eq!(texts(&document, "h1"), vec!["Shopping"]);
	assert_eq!(texts(&document, "p"), vec!["Shopping has 2 items"]);
	assert_eq!(app.get("title"), Some(Value::from("Shopping")));
}

#[rstest]
fn test_every_write_rerenders(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data)).unwrap();

	app.set("count", 2);
	app.set("count", 3);

	assert_eq!(app.render_passes(), 3);
	assert_eq!(texts(&document, "p"), vec!["Groceries has 3 items"]);
}

#[rstest]
fn test_destructive_strategy_reexpands_lists(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data)).unwrap();

	app.update("fruits", |fruits| {
		if let Value::List(items) = fruits {
			items.push(Value::from("plum"));
		}
	});

	assert_eq!(texts(&document, "li"), vec!["apple", "pear", "plum"]);
	assert_eq!(document.query_selector_all("#app").unwrap().len(), 1);
}

#[rstest]
fn test_in_place_strategy_does_not_reexpand(document: Document, data: Data) {
	let app = App::mount(
		&document,
		MountOptions::new("#app")
			.data(data)
			.strategy(RerenderStrategy::InPlace),
	)
	.unwrap();
	let root = app.root();

	app.set("fruits", vec!["kiwi"]);

	assert_eq!(app.root(), root);
	assert_eq!(texts(&document, "li"), vec!["apple", "pear"]);
	assert_eq!(app.render_passes(), 2);
}

#[rstest]
fn test_unknown_names_are_accepted(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data)).unwrap();

	app.set("subtitle", "new");

	assert_eq!(app.get("subtitle"), Some(Value::from("new")));
	assert_eq!(app.render_passes(), 2);
}

#[rstest]
fn test_diagnostics_cover_latest_render_only(document: Document) {
	let app = App::mount(
		&document,
		MountOptions::new("#app").with("title", "t").with("count", 0),
	)
	.unwrap();
	let expected = vec![Diagnostic::UnresolvedCollection {
		collection: "fruits".into(),
	}];
	assert_eq!(app.diagnostics().entries(), expected);

	for count in 1..=100 {
		app.set("count", count);
	}
	assert_eq!(app.diagnostics().entries(), expected);

	app.set("fruits", vec!["apple"]);
	assert!(app.diagnostics().is_empty());
	assert_eq!(texts(&document, "li"), vec!["apple"]);
}

#[rstest]
fn test_update_may_read_the_store(document: Document, data: Data) {
	let app = App::mount(&document, MountOptions::new("#app").data(data.with("step", 5))).unwrap();
	let reader = app.clone();

	app.update("count", |count| *count = reader.get("step").unwrap());

	assert_eq!(app.get("count"), Some(Value::from(5)));
	assert_eq!(texts(&document, "p"), vec!["Groceries has 5 items"]);
}

#[rstest]
fn test_mounted_sees_rendered_tree(document: Document, data: Data) {
	let seen = Rc::new(RefCell::new(None));
	let sink = seen.clone();
	App::mount(
		&document,
		MountOptions::new("#app")
			.data(data)
			.mounted(move |app| *sink.borrow_mut() = Some(app.root().query_selector_all("li").unwrap().len())),
	)
	.unwrap();
	assert_eq!(*seen.borrow(), Some(2));
}

#[rstest]
fn test_root_not_found(document: Document) {
	let error = App::mount(&document, MountOptions::new("#missing")).unwrap_err();
	assert_eq!(error, MountError::RootNotFound("#missing".into()));
	assert_eq!(error.to_string(), "no element matches root selector `#missing`");
}

#[rstest]
fn test_missing_root(document: Document) {
	let error = App::mount(&document, MountOptions::empty()).unwrap_err();
	assert_eq!(error.to_string(), "daniel needs to have an el-variable");
}

#[rstest]
fn test_mount_from_toml_settings(document: Document) {
	let settings = MountSettings::from_toml(
		r##"
el = "#app"
strategy = "destructive"

[data]
title = "From TOML"
count = 1
fruits = ["fig"]
"##,
	)
	.unwrap();

	let app = App::mount(&document, settings.into()).unwrap();

	assert_eq!(texts(&document, "h1"), vec!["From TOML"]);
	assert_eq!(texts(&document, "li"), vec!["fig"]);
	assert_eq!(app.strategy(), RerenderStrategy::Destructive);
}

#[rstest]
fn test_mount_from_json_settings(document: Document) {
	let settings = MountSettings::from_json(
		r##"{"el": "#app", "strategy": "in_place", "data": {"title": "JSON", "count": 0, "fruits": []}}"##,
	)
	.unwrap();

	let app = App::mount(&document, settings.into()).unwrap();

	assert_eq!(texts(&document, "h1"), vec!["JSON"]);
	assert!(texts(&document, "li").is_empty());
	assert_eq!(app.strategy(), RerenderStrategy::InPlace);
}

#[rstest]
fn test_version_is_exposed() {
	assert_eq!(daniel_pages::version(), env!("CARGO_PKG_VERSION"));
	assert!(!daniel_pages::VERSION.is_empty());
}
