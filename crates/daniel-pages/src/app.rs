//! Application handle
//!
//! [`App::mount`] binds a [`Store`] to the element matched by a selector,
//! renders the element's template once and then regenerates it on every
//! write to the store.
//!
//! ## Example
//!
//! ```ignore
//! use daniel_dom::Document;
//! use daniel_pages::{App, Data, MountOptions};
//!
//! let document = Document::parse(r#"<div id="app"><p>Hello {{ name }}</p></div>"#);
//! let app = App::mount(
//!     &document,
//!     MountOptions::new("#app").data(Data::new().with("name", "World")),
//! )?;
//! assert_eq!(app.root().text_content(), "Hello World");
//!
//! app.set("name", "Rust");
//! assert_eq!(app.root().text_content(), "Hello Rust");
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use daniel_dom::{Document, Element};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MountError;
use crate::options::{MountOptions, RerenderStrategy};
use crate::reactive::Store;
use crate::template::{RenderContext, render_tree};
use crate::value::Value;
use crate::{info_log, platform};

struct AppInner {
	selector: String,
	template: String,
	root: RefCell<Element>,
	store: Store,
	strategy: RerenderStrategy,
	diagnostics: Diagnostics,
	render_passes: Cell<usize>,
}

impl AppInner {
	// Each pass starts with an empty diagnostics log.
	fn render(&self) {
		self.diagnostics.clear();
		let root = self.root.borrow().clone();
		render_tree(&RenderContext::new(&self.store, &self.diagnostics), &root);
		self.render_passes.set(self.render_passes.get() + 1);
	}

	fn rerender(&self) {
		match self.strategy {
			RerenderStrategy::Destructive => {
				let old = self.root.borrow().clone();
				let fresh = Element::new(old.tag_name());
				if let Some(id) = old.id() {
					fresh.set_attribute("id", &id);
				}
				fresh.set_inner_html(&self.template);
				if let Err(error) = old.before(&fresh) {
					self.diagnostics.clear();
					self.diagnostics.report(Diagnostic::Dom(error));
					return;
				}
				old.remove();
				*self.root.borrow_mut() = fresh;
				self.render();
			}
			RerenderStrategy::InPlace => self.render(),
		}
	}
}

/// A mounted application.
///
/// Cloning is cheap; clones refer to the same application.
#[derive(Clone)]
pub struct App {
	inner: Rc<AppInner>,
}

impl App {
	/// Mounts an application on the element `options.el` selects.
	///
	/// The element's markup becomes the template. It is rendered once, then
	/// `options.mounted` runs. Every later write to the data re-renders the
	/// whole element before the write returns.
	///
	/// # Errors
	///
	/// Fails when no selector was given, when it cannot be parsed or when it
	/// matches no element. The error is logged as well.
	pub fn mount(document: &Document, options: MountOptions) -> Result<Self, MountError> {
		crate::announce_version();
		let started = platform::now_millis();

		let MountOptions {
			el,
			data,
			mounted,
			strategy,
		} = options;

		let Some(selector) = el else {
			Diagnostic::MissingRoot.emit();
			return Err(MountError::MissingRoot);
		};
		let root = document
			.query_selector(&selector)
			.inspect_err(|error| Diagnostic::Dom(error.clone()).emit())?;
		let Some(root) = root else {
			Diagnostic::RootNotFound {
				selector: selector.clone(),
			}
			.emit();
			return Err(MountError::RootNotFound(selector));
		};

		let inner = Rc::new(AppInner {
			selector,
			template: root.inner_html(),
			root: RefCell::new(root),
			store: Store::new(data),
			strategy,
			diagnostics: Diagnostics::new(),
			render_passes: Cell::new(0),
		});

		let weak: Weak<AppInner> = Rc::downgrade(&inner);
		inner.store.subscribe(move |_, _| {
			if let Some(inner) = weak.upgrade() {
				inner.rerender();
			}
		});

		inner.render();

		let app = Self { inner };
		#[cfg(feature = "debug-hooks")]
		debug::register(&app);

		if let Some(mounted) = mounted {
			mounted(&app);
		}

		info_log!(
			"mounted {} in {:.2}ms",
			app.inner.selector,
			platform::now_millis() - started
		);
		Ok(app)
	}

	/// Current value of a data property.
	pub fn get(&self, name: &str) -> Option<Value> {
		self.inner.store.get(name)
	}

	/// Writes a data property and re-renders before returning.
	pub fn set(&self, name: &str, value: impl Into<Value>) {
		self.inner.store.set(name, value);
	}

	/// Modifies a data property in place and re-renders before returning.
	///
	/// Does nothing if the property does not exist.
	pub fn update<F>(&self, name: &str, f: F)
	where
		F: FnOnce(&mut Value),
	{
		self.inner.store.update(name, f);
	}

	/// The application's store.
	pub fn store(&self) -> &Store {
		&self.inner.store
	}

	/// The element currently holding the rendered output.
	///
	/// With [`RerenderStrategy::Destructive`] this is a different element
	/// after every write.
	pub fn root(&self) -> Element {
		self.inner.root.borrow().clone()
	}

	/// Root markup captured at mount time, before the first render.
	pub fn template(&self) -> &str {
		&self.inner.template
	}

	/// The selector the application was mounted with.
	pub fn selector(&self) -> &str {
		&self.inner.selector
	}

	/// The re-render strategy.
	pub fn strategy(&self) -> RerenderStrategy {
		self.inner.strategy
	}

	/// Problems reported by the latest render pass.
	pub fn diagnostics(&self) -> &Diagnostics {
		&self.inner.diagnostics
	}

	/// Number of completed render passes, the initial one included.
	pub fn render_passes(&self) -> usize {
		self.inner.render_passes.get()
	}

	/// Re-renders without writing any data.
	pub fn rerender(&self) {
		self.inner.rerender();
	}
}

impl fmt::Debug for App {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("App")
			.field("selector", &self.inner.selector)
			.field("strategy", &self.inner.strategy)
			.field("store", &self.inner.store)
			.field("render_passes", &self.render_passes())
			.finish()
	}
}

/// Access to the most recently mounted application, for inspection from
/// debugging tools.
///
/// The registry holds a weak reference and never keeps an application alive.
#[cfg(feature = "debug-hooks")]
pub mod debug {
	use std::cell::RefCell;
	use std::rc::{Rc, Weak};

	use super::{App, AppInner};
	use crate::debug_log;

	thread_local! {
		static LAST_MOUNTED: RefCell<Weak<AppInner>> = const { RefCell::new(Weak::new()) };
	}

	pub(super) fn register(app: &App) {
		debug_log!("registering {} as the last mounted application", app.selector());
		LAST_MOUNTED.with(|last| *last.borrow_mut() = Rc::downgrade(&app.inner));
	}

	/// The last application mounted on this thread, if it is still alive.
	pub fn last_mounted() -> Option<App> {
		LAST_MOUNTED.with(|last| last.borrow().upgrade().map(|inner| App { inner }))
	}
}
