//! # daniel-pages
//!
//! Reactive templating over a [`daniel_dom::Document`].
//!
//! An application is mounted on an element whose markup is a handwritten
//! template. Two template features exist:
//!
//! - **Placeholders**: `{{ name }}` in an element's text is replaced with the
//!   `name` data property. Unknown names stay literal.
//! - **`d-for`**: `d-for="item in items"` repeats the element once per entry
//!   of the `items` list, substituting `{{ item }}` in each copy.
//!
//! Every write to the data re-renders the whole element synchronously.
//! There is no diffing and no dependency tracking.
//!
//! ## Architecture
//!
//! - [`value`]: the flat data object ([`Data`], [`Value`])
//! - [`reactive`]: the observable [`Store`]
//! - [`template`]: placeholder scanning, directives, list expansion, tree walk
//! - [`app`]: mounting and re-rendering ([`App`])
//! - [`options`]: [`MountOptions`] builder and serde [`MountSettings`]
//! - [`diagnostics`]: fail-soft problem reports
//!
//! ## Example
//!
//! ```ignore
//! use daniel_dom::Document;
//! use daniel_pages::{App, Data, MountOptions};
//!
//! let document = Document::parse(r#"
//!     <div id="app">
//!         <h1>{{ title }}</h1>
//!         <ul><li d-for="fruit in fruits">{{ fruit }}</li></ul>
//!     </div>
//! "#);
//!
//! let app = App::mount(
//!     &document,
//!     MountOptions::new("#app").data(
//!         Data::new()
//!             .with("title", "Groceries")
//!             .with("fruits", vec!["apple", "pear"]),
//!     ),
//! )?;
//!
//! app.set("title", "Shopping");
//! ```
//!
//! ## Feature Flags
//!
//! - `debug-hooks`: enables `debug_log!` output and [`app::debug`], a weak
//!   registry of the last mounted application

#![warn(missing_docs)]

pub mod app;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod options;
pub mod platform;
pub mod reactive;
pub mod template;
pub mod value;

pub use app::App;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{MountError, MountResult, SettingsError};
pub use options::{MountOptions, MountSettings, RerenderStrategy};
pub use reactive::Store;
pub use template::{
	Directive, DirectiveError, Dispatch, ForLoop, RenderContext, clean_placeholder,
	find_placeholders, render_tree,
};
pub use value::{Data, Value};

use std::sync::Once;

/// Version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns [`VERSION`].
pub fn version() -> &'static str {
	VERSION
}

static ANNOUNCE: Once = Once::new();

pub(crate) fn announce_version() {
	ANNOUNCE.call_once(|| info_log!("You are running daniel v{}", VERSION));
}

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
