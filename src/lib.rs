//! # Daniel
//!
//! A minimal reactive templating library.
//!
//! Daniel takes an element holding handwritten HTML with `{{variable}}`
//! placeholders and `d-for` loops, and keeps it synchronized with a flat data
//! object. Any write to the data re-renders the element.
//!
//! ## Modules
//!
//! - [`dom`]: the in-memory document model (`daniel-dom`)
//! - [`pages`]: the template engine and reactive store (`daniel-pages`)
//!
//! ## Feature Flags
//!
//! - `debug-hooks` - `debug_log!` output and the last-mounted instance registry
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use daniel::prelude::*;
//!
//! let document = Document::parse(r#"
//!     <div id="app">
//!         <p>Hello {{ name }}</p>
//!         <ul><li d-for="fruit in fruits">{{ fruit }}</li></ul>
//!     </div>
//! "#);
//!
//! let app = App::mount(
//!     &document,
//!     MountOptions::new("#app")
//!         .with("name", "World")
//!         .with("fruits", vec!["apple", "pear"])
//!         .mounted(|app| info_log!("mounted on {}", app.selector())),
//! )?;
//!
//! app.set("name", "Daniel");
//! ```

pub mod dom;
pub mod pages;

pub use daniel_pages::{VERSION, version};

/// Everything needed to mount and drive an application.
pub mod prelude {
	pub use crate::dom::{Document, Element};
	pub use crate::pages::{
		App, Data, Diagnostic, MountError, MountOptions, MountSettings, RerenderStrategy, Store,
		Value,
	};
	pub use daniel_pages::{error_log, info_log, warn_log};
}
