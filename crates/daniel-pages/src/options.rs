//! Mount options and settings files.
//!
//! [`MountOptions`] is the builder used from code. [`MountSettings`] is its
//! serializable subset, for applications configured from a TOML or JSON file.
//! The `mounted` callback only exists on the builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::error::SettingsError;
use crate::value::{Data, Value};

/// How the tree is regenerated after a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RerenderStrategy {
	/// Recreate the root from the template captured at mount time and render
	/// it from scratch. `d-for` blocks are expanded again on every write.
	#[default]
	Destructive,
	/// Render the existing root again. Placeholders already replaced stay as
	/// they are and expanded `d-for` blocks are not regenerated.
	InPlace,
}

type MountedCallback = Box<dyn FnOnce(&App)>;

/// Options for [`App::mount`].
///
/// # Example
///
/// ```ignore
/// let options = MountOptions::new("#app")
///     .data(Data::new().with("name", "World"))
///     .mounted(|app| info_log!("ready: {}", app.selector()))
///     .strategy(RerenderStrategy::Destructive);
/// ```
#[derive(Default)]
pub struct MountOptions {
	/// Selector of the root element. Required.
	pub el: Option<String>,
	/// Initial data.
	pub data: Data,
	/// Called once, after the first render.
	pub mounted: Option<MountedCallback>,
	/// Re-render strategy for the application's whole life.
	pub strategy: RerenderStrategy,
}

impl MountOptions {
	/// Creates options targeting `el`.
	pub fn new(el: impl Into<String>) -> Self {
		Self {
			el: Some(el.into()),
			..Self::default()
		}
	}

	/// Creates options without a root selector.
	///
	/// Mounting these fails with [`MountError::MissingRoot`](crate::MountError::MissingRoot).
	pub fn empty() -> Self {
		Self::default()
	}

	/// Sets the root selector.
	pub fn el(mut self, el: impl Into<String>) -> Self {
		self.el = Some(el.into());
		self
	}

	/// Replaces the initial data.
	pub fn data(mut self, data: Data) -> Self {
		self.data = data;
		self
	}

	/// Adds one data property.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.data.insert(name, value);
		self
	}

	/// Sets the lifecycle callback run after the first render.
	pub fn mounted(mut self, callback: impl FnOnce(&App) + 'static) -> Self {
		self.mounted = Some(Box::new(callback));
		self
	}

	/// Sets the re-render strategy.
	pub fn strategy(mut self, strategy: RerenderStrategy) -> Self {
		self.strategy = strategy;
		self
	}
}

impl fmt::Debug for MountOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MountOptions")
			.field("el", &self.el)
			.field("data", &self.data)
			.field("mounted", &self.mounted.is_some())
			.field("strategy", &self.strategy)
			.finish()
	}
}

/// Serializable mount configuration.
///
/// # Example
///
/// ```ignore
/// let settings = MountSettings::from_toml(r##"
///     el = "#app"
///     strategy = "in_place"
///
///     [data]
///     name = "World"
///     fruits = ["apple", "pear"]
/// "##)?;
/// let app = App::mount(&document, settings.into())?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountSettings {
	/// Selector of the root element.
	pub el: Option<String>,
	/// Initial data.
	pub data: Data,
	/// Re-render strategy.
	pub strategy: RerenderStrategy,
}

impl MountSettings {
	/// Parses settings from TOML.
	pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Parses settings from JSON.
	pub fn from_json(source: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(source)?)
	}
}

impl From<MountSettings> for MountOptions {
	fn from(settings: MountSettings) -> Self {
		Self {
			el: settings.el,
			data: settings.data,
			mounted: None,
			strategy: settings.strategy,
		}
	}
}
