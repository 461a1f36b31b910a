//! Data values bound into templates.
//!
//! The data object is flat: every property is a string, a number, a boolean
//! or a list of those. Nested objects are not supported and are rejected when
//! data is deserialized.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// `true` / `false`
	Bool(bool),
	/// Any number. Integral values display without a fractional part.
	Number(f64),
	/// Text
	String(String),
	/// A list, the only kind of value `d-for` iterates.
	List(Vec<Value>),
}

impl Value {
	/// Returns the items if this value is a list.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Short name of the value's kind, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "boolean",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::List(_) => "list",
		}
	}
}

/// Renders the value the way it appears in page text: `1` rather than `1.0`,
/// lists joined with `,`.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(value) => write!(f, "{}", value),
			Self::Number(value) => fmt_number(*value, f),
			Self::String(value) => f.write_str(value),
			Self::List(items) => {
				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						f.write_str(",")?;
					}
					write!(f, "{}", item)?;
				}
				Ok(())
			}
		}
	}
}

fn fmt_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if value.is_nan() {
		f.write_str("NaN")
	} else if value.is_infinite() {
		f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
	} else if value.fract() == 0.0 && value.abs() < 1e15 {
		write!(f, "{}", value as i64)
	} else {
		write!(f, "{}", value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// The flat data object an application renders from.
///
/// Properties keep their insertion order.
///
/// # Example
///
/// ```ignore
/// let data = Data::new()
///     .with("title", "Groceries")
///     .with("items", vec!["milk", "eggs"]);
/// assert_eq!(data.get("title"), Some(&Value::from("Groceries")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data(IndexMap<String, Value>);

impl Data {
	/// Creates an empty data object.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts or replaces a property, returning the previous value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(name.into(), value.into())
	}

	/// Looks a property up.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Returns `true` if the property exists.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Property names in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when there are no properties.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Parses a data object from JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}
