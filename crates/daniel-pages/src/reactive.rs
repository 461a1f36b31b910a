//! Store - the reactive data object
//!
//! `Store` holds the application's [`Data`] and notifies subscribers whenever
//! a property is written.
//!
//! ## Key Features
//!
//! - **Single source of truth**: the rendered element is derived from the store
//!   and regenerated from it on every write.
//! - **Synchronous notification**: `set()` runs every subscriber before it
//!   returns. There is no batching and no deduplication; two writes mean two
//!   notifications.
//! - **No dependency tracking**: a write to any property notifies every
//!   subscriber, whatever the subscriber reads.
//! - **Cheap to clone**: clones share the same data and subscribers.
//!
//! ## Example
//!
//! ```ignore
//! use daniel_pages::{Data, Store};
//!
//! let store = Store::new(Data::new().with("count", 0));
//! store.subscribe(|name, value| println!("{} changed to {}", name, value));
//!
//! store.set("count", 1);
//! assert_eq!(store.get("count"), Some(Value::from(1)));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::{Data, Value};

type Subscriber = Rc<dyn Fn(&str, &Value)>;

struct StoreInner {
	data: RefCell<Data>,
	subscribers: RefCell<Vec<Subscriber>>,
}

/// Observable wrapper around a [`Data`] object.
///
/// `Store` is `Rc`-based and therefore confined to the thread that created it,
/// like the document it renders into.
#[derive(Clone)]
pub struct Store {
	inner: Rc<StoreInner>,
}

impl Store {
	/// Creates a store over the initial data.
	pub fn new(data: Data) -> Self {
		Self {
			inner: Rc::new(StoreInner {
				data: RefCell::new(data),
				subscribers: RefCell::new(Vec::new()),
			}),
		}
	}

	/// Current value of a property.
	pub fn get(&self, name: &str) -> Option<Value> {
		self.inner.data.borrow().get(name).cloned()
	}

	/// Passes a property to `f`.
	///
	/// The store is not borrowed while `f` runs, so `f` may read or write it.
	pub fn with<R>(&self, name: &str, f: impl FnOnce(Option<&Value>) -> R) -> R {
		let value = self.get(name);
		f(value.as_ref())
	}

	/// Returns `true` if the property exists.
	pub fn contains(&self, name: &str) -> bool {
		self.inner.data.borrow().contains(name)
	}

	/// Property names in insertion order.
	pub fn keys(&self) -> Vec<String> {
		self.inner.data.borrow().keys().map(str::to_string).collect()
	}

	/// Copy of the whole data object.
	pub fn snapshot(&self) -> Data {
		self.inner.data.borrow().clone()
	}

	/// Writes a property and notifies every subscriber before returning.
	///
	/// Names that were not part of the initial data are accepted and stored.
	pub fn set(&self, name: &str, value: impl Into<Value>) {
		let value = value.into();
		self.inner
			.data
			.borrow_mut()
			.insert(name, value.clone());
		self.notify(name, &value);
	}

	/// Modifies a property and notifies subscribers once.
	///
	/// `f` works on a copy of the current value and may read the store. The
	/// copy is written back when `f` returns. Does nothing (and notifies
	/// nobody) if the property does not exist.
	pub fn update<F>(&self, name: &str, f: F)
	where
		F: FnOnce(&mut Value),
	{
		let Some(mut value) = self.get(name) else {
			return;
		};
		f(&mut value);
		self.inner
			.data
			.borrow_mut()
			.insert(name, value.clone());
		self.notify(name, &value);
	}

	/// Registers a callback invoked after every write.
	pub fn subscribe(&self, subscriber: impl Fn(&str, &Value) + 'static) {
		self.inner
			.subscribers
			.borrow_mut()
			.push(Rc::new(subscriber));
	}

	/// Number of registered subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	fn notify(&self, name: &str, value: &Value) {
		// Subscribers may write again or subscribe while being notified.
		let subscribers: Vec<Subscriber> = self.inner.subscribers.borrow().clone();
		for subscriber in subscribers {
			subscriber(name, value);
		}
	}
}

impl fmt::Debug for Store {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("data", &self.inner.data.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}
