//! Platform abstraction for the few host services the engine needs.

/// Milliseconds since the Unix epoch, used to time the first render.
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> f64 {
	js_sys::Date::now()
}

/// Milliseconds since the Unix epoch, used to time the first render.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> f64 {
	use std::time::{SystemTime, UNIX_EPOCH};

	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_secs_f64() * 1000.0)
		.unwrap_or_default()
}
