//! Logging abstraction layer for daniel-pages
//!
//! Diagnostics (missing root, malformed `d-for`, unresolved collections, ...)
//! are written through these macros so they land in the right sink on every
//! target.
//!
//! ## Macro Overview
//!
//! | Macro | WASM | Non-WASM |
//! |-------|------|----------|
//! | `debug_log!` | `console.debug` (`debug-hooks` + `debug_assertions`) | `tracing::debug!` (`debug-hooks`) |
//! | `info_log!` | `console.info` (`debug_assertions`) | `tracing::info!` |
//! | `warn_log!` | `console.warn` (`debug_assertions`) | `tracing::warn!` |
//! | `error_log!` | `console.error` (`debug_assertions`) | `tracing::error!` |
//!
//! On WASM the console macros compile to no-ops in release builds. On native
//! targets filtering is left to the installed `tracing` subscriber and its
//! compile time level filters.
//!
//! ## Example
//!
//! ```ignore
//! use daniel_pages::{info_log, warn_log};
//!
//! info_log!("mounted {}", selector);
//! warn_log!("Error handling d-for statement: {}", error);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature)
#[macro_export]
#[cfg(all(feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!(target: "daniel", $($arg)*);
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(any(
	not(feature = "debug-hooks"),
	all(not(debug_assertions), target_arch = "wasm32")
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
///
/// # Example
///
/// ```ignore
/// info_log!("You are running daniel v{}", daniel_pages::VERSION);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!(target: "daniel", $($arg)*);
	}};
}

/// No-op info_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message
///
/// Used for every fail-soft template problem: the offending node is left
/// as it is and rendering continues.
///
/// # Example
///
/// ```ignore
/// warn_log!("{} not found", collection);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!(target: "daniel", $($arg)*);
	}};
}

/// No-op warn_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("daniel needs to have an el-variable");
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!(target: "daniel", $($arg)*);
	}};
}

/// No-op error_log in WASM release builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
