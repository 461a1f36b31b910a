//! Error types for mounting and configuration.

use daniel_dom::DomError;
use thiserror::Error;

/// Why an application could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
	/// No `el` selector was given.
	#[error("daniel needs to have an el-variable")]
	MissingRoot,
	/// The selector matched no element.
	#[error("no element matches root selector `{0}`")]
	RootNotFound(String),
	/// The selector could not be parsed.
	#[error(transparent)]
	InvalidSelector(#[from] DomError),
}

/// Why a settings file could not be loaded.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Malformed TOML.
	#[error("invalid TOML settings: {0}")]
	Toml(#[from] toml::de::Error),
	/// Malformed JSON.
	#[error("invalid JSON settings: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias for mounting.
pub type MountResult<T> = Result<T, MountError>;
