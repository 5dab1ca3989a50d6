use thiserror::Error;

/// Errors from layout coordinator operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
	/// The balloon is already in this layout's sequence.
	#[error("balloon is already tracked by this layout")]
	AlreadyTracked,
}

/// Errors from loading a [`crate::LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to parse layout config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid layout config: {0}")]
	Invalid(String),
}

/// Result type for coordinator operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
