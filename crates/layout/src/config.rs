//! Layout configuration.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! debounce-ms = 200
//! edge-padding = 4
//!
//! [insets]
//! top = 10
//! right = 10
//! bottom = 10
//! left = 10
//! ```

use std::time::Duration;

use billow_primitives::Insets;
use serde::Deserialize;

use crate::debounce::DEFAULT_RELAYOUT_DEBOUNCE;
use crate::error::ConfigError;
use crate::spacing::{DEFAULT_FLAT_GAP, DEFAULT_STACKED_GAP, DEFAULT_TOP_PADDING, SpacingRule};

/// Default distance kept free between the last column and the trailing edge.
pub const DEFAULT_EDGE_PADDING: i32 = 4;

/// Tunables for one balloon layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LayoutConfig {
	/// Fixed margins removed from the container before packing.
	pub insets: Insets,
	/// Quiet interval for deferred relayout, in milliseconds.
	pub debounce_ms: u64,
	pub edge_padding: i32,
	pub top_padding: i32,
	pub stacked_gap: i32,
	pub flat_gap: i32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			insets: Insets::ZERO,
			debounce_ms: DEFAULT_RELAYOUT_DEBOUNCE.as_millis() as u64,
			edge_padding: DEFAULT_EDGE_PADDING,
			top_padding: DEFAULT_TOP_PADDING,
			stacked_gap: DEFAULT_STACKED_GAP,
			flat_gap: DEFAULT_FLAT_GAP,
		}
	}
}

impl LayoutConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Sets the container insets.
	#[must_use]
	pub fn with_insets(mut self, insets: Insets) -> Self {
		self.insets = insets;
		self
	}

	/// Sets the debounce quiet interval.
	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce_ms = debounce.as_millis() as u64;
		self
	}

	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	pub fn spacing(&self) -> SpacingRule {
		SpacingRule {
			top_padding: self.top_padding,
			stacked_gap: self.stacked_gap,
			flat_gap: self.flat_gap,
		}
	}

	/// Rejects negative margins and a zero debounce.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if !self.insets.is_non_negative() {
			return Err(ConfigError::Invalid(format!("insets must not be negative: {:?}", self.insets)));
		}
		if self.debounce_ms == 0 {
			return Err(ConfigError::Invalid("debounce-ms must be positive".into()));
		}
		for (name, value) in [
			("edge-padding", self.edge_padding),
			("top-padding", self.top_padding),
			("stacked-gap", self.stacked_gap),
			("flat-gap", self.flat_gap),
		] {
			if value < 0 {
				return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
			}
		}
		Ok(())
	}
}
