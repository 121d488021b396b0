//! Render configuration.
//!
//! [`RenderOptions`] controls whitespace only. Toggling any option never
//! changes aliasing, parameter order, or the tokens of the rendered text.

use serde::{Deserialize, Serialize};

/// Options for a single render pass.
///
/// Hosts can embed this in their own settings and deserialize it:
///
/// ```rust
/// use tsqlkit_query::RenderOptions;
///
/// let options: RenderOptions = serde_json::from_str(r#"{"formatted": true}"#).unwrap();
/// assert!(options.is_formatted());
/// assert_eq!(options.indent(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	formatted: bool,
	indent_width: usize,
}

impl RenderOptions {
	/// Default indentation used for nested statements in formatted output.
	pub const DEFAULT_INDENT_WIDTH: usize = 4;

	/// Compact single-line output.
	pub fn compact() -> Self {
		Self::default()
	}

	/// Multi-line output with one clause per line.
	pub fn pretty() -> Self {
		Self::default().formatted(true)
	}

	/// Enable or disable multi-line output.
	#[must_use]
	pub fn formatted(mut self, formatted: bool) -> Self {
		self.formatted = formatted;
		self
	}

	/// Set the number of spaces per nesting level in formatted output.
	#[must_use]
	pub fn indent_width(mut self, width: usize) -> Self {
		self.indent_width = width;
		self
	}

	/// Whether clause boundaries emit newlines.
	pub fn is_formatted(&self) -> bool {
		self.formatted
	}

	/// Returns the number of spaces per nesting level.
	pub fn indent(&self) -> usize {
		self.indent_width
	}
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			formatted: false,
			indent_width: Self::DEFAULT_INDENT_WIDTH,
		}
	}
}
