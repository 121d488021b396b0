//! State shared by every nested render call of one pass.

use super::alias::AliasAllocator;
use super::params::{ParameterBinding, ParameterLedger};

/// Alias and parameter state threaded through one render pass.
///
/// A fresh context is created for each top-level render, so repeated renders
/// of the same statement restart at `t0` and `@p0`.
#[derive(Debug, Default)]
pub struct RenderContext {
	/// Table alias allocator
	pub aliases: AliasAllocator,
	/// Parameter bindings in placeholder order
	pub params: ParameterLedger,
}

impl RenderContext {
	/// Create a fresh context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Consume the context and return the bindings.
	pub fn into_params(self) -> Vec<ParameterBinding> {
		self.params.finish()
	}
}
