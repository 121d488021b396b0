//! Positional parameter bindings.

use tracing::trace;

use crate::value::{Param, ParamType, Value};

/// One bound parameter of a rendered statement.
///
/// The binding at position N of a [`Statement`](crate::query::Statement)
/// always belongs to the Nth placeholder in its text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBinding {
	name: String,
	param_type: ParamType,
	value: Value,
	size: Option<usize>,
}

impl ParameterBinding {
	/// Placeholder name as it appears in the text (e.g. `@p0`)
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared type tag
	pub fn param_type(&self) -> ParamType {
		self.param_type
	}

	/// Bound value
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Size hint for the execution layer
	pub fn size(&self) -> Option<usize> {
		self.size
	}

	/// Take the bound value.
	pub fn into_value(self) -> Value {
		self.value
	}
}

/// Ordered list of bindings accumulated during a render pass.
#[derive(Debug, Default)]
pub struct ParameterLedger {
	bindings: Vec<ParameterBinding>,
}

impl ParameterLedger {
	/// Create an empty ledger.
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind `param` at the next position and return its placeholder.
	///
	/// # Arguments
	///
	/// * `param` - The parameter to bind
	/// * `format_fn` - Function to format the placeholder from its 0-based position
	pub fn bind<F>(&mut self, param: &Param, format_fn: F) -> String
	where
		F: FnOnce(usize) -> String,
	{
		let index = self.bindings.len();
		let name = format_fn(index);
		trace!(
			placeholder = %name,
			param_type = %param.param_type(),
			"bound parameter"
		);
		self.bindings.push(ParameterBinding {
			name: name.clone(),
			param_type: param.param_type(),
			value: param.value().clone(),
			size: param.size_hint(),
		});
		name
	}

	/// Number of bindings so far.
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// Returns true if nothing has been bound.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Consume the ledger and return the bindings in position order.
	pub fn finish(self) -> Vec<ParameterBinding> {
		self.bindings
	}
}
