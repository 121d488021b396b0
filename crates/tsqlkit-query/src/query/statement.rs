//! Rendered statement.

use std::fmt;
use std::time::Duration;

use crate::backend::ParameterBinding;

/// SQL text and its positional parameter bindings.
///
/// Immutable once produced. The Nth placeholder in [`sql`](Self::sql) is the
/// Nth entry of [`params`](Self::params).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
	sql: String,
	params: Vec<ParameterBinding>,
	timeout: Option<Duration>,
}

impl Statement {
	pub(crate) fn new(
		sql: String,
		params: Vec<ParameterBinding>,
		timeout: Option<Duration>,
	) -> Self {
		Self {
			sql,
			params,
			timeout,
		}
	}

	/// Rendered SQL text
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Bindings in placeholder order
	pub fn params(&self) -> &[ParameterBinding] {
		&self.params
	}

	/// Command timeout requested on the builder
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	/// Split into text and bindings
	pub fn into_parts(self) -> (String, Vec<ParameterBinding>) {
		(self.sql, self.params)
	}
}

impl fmt::Display for Statement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.sql)
	}
}
