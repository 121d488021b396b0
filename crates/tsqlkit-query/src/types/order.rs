//! ORDER BY types.

use std::fmt;
use std::str::FromStr;

use super::column_ref::ColumnRef;
use crate::error::QueryError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
	/// Ascending (ASC)
	#[default]
	Asc,
	/// Descending (DESC)
	Desc,
}

impl Order {
	/// Returns the SQL keyword.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Order {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Asc),
			"desc" | "descending" => Ok(Self::Desc),
			_ => Err(QueryError::InvalidTag {
				kind: "sort direction",
				value: s.to_string(),
			}),
		}
	}
}

/// What an ORDER BY entry sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderTarget {
	/// An output column name, rendered unqualified (e.g. `[LastName]`)
	Output(String),
	/// A table-qualified column (e.g. `[t0].[LastName]`)
	Column(ColumnRef),
}

impl From<&str> for OrderTarget {
	fn from(name: &str) -> Self {
		Self::Output(name.to_string())
	}
}

impl From<String> for OrderTarget {
	fn from(name: String) -> Self {
		Self::Output(name)
	}
}

impl From<ColumnRef> for OrderTarget {
	fn from(column: ColumnRef) -> Self {
		Self::Column(column)
	}
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
	/// Sort key
	pub target: OrderTarget,
	/// Sort direction
	pub order: Order,
}

impl OrderSpec {
	/// Create an ORDER BY entry.
	pub fn new<T: Into<OrderTarget>>(target: T, order: Order) -> Self {
		Self {
			target: target.into(),
			order,
		}
	}
}
