//! Column reference types for SQL queries.
//!
//! This module provides types for referencing columns:
//!
//! - [`ColumnRef`]: A column of one table occurrence
//! - [`SelectColumn`]: A projected column with optional aggregate and output alias
//! - [`Aggregate`]: Aggregate functions applicable to a projected column
//! - [`IntoSelectColumn`]: Conversion trait for projected columns

use std::fmt;
use std::str::FromStr;

use super::table_ref::{TableId, TableRef};
use crate::error::QueryError;

/// Reference to a column of a table occurrence.
///
/// The owning table is held by identity; it is qualified with whatever alias
/// that occurrence receives when the statement is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
	table: TableId,
	name: String,
}

impl ColumnRef {
	/// Create a column reference on the given table occurrence.
	///
	/// # Example
	///
	/// ```rust
	/// use tsqlkit_query::{ColumnRef, TableRef};
	///
	/// let contact = TableRef::named("dbo.Contact");
	/// let col = ColumnRef::new(&contact, "LastName");
	/// assert_eq!(col, contact.col("LastName"));
	/// ```
	pub fn new<C: Into<String>>(table: &TableRef, column: C) -> Self {
		Self {
			table: table.id(),
			name: column.into(),
		}
	}

	pub(crate) fn new_for<C: Into<String>>(table: TableId, column: C) -> Self {
		Self {
			table,
			name: column.into(),
		}
	}

	/// Returns the identity of the owning table occurrence.
	pub fn table_id(&self) -> TableId {
		self.table
	}

	/// Returns the column name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Project this column through an aggregate function.
	pub fn aggregate(self, aggregate: Aggregate) -> SelectColumn {
		SelectColumn::new(self).aggregate(aggregate)
	}

	/// Project this column under an output alias.
	pub fn alias<A: Into<String>>(self, alias: A) -> SelectColumn {
		SelectColumn::new(self).alias(alias)
	}
}

/// Aggregate function wrapped around a projected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
	/// `COUNT(...)`
	Count,
	/// `SUM(...)`
	Sum,
	/// `AVG(...)`
	Avg,
	/// `MIN(...)`
	Min,
	/// `MAX(...)`
	Max,
}

impl Aggregate {
	/// Returns the SQL function name.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Count => "COUNT",
			Self::Sum => "SUM",
			Self::Avg => "AVG",
			Self::Min => "MIN",
			Self::Max => "MAX",
		}
	}
}

impl fmt::Display for Aggregate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Aggregate {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"count" => Ok(Self::Count),
			"sum" => Ok(Self::Sum),
			"avg" | "average" => Ok(Self::Avg),
			"min" => Ok(Self::Min),
			"max" => Ok(Self::Max),
			_ => Err(QueryError::InvalidTag {
				kind: "aggregate",
				value: s.to_string(),
			}),
		}
	}
}

/// A column in the SELECT list.
///
/// The aggregate changes how the column is rendered, not which column it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectColumn {
	column: ColumnRef,
	aggregate: Option<Aggregate>,
	alias: Option<String>,
}

impl SelectColumn {
	/// Project a plain column.
	pub fn new(column: ColumnRef) -> Self {
		Self {
			column,
			aggregate: None,
			alias: None,
		}
	}

	/// Wrap the column in an aggregate function.
	#[must_use]
	pub fn aggregate(mut self, aggregate: Aggregate) -> Self {
		self.aggregate = Some(aggregate);
		self
	}

	/// Set the output alias.
	#[must_use]
	pub fn alias<A: Into<String>>(mut self, alias: A) -> Self {
		self.alias = Some(alias.into());
		self
	}

	/// Returns the projected column.
	pub fn column(&self) -> &ColumnRef {
		&self.column
	}

	/// Returns the aggregate function, if any.
	pub fn aggregate_fn(&self) -> Option<Aggregate> {
		self.aggregate
	}

	/// Returns the output alias, if any.
	pub fn output_alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}
}

/// Conversion trait for SELECT list entries.
pub trait IntoSelectColumn {
	/// Convert into a [`SelectColumn`].
	fn into_select_column(self) -> SelectColumn;
}

impl IntoSelectColumn for SelectColumn {
	fn into_select_column(self) -> SelectColumn {
		self
	}
}

impl IntoSelectColumn for ColumnRef {
	fn into_select_column(self) -> SelectColumn {
		SelectColumn::new(self)
	}
}
