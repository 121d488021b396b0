//! Error types for statement construction and rendering.
//!
//! Every error is detected before any text is handed back to the caller:
//! a render pass either produces a complete [`Statement`](crate::query::Statement)
//! or one of these errors, never partial SQL.

use thiserror::Error;

/// Errors that can occur while building or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	/// Paging was requested on a statement without any ORDER BY entries.
	#[error("OFFSET/FETCH paging requires at least one ORDER BY entry")]
	PagingWithoutOrder,

	/// A list membership filter was given no values.
	#[error("IN list for column {column} must contain at least one value")]
	EmptyMembershipSet {
		/// Column the membership test was built for.
		column: String,
	},

	/// A textual tag did not name a known enumeration value.
	#[error("invalid {kind} tag: {value:?}")]
	InvalidTag {
		/// Enumeration the tag was parsed as (e.g. `aggregate`).
		kind: &'static str,
		/// The rejected input.
		value: String,
	},

	/// A column or join references a table occurrence that is not in scope.
	#[error("{reference} references a table that is not part of this statement")]
	UnknownTable {
		/// Description of the unresolved reference (e.g. a column name).
		reference: String,
	},

	/// Two table occurrences would share one correlation name.
	#[error("table alias {alias} is already in use")]
	DuplicateAlias {
		/// The repeated alias.
		alias: String,
	},

	/// A join introduces an occurrence the statement already contains.
	#[error("table {table} is already part of this statement; join a new_occurrence() instead")]
	TableAlreadyInScope {
		/// Display name of the joined table.
		table: String,
	},

	/// A non-cross join was declared without any ON conditions.
	#[error("join to {table} has no ON conditions")]
	MissingJoinCondition {
		/// Display name of the joined table.
		table: String,
	},

	/// A cross join was given ON conditions.
	#[error("cross join to {table} cannot have ON conditions")]
	CrossJoinCondition {
		/// Display name of the joined table.
		table: String,
	},

	/// A comparison operator that needs a value was built without one.
	#[error("operator {oper} on column {column} requires a value")]
	MissingValue {
		/// Column of the comparison.
		column: String,
		/// Operator that required the value.
		oper: &'static str,
	},

	/// An identifier (table, column, or alias name) was empty.
	#[error("identifiers must not be empty")]
	EmptyIdentifier,
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
