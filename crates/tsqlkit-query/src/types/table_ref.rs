//! Table reference types for SQL queries.
//!
//! This module provides types for referencing tables:
//!
//! - [`TableId`]: Identity of one table occurrence
//! - [`TableSource`]: What a table occurrence reads from (named table or subquery)
//! - [`TableRef`]: A table occurrence placed in a statement
//! - [`IntoTableRef`]: Conversion trait for table references

use std::sync::atomic::{AtomicU64, Ordering};

use super::column_ref::ColumnRef;
use crate::query::SelectStatement;

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a table occurrence.
///
/// Columns and filters point at a table through its identity; the alias
/// the identity stands for is only decided during a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
	fn next() -> Self {
		Self(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// What a table occurrence reads rows from.
#[derive(Debug, Clone)]
pub enum TableSource {
	/// A physical table, optionally schema-qualified (e.g. `dbo.Contact`)
	Named {
		/// Owning schema
		schema: Option<String>,
		/// Table name
		name: String,
	},
	/// An embedded SELECT statement (e.g. `(SELECT ...) AS [t1]`)
	SubQuery(Box<SelectStatement>),
}

/// A table occurrence in a SQL statement.
///
/// Cloning a `TableRef` keeps its identity, so the clone denotes the same
/// occurrence. Use [`TableRef::new_occurrence`] to reference the same source
/// a second time, as in a self-join.
///
/// # Example
///
/// ```rust
/// use tsqlkit_query::TableRef;
///
/// let contact = TableRef::named("dbo.Contact");
/// let same = contact.clone();
/// let other = contact.new_occurrence();
/// assert_eq!(contact.id(), same.id());
/// assert_ne!(contact.id(), other.id());
/// ```
#[derive(Debug, Clone)]
pub struct TableRef {
	id: TableId,
	source: TableSource,
	alias: Option<String>,
}

impl TableRef {
	fn from_source(source: TableSource) -> Self {
		Self {
			id: TableId::next(),
			source,
			alias: None,
		}
	}

	/// Create a table reference from a possibly schema-qualified name.
	///
	/// The name is split on its first `.`: `"dbo.Contact"` becomes schema
	/// `dbo`, table `Contact`; `"Contact"` has no schema.
	pub fn named(name: &str) -> Self {
		match name.split_once('.') {
			Some((schema, table)) => Self::schema_table(schema, table),
			None => Self::table(name),
		}
	}

	/// Create an unqualified table reference.
	pub fn table<T: Into<String>>(table: T) -> Self {
		Self::from_source(TableSource::Named {
			schema: None,
			name: table.into(),
		})
	}

	/// Create a schema-qualified table reference.
	///
	/// # Example
	///
	/// ```rust
	/// use tsqlkit_query::TableRef;
	///
	/// let table = TableRef::schema_table("dbo", "Contact");
	/// assert_eq!(table.display_name(), "dbo.Contact");
	/// ```
	pub fn schema_table<S: Into<String>, T: Into<String>>(schema: S, table: T) -> Self {
		Self::from_source(TableSource::Named {
			schema: Some(schema.into()),
			name: table.into(),
		})
	}

	/// Create a derived table from an embedded statement.
	pub fn subquery(query: SelectStatement) -> Self {
		Self::from_source(TableSource::SubQuery(Box::new(query)))
	}

	/// Override the allocated alias with an explicit one.
	#[must_use]
	pub fn alias<A: Into<String>>(mut self, alias: A) -> Self {
		self.alias = Some(alias.into());
		self
	}

	/// A fresh occurrence of the same source, with its own identity and
	/// without the explicit alias.
	#[must_use]
	pub fn new_occurrence(&self) -> Self {
		Self::from_source(self.source.clone())
	}

	/// Reference a column of this occurrence.
	pub fn col<C: Into<String>>(&self, column: C) -> ColumnRef {
		ColumnRef::new(self, column)
	}

	/// Returns the identity of this occurrence.
	pub fn id(&self) -> TableId {
		self.id
	}

	/// Returns the source this occurrence reads from.
	pub fn source(&self) -> &TableSource {
		&self.source
	}

	/// Returns the explicit alias, if one was set.
	pub fn explicit_alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}

	/// Human-readable name used in diagnostics.
	pub fn display_name(&self) -> String {
		match &self.source {
			TableSource::Named {
				schema: Some(schema),
				name,
			} => format!("{}.{}", schema, name),
			TableSource::Named { schema: None, name } => name.clone(),
			TableSource::SubQuery(_) => "(subquery)".to_string(),
		}
	}
}

/// Conversion trait for table references.
///
/// This trait allows various types to be converted into `TableRef`.
pub trait IntoTableRef {
	/// Convert this type into a `TableRef`.
	fn into_table_ref(self) -> TableRef;
}

impl IntoTableRef for TableRef {
	fn into_table_ref(self) -> TableRef {
		self
	}
}

impl IntoTableRef for &TableRef {
	fn into_table_ref(self) -> TableRef {
		self.clone()
	}
}

impl IntoTableRef for &str {
	fn into_table_ref(self) -> TableRef {
		TableRef::named(self)
	}
}

impl IntoTableRef for String {
	fn into_table_ref(self) -> TableRef {
		TableRef::named(&self)
	}
}

impl IntoTableRef for (&str, &str) {
	fn into_table_ref(self) -> TableRef {
		TableRef::schema_table(self.0, self.1)
	}
}

impl IntoTableRef for SelectStatement {
	fn into_table_ref(self) -> TableRef {
		TableRef::subquery(self)
	}
}
