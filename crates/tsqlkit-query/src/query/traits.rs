//! Query statement traits
//!
//! This module defines the core trait for building SQL statements.

use std::fmt::Debug;

use super::statement::Statement;
use crate::{backend::QueryBuilder, config::RenderOptions, error::QueryResult};

/// Trait for building query statements
///
/// This trait provides methods to build SQL statements for a database
/// backend and collect query parameters.
pub trait QueryStatementBuilder: Debug {
	/// Build SQL statement for a database backend and collect query parameters
	///
	/// # Examples
	///
	/// ```rust
	/// use tsqlkit_query::backend::SqlServerQueryBuilder;
	/// use tsqlkit_query::prelude::*;
	///
	/// let contact = TableRef::named("dbo.Contact");
	/// let mut query = Query::select(&contact);
	/// query.add_column(contact.col("LastName"));
	///
	/// let stmt = query
	///     .build_any(&SqlServerQueryBuilder, &RenderOptions::default())
	///     .unwrap();
	/// assert_eq!(stmt.sql(), "SELECT [t0].[LastName] FROM [dbo].[Contact] AS [t0];");
	/// ```
	fn build_any(
		&self,
		query_builder: &dyn QueryBuilder,
		options: &RenderOptions,
	) -> QueryResult<Statement>;

	/// Build SQL statement with parameter collection
	///
	/// This is a convenience method that wraps `build_any()` with a concrete
	/// query builder type.
	fn build<T: QueryBuilder>(
		&self,
		query_builder: T,
		options: &RenderOptions,
	) -> QueryResult<Statement> {
		self.build_any(&query_builder, options)
	}

	/// Build SQL text only, discarding the bindings
	///
	/// Suitable for inspection and debugging.
	fn to_sql<T: QueryBuilder>(&self, query_builder: T) -> QueryResult<String> {
		self.build(query_builder, &RenderOptions::default())
			.map(|stmt| stmt.into_parts().0)
	}
}
