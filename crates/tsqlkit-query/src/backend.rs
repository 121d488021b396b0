//! SQL Backend implementation
//!
//! This module provides the SQL Server (T-SQL) generation backend together
//! with the per-pass state it threads through nested renders.

use crate::{
	config::RenderOptions,
	error::QueryResult,
	query::{SelectStatement, Statement},
};

mod alias;
mod context;
mod params;
mod sql_writer;
mod sqlserver;

pub use alias::AliasAllocator;
pub use context::RenderContext;
pub use params::{ParameterBinding, ParameterLedger};
pub use sql_writer::SqlWriter;
pub use sqlserver::SqlServerQueryBuilder;

/// Query builder trait for generating SQL from query statements
///
/// # Implementations
///
/// - [`SqlServerQueryBuilder`] - SQL Server backend
///
/// # Examples
///
/// ```rust
/// use tsqlkit_query::backend::{QueryBuilder, SqlServerQueryBuilder};
/// use tsqlkit_query::prelude::*;
///
/// let contact = TableRef::named("dbo.Contact");
/// let mut stmt = Query::select(&contact);
/// stmt.add_column(contact.col("LastName"))
///     .add_filter(contact.col("Active").eq(true));
///
/// let built = SqlServerQueryBuilder::new()
///     .build_select(&stmt, &RenderOptions::default())
///     .unwrap();
/// assert_eq!(
///     built.sql(),
///     "SELECT [t0].[LastName] FROM [dbo].[Contact] AS [t0] WHERE ([t0].[Active]=@p0);"
/// );
/// assert_eq!(built.params().len(), 1);
/// ```
pub trait QueryBuilder {
	/// Build SELECT statement
	///
	/// Generates SQL text and positional parameter bindings. Each call is an
	/// independent render pass.
	///
	/// # Arguments
	///
	/// * `stmt` - The SELECT statement to build
	/// * `options` - Layout of the generated text
	fn build_select(&self, stmt: &SelectStatement, options: &RenderOptions)
	-> QueryResult<Statement>;

	/// Escape an identifier (schema, table, column or alias name)
	fn escape_identifier(&self, ident: &str) -> String;

	/// Format the placeholder for a 0-based parameter position
	fn format_placeholder(&self, index: usize) -> String;
}
