//! # tsqlkit-query
//!
//! A SELECT statement construction and rendering engine for SQL Server.
//!
//! Callers assemble a query as a tree of tables, joins, filters, projected
//! columns and ordering rules; the engine renders the tree into T-SQL text
//! plus an ordered list of typed parameter bindings. Literal values never
//! appear in the text.
//!
//! ## Features
//!
//! - **Bracket-quoted identifiers** - `[dbo].[Contact]`, with `]` escaped as `]]`
//! - **Positional placeholders** - `@p0`, `@p1`, ... numbered across the whole statement
//! - **Table aliases** - `t0`, `t1`, ... allocated per occurrence, continued through subqueries
//! - **Filter trees** - comparisons, IN lists, IN subqueries and nested AND/OR groups
//! - **Paging** - `OFFSET n ROWS FETCH NEXT m ROWS ONLY`
//! - **Compact or formatted output** - whitespace differs, tokens and parameters do not
//!
//! ## Architecture
//!
//! - [`value`]: Typed SQL values and parameter type tags
//! - [`types`]: Table, column, join, ordering and operator types
//! - [`expr`]: The [`Filter`] tree and [`Cond`] groups
//! - [`query`]: [`SelectStatement`] and the rendered [`Statement`]
//! - [`backend`]: [`SqlServerQueryBuilder`] and per-pass render state
//!
//! ## Quick Start
//!
//! ```rust
//! use tsqlkit_query::prelude::*;
//!
//! let contact = TableRef::named("dbo.Contact");
//! let mut stmt = Query::select(&contact);
//! stmt.add_column(contact.col("LastName"))
//!     .add_column(contact.col("FirstName"))
//!     .add_filter(contact.col("LastName").eq("Buchanan"))
//!     .add_filter(contact.col("FirstName").gt("a"));
//!
//! let built = stmt.render(false).unwrap();
//! assert_eq!(
//!     built.sql(),
//!     "SELECT [t0].[LastName],[t0].[FirstName] FROM [dbo].[Contact] AS [t0] \
//!      WHERE ([t0].[LastName]=@p0) AND ([t0].[FirstName]>@p1);"
//! );
//! assert_eq!(built.params().len(), 2);
//! ```
//!
//! ## Nested Groups
//!
//! ```rust
//! use tsqlkit_query::prelude::*;
//!
//! let contact = TableRef::named("dbo.Contact");
//! let mut stmt = Query::select(&contact);
//! stmt.add_filter(
//!     Cond::any()
//!         .add(contact.col("Role").eq("admin"))
//!         .add(Cond::all()
//!             .add(contact.col("Role").eq("editor"))
//!             .add(contact.col("Active").eq(true))),
//! );
//!
//! let built = stmt.render(false).unwrap();
//! assert!(built.sql().ends_with(
//!     "WHERE ([t0].[Role]=@p0) OR (([t0].[Role]=@p1) AND ([t0].[Active]=@p2));"
//! ));
//! ```

pub mod config;
pub mod error;

// Core modules
pub mod types;
pub mod value;

// Expression system
pub mod expr;

// Query builders
pub mod query;

// Backend implementation
pub mod backend;

/// Prelude module for convenient imports
///
/// ```rust
/// use tsqlkit_query::prelude::*;
/// ```
pub mod prelude {
	// Backend builder
	pub use crate::backend::{ParameterBinding, QueryBuilder, SqlServerQueryBuilder};
	// Configuration and errors
	pub use crate::config::RenderOptions;
	pub use crate::error::{QueryError, QueryResult};
	// Filter system
	pub use crate::expr::{Cond, Condition, Filter, IntoFilter};
	// Query builders
	pub use crate::query::{Paging, Query, QueryStatementBuilder, SelectStatement, Statement};
	// Type system
	pub use crate::types::{
		Aggregate, ColumnRef, CompareOper, IntoSelectColumn, IntoTableRef, JoinCondition,
		JoinSpec, JoinType, LogicalOper, MembershipOper, Order, OrderSpec, OrderTarget,
		SelectColumn, TableId, TableRef, TableSource,
	};
	// Value system
	pub use crate::value::{IntoParam, IntoValue, Param, ParamType, Value};
}

pub use prelude::*;
