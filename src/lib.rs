//! # tsqlkit
//!
//! Parameterized SELECT statement rendering for SQL Server.
//!
//! This crate is the facade over the workspace members. Everything needed to
//! build and render a statement is re-exported at the top level; the member
//! crates stay available as modules for callers that want the full paths.
//!
//! ## Feature Flags
//!
//! - `with-chrono` - Date and time parameter values (via `chrono`)
//! - `with-uuid` - `uniqueidentifier` parameter values (via `uuid`)
//! - `with-rust_decimal` - `decimal` parameter values (via `rust_decimal`)
//! - `full` - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use tsqlkit::prelude::*;
//!
//! let foo = TableRef::named("dbo.Foo");
//! let bar = TableRef::named("dbo.Bar");
//!
//! let mut inner = Query::select(&bar);
//! inner.add_filter(bar.col("Blah").eq("x"));
//!
//! let mut stmt = Query::select(&foo);
//! stmt.add_filter(foo.col("FooID").in_subquery(inner, bar.col("SubFooID")));
//!
//! let built = stmt.render(false).unwrap();
//! assert_eq!(
//!     built.sql(),
//!     "SELECT * FROM [dbo].[Foo] AS [t0] WHERE ([t0].[FooID] IN \
//!      (SELECT [t1].[SubFooID] FROM [dbo].[Bar] AS [t1] WHERE ([t1].[Blah]=@p0)));"
//! );
//! assert_eq!(built.params()[0].name(), "@p0");
//! ```

/// Statement construction and rendering.
pub mod query {
	pub use tsqlkit_query::*;
}

/// Prelude module for convenient imports
pub mod prelude {
	pub use tsqlkit_query::prelude::*;
}

pub use prelude::*;
