//! Query statement builders
//!
//! - Query Select: [`SelectStatement`]
//! - Rendered output: [`Statement`]
//!
//! # Examples
//!
//! ```rust
//! use tsqlkit_query::prelude::*;
//!
//! let contact = TableRef::named("dbo.Contact");
//! let mut query = Query::select(&contact);
//! query
//!     .add_column(contact.col("LastName"))
//!     .add_filter(contact.col("Active").eq(true));
//!
//! let stmt = query.render(false).unwrap();
//! assert_eq!(stmt.params()[0].name(), "@p0");
//! ```

mod select;
mod statement;
mod traits;

pub use select::{Paging, SelectStatement};
pub use statement::Statement;
pub use traits::QueryStatementBuilder;

use crate::types::IntoTableRef;

/// Entry point for building statements
#[derive(Debug, Clone, Copy)]
pub struct Query;

impl Query {
	/// Start a SELECT statement reading from `root`
	pub fn select<T>(root: T) -> SelectStatement
	where
		T: IntoTableRef,
	{
		SelectStatement::new(root)
	}
}
