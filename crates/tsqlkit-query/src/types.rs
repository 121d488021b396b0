//! Type definitions for table references, column references, joins, and ordering.
//!
//! This module provides the node types a statement tree is built from:
//!
//! - [`TableRef`]: A table occurrence (named table or embedded statement)
//! - [`ColumnRef`]: A column of a table occurrence
//! - [`SelectColumn`]: A projected column with optional [`Aggregate`] and output alias
//! - [`JoinSpec`]: A join of a new table occurrence with its ON conditions
//! - [`OrderSpec`]: An ORDER BY entry
//! - Operators: [`CompareOper`], [`LogicalOper`], [`MembershipOper`]

mod column_ref;
mod join;
mod operators;
mod order;
mod table_ref;

pub use column_ref::{Aggregate, ColumnRef, IntoSelectColumn, SelectColumn};
pub use join::{JoinCondition, JoinSpec, JoinType};
pub use operators::{CompareOper, LogicalOper, MembershipOper};
pub use order::{Order, OrderSpec, OrderTarget};
pub use table_ref::{IntoTableRef, TableId, TableRef, TableSource};
