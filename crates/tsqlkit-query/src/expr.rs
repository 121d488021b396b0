//! Filter expressions for WHERE clauses and join conditions.
//!
//! - [`Filter`]: Comparison, list membership, subquery membership, or group
//! - [`Condition`] / [`Cond`]: AND/OR groups of filters
//! - [`IntoFilter`]: Conversion trait accepted by statement builders

mod condition;
mod filter;

pub use condition::{Cond, Condition};
pub use filter::{Filter, IntoFilter};
