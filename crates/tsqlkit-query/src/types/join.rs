//! JOIN types.

use std::fmt;
use std::str::FromStr;

use super::column_ref::ColumnRef;
use super::table_ref::{TableId, TableRef};
use crate::error::QueryError;
use crate::expr::{Filter, IntoFilter};

/// Join kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
	/// INNER JOIN
	Inner,
	/// LEFT JOIN
	Left,
	/// RIGHT JOIN
	Right,
	/// CROSS JOIN
	Cross,
}

impl JoinType {
	/// Returns the SQL keyword pair.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Inner => "INNER JOIN",
			Self::Left => "LEFT JOIN",
			Self::Right => "RIGHT JOIN",
			Self::Cross => "CROSS JOIN",
		}
	}
}

impl fmt::Display for JoinType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for JoinType {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"inner" => Ok(Self::Inner),
			"left" => Ok(Self::Left),
			"right" => Ok(Self::Right),
			"cross" => Ok(Self::Cross),
			_ => Err(QueryError::InvalidTag {
				kind: "join kind",
				value: s.to_string(),
			}),
		}
	}
}

/// One ON condition of a join.
#[derive(Debug, Clone)]
pub enum JoinCondition {
	/// Column-to-column equality; binds no parameters
	Columns(ColumnRef, ColumnRef),
	/// Any filter; value comparisons consume placeholders
	Filter(Filter),
}

/// A join of a newly introduced table onto the statement.
///
/// # Example
///
/// ```rust
/// use tsqlkit_query::prelude::*;
///
/// let foo = TableRef::named("dbo.Foo");
/// let bar = TableRef::named("dbo.Bar");
/// let join = JoinSpec::new(JoinType::Inner, &foo, &bar)
///     .on(foo.col("BarID"), bar.col("BarID"));
/// assert_eq!(join.conditions().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct JoinSpec {
	kind: JoinType,
	left: TableId,
	right: TableRef,
	conditions: Vec<JoinCondition>,
}

impl JoinSpec {
	/// Join `right` onto the occurrence `left`.
	pub fn new(kind: JoinType, left: &TableRef, right: &TableRef) -> Self {
		Self {
			kind,
			left: left.id(),
			right: right.clone(),
			conditions: Vec::new(),
		}
	}

	pub(crate) fn from_parts(kind: JoinType, left: TableId, right: TableRef) -> Self {
		Self {
			kind,
			left,
			right,
			conditions: Vec::new(),
		}
	}

	/// Add a column-to-column equality.
	#[must_use]
	pub fn on(mut self, left: ColumnRef, right: ColumnRef) -> Self {
		self.conditions.push(JoinCondition::Columns(left, right));
		self
	}

	/// Add an equality between same-named or differently named columns of
	/// the left and right occurrences.
	#[must_use]
	pub fn on_columns<L: Into<String>, R: Into<String>>(self, left: L, right: R) -> Self {
		let left_col = ColumnRef::new_for(self.left, left);
		let right_col = self.right.col(right);
		self.on(left_col, right_col)
	}

	/// Add a filter condition.
	#[must_use]
	pub fn on_filter<F: IntoFilter>(mut self, filter: F) -> Self {
		self.conditions.push(JoinCondition::Filter(filter.into_filter()));
		self
	}

	/// Returns the join kind.
	pub fn kind(&self) -> JoinType {
		self.kind
	}

	/// Returns the identity of the left occurrence.
	pub fn left(&self) -> TableId {
		self.left
	}

	/// Returns the joined table.
	pub fn right(&self) -> &TableRef {
		&self.right
	}

	/// Returns the ON conditions in declaration order.
	pub fn conditions(&self) -> &[JoinCondition] {
		&self.conditions
	}
}
