//! Filter predicates.
//!
//! [`Filter`] is a closed sum type with one case per predicate kind. The
//! renderer matches on it exhaustively. Predicates are usually built through
//! the helper methods on [`ColumnRef`]:
//!
//! ```rust
//! use tsqlkit_query::prelude::*;
//!
//! let contact = TableRef::named("dbo.Contact");
//! let by_name = contact.col("LastName").eq("Buchanan");
//! let missing = contact.col("Email").is_null();
//! let some_ids = contact.col("ContactID").is_in([1, 2, 3]);
//! assert!(matches!(by_name, Filter::Compare { .. }));
//! assert!(matches!(missing, Filter::Compare { value: None, .. }));
//! assert!(matches!(some_ids, Filter::List { .. }));
//! ```

use super::condition::Condition;
use crate::query::SelectStatement;
use crate::types::{ColumnRef, CompareOper, MembershipOper};
use crate::value::{IntoParam, Param};

/// A predicate contributing to a WHERE clause or a join's ON conditions.
#[derive(Debug, Clone)]
pub enum Filter {
	/// `<column> <oper> <placeholder>`; null tests carry no value
	Compare {
		/// Compared column
		column: ColumnRef,
		/// Comparison operator
		oper: CompareOper,
		/// Bound operand; `None` for null tests
		value: Option<Param>,
	},
	/// `<column> [NOT] IN (<placeholder>, ...)`
	List {
		/// Tested column
		column: ColumnRef,
		/// Membership polarity
		oper: MembershipOper,
		/// Candidate values, bound in order
		values: Vec<Param>,
	},
	/// `<column> [NOT] IN (SELECT <inner column> FROM ...)`
	SubQuery {
		/// Outer column
		column: ColumnRef,
		/// Membership polarity
		oper: MembershipOper,
		/// Embedded statement
		query: Box<SelectStatement>,
		/// Column projected by the embedded statement
		inner_column: ColumnRef,
	},
	/// A logical group of child filters
	Group(Condition),
}

impl Filter {
	/// Build a comparison from an operator tag.
	///
	/// Null tests ignore `value`.
	pub fn compare<V: IntoParam>(column: ColumnRef, oper: CompareOper, value: V) -> Self {
		let value = if oper.is_null_test() {
			None
		} else {
			Some(value.into_param())
		};
		Self::Compare {
			column,
			oper,
			value,
		}
	}

	/// Build a list membership test.
	///
	/// An empty list is accepted here and rejected when the statement is
	/// rendered.
	pub fn list<I, V>(column: ColumnRef, oper: MembershipOper, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: IntoParam,
	{
		Self::List {
			column,
			oper,
			values: values.into_iter().map(IntoParam::into_param).collect(),
		}
	}

	/// Build a subquery membership test.
	pub fn subquery(
		column: ColumnRef,
		oper: MembershipOper,
		query: SelectStatement,
		inner_column: ColumnRef,
	) -> Self {
		Self::SubQuery {
			column,
			oper,
			query: Box::new(query),
			inner_column,
		}
	}
}

/// Trait for types that can be converted into a filter.
pub trait IntoFilter {
	/// Convert into a [`Filter`].
	fn into_filter(self) -> Filter;
}

impl IntoFilter for Filter {
	fn into_filter(self) -> Filter {
		self
	}
}

impl ColumnRef {
	fn predicate<V: IntoParam>(&self, oper: CompareOper, value: V) -> Filter {
		Filter::compare(self.clone(), oper, value)
	}

	/// `column = value`
	pub fn eq<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::Equal, value)
	}

	/// `column <> value`
	pub fn ne<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::NotEqual, value)
	}

	/// `column < value`
	pub fn lt<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::SmallerThan, value)
	}

	/// `column <= value`
	pub fn lte<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::SmallerThanOrEqual, value)
	}

	/// `column > value`
	pub fn gt<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::GreaterThan, value)
	}

	/// `column >= value`
	pub fn gte<V: IntoParam>(&self, value: V) -> Filter {
		self.predicate(CompareOper::GreaterThanOrEqual, value)
	}

	/// `column LIKE pattern`
	pub fn like<V: IntoParam>(&self, pattern: V) -> Filter {
		self.predicate(CompareOper::Like, pattern)
	}

	/// `column NOT LIKE pattern`
	pub fn not_like<V: IntoParam>(&self, pattern: V) -> Filter {
		self.predicate(CompareOper::NotLike, pattern)
	}

	/// `column IS NULL`
	pub fn is_null(&self) -> Filter {
		Filter::Compare {
			column: self.clone(),
			oper: CompareOper::IsNull,
			value: None,
		}
	}

	/// `column IS NOT NULL`
	pub fn is_not_null(&self) -> Filter {
		Filter::Compare {
			column: self.clone(),
			oper: CompareOper::IsNotNull,
			value: None,
		}
	}

	/// `column IN (values...)`
	pub fn is_in<I, V>(&self, values: I) -> Filter
	where
		I: IntoIterator<Item = V>,
		V: IntoParam,
	{
		Filter::list(self.clone(), MembershipOper::In, values)
	}

	/// `column NOT IN (values...)`
	pub fn is_not_in<I, V>(&self, values: I) -> Filter
	where
		I: IntoIterator<Item = V>,
		V: IntoParam,
	{
		Filter::list(self.clone(), MembershipOper::NotIn, values)
	}

	/// `column IN (SELECT inner_column FROM ...)`
	pub fn in_subquery(&self, query: SelectStatement, inner_column: ColumnRef) -> Filter {
		Filter::subquery(self.clone(), MembershipOper::In, query, inner_column)
	}

	/// `column NOT IN (SELECT inner_column FROM ...)`
	pub fn not_in_subquery(&self, query: SelectStatement, inner_column: ColumnRef) -> Filter {
		Filter::subquery(self.clone(), MembershipOper::NotIn, query, inner_column)
	}
}
