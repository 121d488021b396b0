//! SQL operators for filters.
//!
//! This module provides operators used in filter predicates:
//!
//! - [`CompareOper`]: Column-to-value comparisons and null tests
//! - [`LogicalOper`]: Operators for chaining filters in a group
//! - [`MembershipOper`]: Polarity of `IN` membership tests
//!
//! Every operator parses from a textual tag via [`FromStr`]; unknown tags are
//! rejected with [`QueryError::InvalidTag`].

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOper {
	/// Equal (=)
	Equal,
	/// Not equal (<>)
	NotEqual,
	/// Less than (<)
	SmallerThan,
	/// Less than or equal (<=)
	SmallerThanOrEqual,
	/// Greater than (>)
	GreaterThan,
	/// Greater than or equal (>=)
	GreaterThanOrEqual,
	/// LIKE
	Like,
	/// NOT LIKE
	NotLike,
	/// IS NULL
	IsNull,
	/// IS NOT NULL
	IsNotNull,
}

impl CompareOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
			Self::IsNull => "IS NULL",
			Self::IsNotNull => "IS NOT NULL",
		}
	}

	/// Null tests take no operand and consume no placeholder.
	#[must_use]
	pub fn is_null_test(&self) -> bool {
		matches!(self, Self::IsNull | Self::IsNotNull)
	}

	/// Keyword operators are separated from their operands by spaces.
	#[must_use]
	pub fn is_keyword(&self) -> bool {
		matches!(
			self,
			Self::Like | Self::NotLike | Self::IsNull | Self::IsNotNull
		)
	}
}

impl fmt::Display for CompareOper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CompareOper {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.split_whitespace().collect::<Vec<_>>().join(" ");
		match tag.to_ascii_lowercase().as_str() {
			"=" | "==" | "eq" => Ok(Self::Equal),
			"<>" | "!=" | "ne" => Ok(Self::NotEqual),
			"<" | "lt" => Ok(Self::SmallerThan),
			"<=" | "le" | "lte" => Ok(Self::SmallerThanOrEqual),
			">" | "gt" => Ok(Self::GreaterThan),
			">=" | "ge" | "gte" => Ok(Self::GreaterThanOrEqual),
			"like" => Ok(Self::Like),
			"not like" => Ok(Self::NotLike),
			"is null" => Ok(Self::IsNull),
			"is not null" => Ok(Self::IsNotNull),
			_ => Err(QueryError::InvalidTag {
				kind: "comparison operator",
				value: s.to_string(),
			}),
		}
	}
}

/// Logical operators for chaining filters inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOper {
	/// All children must hold (AND)
	#[default]
	And,
	/// Any child must hold (OR)
	Or,
}

impl LogicalOper {
	/// Returns the SQL keyword.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
		}
	}

	/// Predicate that is the identity of this operator: true for AND, false for OR.
	#[must_use]
	pub fn identity_predicate(&self) -> &'static str {
		match self {
			Self::And => "1=1",
			Self::Or => "1=0",
		}
	}
}

impl fmt::Display for LogicalOper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for LogicalOper {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"and" | "all" => Ok(Self::And),
			"or" | "any" => Ok(Self::Or),
			_ => Err(QueryError::InvalidTag {
				kind: "logical operator",
				value: s.to_string(),
			}),
		}
	}
}

/// Polarity of a membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MembershipOper {
	/// IN
	#[default]
	In,
	/// NOT IN
	NotIn,
}

impl MembershipOper {
	/// Returns the SQL keyword.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::In => "IN",
			Self::NotIn => "NOT IN",
		}
	}
}

impl fmt::Display for MembershipOper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for MembershipOper {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let tag = s.split_whitespace().collect::<Vec<_>>().join(" ");
		match tag.to_ascii_lowercase().as_str() {
			"in" => Ok(Self::In),
			"not in" => Ok(Self::NotIn),
			_ => Err(QueryError::InvalidTag {
				kind: "membership operator",
				value: s.to_string(),
			}),
		}
	}
}
