//! Logical groups of filters.
//!
//! This module provides [`Condition`] and [`Cond`] for building nested
//! AND/OR groups.

use super::filter::{Filter, IntoFilter};
use crate::types::LogicalOper;

/// A logical group of child filters.
///
/// # Example
///
/// ```rust
/// use tsqlkit_query::prelude::*;
///
/// let contact = TableRef::named("dbo.Contact");
///
/// // Nested conditions
/// let cond = Cond::all()
///     .add(contact.col("Active").eq(true))
///     .add(Cond::any()
///         .add(contact.col("Role").eq("admin"))
///         .add(contact.col("Role").eq("moderator")));
/// assert_eq!(cond.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Condition {
	/// How the children are chained (AND or OR)
	pub logic: LogicalOper,
	/// Whether to negate the entire group
	pub negate: bool,
	/// The children in this group
	pub filters: Vec<Filter>,
}

impl Condition {
	/// Create a new empty group with the specified logic.
	pub fn new(logic: LogicalOper) -> Self {
		Self {
			logic,
			negate: false,
			filters: Vec::new(),
		}
	}

	/// Create a new group that requires all children (AND).
	pub fn all() -> Self {
		Self::new(LogicalOper::And)
	}

	/// Create a new group that requires any child (OR).
	pub fn any() -> Self {
		Self::new(LogicalOper::Or)
	}

	/// Add a child filter.
	#[must_use]
	// Intentional builder-pattern method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add<F>(mut self, filter: F) -> Self
	where
		F: IntoFilter,
	{
		self.filters.push(filter.into_filter());
		self
	}

	/// Add a child only if the option is Some.
	#[must_use]
	pub fn add_option<F>(self, filter: Option<F>) -> Self
	where
		F: IntoFilter,
	{
		if let Some(f) = filter {
			self.add(f)
		} else {
			self
		}
	}

	/// Negate the entire group.
	#[must_use]
	// Intentional builder-pattern method, not std::ops::Not
	#[allow(clippy::should_implement_trait)]
	pub fn not(mut self) -> Self {
		self.negate = !self.negate;
		self
	}

	/// Returns true if this group has no children.
	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Returns the number of children.
	pub fn len(&self) -> usize {
		self.filters.len()
	}
}

/// Helper for creating groups.
///
/// This is a convenience wrapper around [`Condition`].
pub struct Cond;

impl Cond {
	/// Create a group that requires all children (AND).
	pub fn all() -> Condition {
		Condition::all()
	}

	/// Create a group that requires any child (OR).
	pub fn any() -> Condition {
		Condition::any()
	}
}

impl IntoFilter for Condition {
	fn into_filter(self) -> Filter {
		Filter::Group(self)
	}
}
