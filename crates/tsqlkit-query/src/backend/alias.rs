//! Table alias allocation for one render pass.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::error::{QueryError, QueryResult};
use crate::types::{TableId, TableRef};

/// Aliases bound inside one statement body.
#[derive(Debug, Default)]
struct Scope {
	bindings: HashMap<TableId, String>,
	names: HashSet<String>,
}

/// Assigns `t0`, `t1`, ... to table occurrences in first-encounter order.
///
/// Bindings live in lexical scopes: each embedded statement pushes a scope
/// and pops it when done, while the counter keeps running so numbering
/// continues across the whole pass. Lookups search innermost first, which
/// lets a correlated subquery reach the tables of its enclosing statements.
///
/// Explicit aliases share the namespace with generated ones. A generated
/// alias never repeats within the pass and skips any name claimed
/// explicitly; an explicit alias must not repeat a name already bound in its
/// own scope or a generated alias. Reusing an explicit alias in a nested
/// scope shadows the outer one, as SQL Server itself allows.
#[derive(Debug)]
pub struct AliasAllocator {
	next: usize,
	generated: HashSet<String>,
	claimed: HashSet<String>,
	scopes: Vec<Scope>,
}

impl AliasAllocator {
	/// Create an allocator with one open scope, starting at `t0`.
	pub fn new() -> Self {
		Self {
			next: 0,
			generated: HashSet::new(),
			claimed: HashSet::new(),
			scopes: vec![Scope::default()],
		}
	}

	/// Allocate an alias for `table` in the innermost scope.
	///
	/// An explicit alias on the table is used verbatim and does not consume
	/// a counter value. Allocating the same identity again inside a nested
	/// scope rebinds it there, so an embedded copy of a statement gets its
	/// own aliases.
	///
	/// # Errors
	///
	/// Returns [`QueryError::DuplicateAlias`] when an explicit alias is
	/// already bound in the innermost scope or was generated earlier in the
	/// pass.
	pub fn allocate(&mut self, table: &TableRef) -> QueryResult<String> {
		let alias = match table.explicit_alias() {
			Some(alias) => {
				let taken = self.generated.contains(alias)
					|| self
						.scopes
						.last()
						.is_some_and(|scope| scope.names.contains(alias));
				if taken {
					return Err(QueryError::DuplicateAlias {
						alias: alias.to_string(),
					});
				}
				self.claimed.insert(alias.to_string());
				alias.to_string()
			}
			None => self.next_generated(),
		};
		trace!(table = %table.display_name(), alias = %alias, "allocated table alias");
		if let Some(scope) = self.scopes.last_mut() {
			scope.bindings.insert(table.id(), alias.clone());
			scope.names.insert(alias.clone());
		}
		Ok(alias)
	}

	fn next_generated(&mut self) -> String {
		loop {
			let alias = format!("t{}", self.next);
			self.next += 1;
			if !self.claimed.contains(&alias) {
				self.generated.insert(alias.clone());
				return alias;
			}
		}
	}

	/// Resolve the alias bound to `id`, innermost scope first.
	pub fn resolve(&self, id: TableId) -> Option<&str> {
		self.scopes
			.iter()
			.rev()
			.find_map(|scope| scope.bindings.get(&id))
			.map(String::as_str)
	}

	/// Whether `id` already has an alias in the innermost scope.
	pub fn is_bound_in_scope(&self, id: TableId) -> bool {
		self.scopes
			.last()
			.is_some_and(|scope| scope.bindings.contains_key(&id))
	}

	/// Open a scope for an embedded statement.
	pub fn push_scope(&mut self) {
		self.scopes.push(Scope::default());
	}

	/// Close the innermost scope.
	///
	/// The outermost scope is never removed.
	pub fn pop_scope(&mut self) {
		if self.scopes.len() > 1 {
			self.scopes.pop();
		}
	}

	/// Number of counter-based aliases handed out so far.
	pub fn allocated(&self) -> usize {
		self.generated.len()
	}
}

impl Default for AliasAllocator {
	fn default() -> Self {
		Self::new()
	}
}
