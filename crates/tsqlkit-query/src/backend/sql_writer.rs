//! SQL Writer helper for constructing SQL strings
//!
//! This module provides `SqlWriter` type which helps build SQL strings
//! with proper spacing, clause breaks and nesting in either compact or
//! formatted layout.

use crate::config::RenderOptions;
use crate::error::QueryResult;

/// SQL Writer for constructing SQL strings
///
/// In compact mode every clause break is a single space. In formatted mode a
/// clause break starts a new line indented to the current nesting depth, and
/// parenthesized blocks (embedded statements) are indented one level deeper.
/// Both modes produce the same text once whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// use tsqlkit_query::backend::SqlWriter;
/// use tsqlkit_query::RenderOptions;
///
/// let mut writer = SqlWriter::new(&RenderOptions::pretty());
/// writer.push("SELECT *");
/// writer.clause_break();
/// writer.push("FROM ");
/// writer.push_identifier("Contact", |s| format!("[{}]", s));
///
/// assert_eq!(writer.sql(), "SELECT *\nFROM [Contact]");
/// ```
#[derive(Debug, Clone)]
pub struct SqlWriter {
	/// The SQL string being constructed
	sql: String,
	formatted: bool,
	indent_width: usize,
	/// Current block nesting depth
	depth: usize,
}

impl SqlWriter {
	/// Create a new SQL writer for the given layout
	pub fn new(options: &RenderOptions) -> Self {
		Self {
			sql: String::new(),
			formatted: options.is_formatted(),
			indent_width: options.indent(),
			depth: 0,
		}
	}

	/// Create an empty writer sharing this writer's layout and depth.
	///
	/// Used to render a fragment out of text order and [`append`](Self::append)
	/// it later.
	pub fn fragment(&self) -> Self {
		Self {
			sql: String::new(),
			formatted: self.formatted,
			indent_width: self.indent_width,
			depth: self.depth,
		}
	}

	/// Push a string to SQL
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space to SQL
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with([' ', '\n', '(']) {
			self.sql.push(' ');
		}
	}

	/// Push a keyword (with automatic spacing)
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push an identifier (escaped)
	///
	/// # Arguments
	///
	/// * `ident` - The identifier to push
	/// * `escape_fn` - Function to escape identifier
	pub fn push_identifier<F>(&mut self, ident: &str, escape_fn: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&escape_fn(ident));
	}

	/// Push a list of items with a separator
	///
	/// Stops at the first item whose writer fails.
	///
	/// # Arguments
	///
	/// * `items` - Iterator of items
	/// * `separator` - Separator string between items
	/// * `f` - Function to write each item
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F) -> QueryResult<()>
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T) -> QueryResult<()>,
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item)?;
			first = false;
		}
		Ok(())
	}

	/// Separate two clauses of one statement
	pub fn clause_break(&mut self) {
		if self.formatted {
			self.newline();
		} else {
			self.sql.push(' ');
		}
	}

	/// Open a parenthesized block holding an embedded statement
	pub fn open_block(&mut self) {
		self.sql.push('(');
		self.depth += 1;
		if self.formatted {
			self.newline();
		}
	}

	/// Close the innermost parenthesized block
	pub fn close_block(&mut self) {
		self.depth = self.depth.saturating_sub(1);
		if self.formatted {
			self.newline();
		}
		self.sql.push(')');
	}

	/// Terminate the current statement segment
	pub fn end_statement(&mut self) {
		self.sql.push(';');
	}

	/// Separate two terminated statement segments
	pub fn statement_break(&mut self) {
		if self.formatted {
			self.sql.push('\n');
		} else {
			self.sql.push(' ');
		}
	}

	/// Append a fragment produced by [`fragment`](Self::fragment)
	pub fn append(&mut self, other: SqlWriter) {
		self.sql.push_str(&other.sql);
	}

	fn newline(&mut self) {
		self.sql.push('\n');
		let width = self.depth * self.indent_width;
		self.sql.extend(std::iter::repeat_n(' ', width));
	}

	/// Get current SQL string
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Current block nesting depth
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Convert to string (consuming self).
	pub fn into_string(self) -> String {
		self.sql
	}

	/// Check if SQL is empty
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// Get length of SQL string
	pub fn len(&self) -> usize {
		self.sql.len()
	}
}

impl Default for SqlWriter {
	fn default() -> Self {
		Self::new(&RenderOptions::default())
	}
}
