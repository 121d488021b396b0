//! SELECT statement builder
//!
//! This module provides the `SelectStatement` type for building SQL SELECT queries.

use std::time::Duration;

use crate::{
	backend::{QueryBuilder, SqlServerQueryBuilder},
	config::RenderOptions,
	error::QueryResult,
	expr::{Filter, IntoFilter},
	types::{
		ColumnRef, IntoSelectColumn, IntoTableRef, JoinSpec, JoinType, Order, OrderSpec,
		OrderTarget, SelectColumn, TableRef,
	},
};

use super::{statement::Statement, traits::QueryStatementBuilder};

/// OFFSET/FETCH paging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
	/// Rows to skip
	pub offset: u64,
	/// Rows to return; `None` returns everything after the offset
	pub fetch: Option<u64>,
}

/// SELECT statement builder
///
/// Holds one root table, joins, filters (implicitly AND-ed), the SELECT list,
/// ORDER BY entries and statement options. Rendering never mutates the
/// builder, so the same statement can be rendered any number of times.
///
/// # Examples
///
/// ```rust
/// use tsqlkit_query::prelude::*;
///
/// let contact = TableRef::named("dbo.Contact");
/// let mut query = Query::select(&contact);
/// query
///     .add_column(contact.col("LastName"))
///     .add_column(contact.col("FirstName"))
///     .add_filter(contact.col("LastName").eq("Buchanan"))
///     .order_by("LastName", Order::Asc);
///
/// let stmt = query.render(false).unwrap();
/// assert_eq!(
///     stmt.sql(),
///     "SELECT [t0].[LastName],[t0].[FirstName] FROM [dbo].[Contact] AS [t0] \
///      WHERE ([t0].[LastName]=@p0) ORDER BY [LastName] ASC;"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SelectStatement {
	pub(crate) root: TableRef,
	pub(crate) joins: Vec<JoinSpec>,
	pub(crate) filters: Vec<Filter>,
	pub(crate) columns: Vec<SelectColumn>,
	pub(crate) orders: Vec<OrderSpec>,
	pub(crate) distinct: bool,
	pub(crate) paging: Option<Paging>,
	pub(crate) prefix: Option<String>,
	pub(crate) suffix: Option<String>,
	pub(crate) timeout: Option<Duration>,
}

impl SelectStatement {
	/// Create a new SELECT statement reading from `root`
	pub fn new<T>(root: T) -> Self
	where
		T: IntoTableRef,
	{
		Self {
			root: root.into_table_ref(),
			joins: Vec::new(),
			filters: Vec::new(),
			columns: Vec::new(),
			orders: Vec::new(),
			distinct: false,
			paging: None,
			prefix: None,
			suffix: None,
			timeout: None,
		}
	}

	/// Produce an independent copy of this statement.
	///
	/// Mutating the fork never affects `self`. Table identities are shared,
	/// so columns built from the source's tables stay valid on the fork.
	///
	/// # Examples
	///
	/// ```rust
	/// use tsqlkit_query::prelude::*;
	///
	/// let contact = TableRef::named("dbo.Contact");
	/// let template = Query::select(&contact);
	///
	/// let mut admins = template.fork();
	/// admins.add_filter(contact.col("Role").eq("admin"));
	///
	/// assert!(template.filters().is_empty());
	/// assert_eq!(admins.filters().len(), 1);
	/// ```
	#[must_use]
	pub fn fork(&self) -> Self {
		self.clone()
	}

	/// Add a join
	pub fn add_join(&mut self, join: JoinSpec) -> &mut Self {
		self.joins.push(join);
		self
	}

	fn join_on(
		&mut self,
		kind: JoinType,
		right: &TableRef,
		left_col: ColumnRef,
		right_col: ColumnRef,
	) -> &mut Self {
		let join =
			JoinSpec::from_parts(kind, left_col.table_id(), right.clone()).on(left_col, right_col);
		self.add_join(join)
	}

	/// Add an INNER JOIN on a column equality
	///
	/// The left side of the join is the table `left_col` belongs to. `right`
	/// must be a table occurrence not yet in the statement; for a self-join
	/// pass [`TableRef::new_occurrence`] of the root.
	///
	/// # Examples
	///
	/// ```rust
	/// use tsqlkit_query::prelude::*;
	///
	/// let foo = TableRef::named("dbo.Foo");
	/// let bar = TableRef::named("dbo.Bar");
	/// let mut query = Query::select(&foo);
	/// query.inner_join(&bar, foo.col("BarID"), bar.col("BarID"));
	///
	/// assert_eq!(
	///     query.render(false).unwrap().sql(),
	///     "SELECT * FROM [dbo].[Foo] AS [t0] \
	///      INNER JOIN [dbo].[Bar] AS [t1] ON ([t0].[BarID]=[t1].[BarID]);"
	/// );
	/// ```
	pub fn inner_join(
		&mut self,
		right: &TableRef,
		left_col: ColumnRef,
		right_col: ColumnRef,
	) -> &mut Self {
		self.join_on(JoinType::Inner, right, left_col, right_col)
	}

	/// Add a LEFT JOIN on a column equality
	pub fn left_join(
		&mut self,
		right: &TableRef,
		left_col: ColumnRef,
		right_col: ColumnRef,
	) -> &mut Self {
		self.join_on(JoinType::Left, right, left_col, right_col)
	}

	/// Add a RIGHT JOIN on a column equality
	pub fn right_join(
		&mut self,
		right: &TableRef,
		left_col: ColumnRef,
		right_col: ColumnRef,
	) -> &mut Self {
		self.join_on(JoinType::Right, right, left_col, right_col)
	}

	/// Add a CROSS JOIN of `right` onto the root table
	pub fn cross_join(&mut self, right: &TableRef) -> &mut Self {
		let join = JoinSpec::new(JoinType::Cross, &self.root, right);
		self.add_join(join)
	}

	/// Add a filter to the WHERE clause
	///
	/// Top-level filters are combined with AND in the order added.
	pub fn add_filter<F>(&mut self, filter: F) -> &mut Self
	where
		F: IntoFilter,
	{
		self.filters.push(filter.into_filter());
		self
	}

	/// Add a filter only if the option is Some
	pub fn add_filter_option<F>(&mut self, filter: Option<F>) -> &mut Self
	where
		F: IntoFilter,
	{
		if let Some(filter) = filter {
			self.add_filter(filter);
		}
		self
	}

	/// Append a column to the SELECT list
	pub fn add_column<C>(&mut self, column: C) -> &mut Self
	where
		C: IntoSelectColumn,
	{
		self.columns.push(column.into_select_column());
		self
	}

	/// Append several columns to the SELECT list
	pub fn add_columns<I, C>(&mut self, columns: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: IntoSelectColumn,
	{
		for column in columns {
			self.add_column(column);
		}
		self
	}

	/// Append an ORDER BY entry
	///
	/// A `&str` target sorts on an output column name (`[LastName]`), a
	/// [`ColumnRef`] on a qualified column (`[t0].[LastName]`).
	pub fn order_by<T>(&mut self, target: T, order: Order) -> &mut Self
	where
		T: Into<OrderTarget>,
	{
		self.add_order(OrderSpec::new(target, order))
	}

	/// Append a prepared ORDER BY entry
	pub fn add_order(&mut self, order: OrderSpec) -> &mut Self {
		self.orders.push(order);
		self
	}

	/// Set SELECT DISTINCT
	pub fn distinct(&mut self, distinct: bool) -> &mut Self {
		self.distinct = distinct;
		self
	}

	/// Skip `offset` rows and return the next `fetch` rows
	///
	/// Requires at least one ORDER BY entry at render time.
	pub fn page(&mut self, offset: u64, fetch: u64) -> &mut Self {
		self.paging = Some(Paging {
			offset,
			fetch: Some(fetch),
		});
		self
	}

	/// Skip `offset` rows and return the rest
	pub fn skip(&mut self, offset: u64) -> &mut Self {
		self.paging = Some(Paging {
			offset,
			fetch: None,
		});
		self
	}

	/// Remove the paging window
	pub fn clear_paging(&mut self) -> &mut Self {
		self.paging = None;
		self
	}

	/// Set a raw statement emitted before the SELECT
	///
	/// The text is written verbatim and terminated with `;`. It must not
	/// contain caller-supplied values.
	pub fn prefix<S>(&mut self, statement: S) -> &mut Self
	where
		S: Into<String>,
	{
		self.prefix = Some(statement.into());
		self
	}

	/// Set a raw statement emitted after the SELECT
	pub fn suffix<S>(&mut self, statement: S) -> &mut Self
	where
		S: Into<String>,
	{
		self.suffix = Some(statement.into());
		self
	}

	/// Set the command timeout handed to the execution layer
	pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
		self.timeout = Some(timeout);
		self
	}

	/// Root table
	pub fn root(&self) -> &TableRef {
		&self.root
	}

	/// Joins in declaration order
	pub fn joins(&self) -> &[JoinSpec] {
		&self.joins
	}

	/// Top-level filters in the order added
	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	/// SELECT list in declaration order
	pub fn select_columns(&self) -> &[SelectColumn] {
		&self.columns
	}

	/// ORDER BY entries in declaration order
	pub fn orders(&self) -> &[OrderSpec] {
		&self.orders
	}

	/// Whether SELECT DISTINCT is set
	pub fn is_distinct(&self) -> bool {
		self.distinct
	}

	/// Paging window, if any
	pub fn paging(&self) -> Option<Paging> {
		self.paging
	}

	/// Raw statement emitted before the SELECT
	pub fn prefix_statement(&self) -> Option<&str> {
		self.prefix.as_deref()
	}

	/// Raw statement emitted after the SELECT
	pub fn suffix_statement(&self) -> Option<&str> {
		self.suffix.as_deref()
	}

	/// Command timeout for the execution layer
	pub fn command_timeout(&self) -> Option<Duration> {
		self.timeout
	}

	/// Render with default options, compact or formatted
	pub fn render(&self, formatted: bool) -> QueryResult<Statement> {
		self.render_with(&RenderOptions::default().formatted(formatted))
	}

	/// Render with explicit options
	pub fn render_with(&self, options: &RenderOptions) -> QueryResult<Statement> {
		SqlServerQueryBuilder::new().build_select(self, options)
	}
}

impl QueryStatementBuilder for SelectStatement {
	fn build_any(
		&self,
		query_builder: &dyn QueryBuilder,
		options: &RenderOptions,
	) -> QueryResult<Statement> {
		query_builder.build_select(self, options)
	}
}
