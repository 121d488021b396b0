//! SQL Server query builder backend
//!
//! This module implements the SQL generation backend for SQL Server.

use tracing::{debug, warn};

use super::{QueryBuilder, RenderContext, SqlWriter};
use crate::{
	config::RenderOptions,
	error::{QueryError, QueryResult},
	expr::{Condition, Filter},
	query::{SelectStatement, Statement},
	types::{
		ColumnRef, CompareOper, JoinCondition, JoinSpec, JoinType, OrderSpec, OrderTarget,
		SelectColumn, TableRef, TableSource,
	},
	value::Param,
};

/// SQL Server query builder
///
/// This struct implements SQL generation for SQL Server, using the following conventions:
/// - Identifiers: Square brackets (`[table_name]`)
/// - Placeholders: Named and positional (`@p0`, `@p1`, ...)
/// - Table aliases: `AS [t0]`, `AS [t1]`, ... in first-encounter order
/// - Paging: `OFFSET n ROWS FETCH NEXT m ROWS ONLY`
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerQueryBuilder;

impl SqlServerQueryBuilder {
	/// Create a new SQL Server query builder
	pub fn new() -> Self {
		Self
	}

	/// Escape an identifier for SQL Server
	///
	/// SQL Server uses square brackets; a closing bracket inside the
	/// identifier is doubled.
	fn escape_iden(&self, ident: &str) -> String {
		let escaped = ident.replace(']', "]]");
		format!("[{}]", escaped)
	}

	fn placeholder(&self, index: usize) -> String {
		format!("@p{}", index)
	}

	fn write_identifier(&self, writer: &mut SqlWriter, ident: &str) -> QueryResult<()> {
		if ident.is_empty() {
			return Err(QueryError::EmptyIdentifier);
		}
		writer.push_identifier(ident, |s| self.escape_iden(s));
		Ok(())
	}

	/// Normalize a raw prefix/suffix segment; `None` when nothing is left.
	fn raw_segment<'a>(&self, raw: &'a str, position: &'static str) -> Option<&'a str> {
		let text = raw
			.trim_start()
			.trim_end_matches(|c: char| c == ';' || c.is_whitespace());
		if text.is_empty() {
			warn!(position, "skipping empty raw statement");
			return None;
		}
		Some(text)
	}

	/// Write one SELECT statement body (no terminator) in its own alias scope.
	///
	/// `projection` replaces the SELECT list; subquery membership uses it to
	/// project the inner column.
	fn write_select(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		stmt: &SelectStatement,
		projection: Option<&ColumnRef>,
	) -> QueryResult<()> {
		if stmt.paging().is_some() && stmt.orders().is_empty() {
			return Err(QueryError::PagingWithoutOrder);
		}

		ctx.aliases.push_scope();
		let result = self.write_select_scoped(writer, ctx, stmt, projection);
		ctx.aliases.pop_scope();
		result
	}

	fn write_select_scoped(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		stmt: &SelectStatement,
		projection: Option<&ColumnRef>,
	) -> QueryResult<()> {
		// FROM and JOINs first: the root and every join target need an alias
		// before the SELECT list can be qualified.
		let mut from = writer.fragment();
		self.write_from(&mut from, ctx, stmt)?;

		writer.push("SELECT");
		if stmt.is_distinct() {
			writer.push_keyword("DISTINCT");
		}
		writer.push_space();
		match projection {
			Some(column) => self.write_column(writer, ctx, column)?,
			None if stmt.select_columns().is_empty() => writer.push("*"),
			None => writer.push_list(stmt.select_columns(), ",", |w, column| {
				self.write_select_column(w, ctx, column)
			})?,
		}

		writer.clause_break();
		writer.append(from);

		if !stmt.filters().is_empty() {
			writer.clause_break();
			writer.push("WHERE ");
			self.write_where(writer, ctx, stmt.filters())?;
		}

		if !stmt.orders().is_empty() {
			writer.clause_break();
			writer.push("ORDER BY ");
			writer.push_list(stmt.orders(), ",", |w, order| self.write_order(w, ctx, order))?;
		}

		if let Some(paging) = stmt.paging() {
			writer.clause_break();
			writer.push(&format!("OFFSET {} ROWS", paging.offset));
			if let Some(fetch) = paging.fetch {
				writer.push(&format!(" FETCH NEXT {} ROWS ONLY", fetch));
			}
		}

		Ok(())
	}

	fn write_from(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		stmt: &SelectStatement,
	) -> QueryResult<()> {
		writer.push("FROM ");
		self.write_table_ref(writer, ctx, stmt.root())?;
		for join in stmt.joins() {
			writer.clause_break();
			self.write_join(writer, ctx, join)?;
		}
		Ok(())
	}

	/// Write a table occurrence followed by its freshly allocated alias
	///
	/// The alias is allocated before the source is written, so a derived
	/// table takes its number ahead of the tables inside it, and those inner
	/// tables are numbered before any join that follows. A derived root
	/// joined to one more table renders as `(... AS [t1]) AS [t0] ... AS [t2]`.
	fn write_table_ref(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		table: &TableRef,
	) -> QueryResult<()> {
		let alias = ctx.aliases.allocate(table)?;
		match table.source() {
			TableSource::Named { schema, name } => {
				if let Some(schema) = schema {
					self.write_identifier(writer, schema)?;
					writer.push(".");
				}
				self.write_identifier(writer, name)?;
			}
			TableSource::SubQuery(query) => {
				writer.open_block();
				self.write_select(writer, ctx, query, None)?;
				writer.close_block();
			}
		}
		writer.push(" AS ");
		self.write_identifier(writer, &alias)
	}

	fn write_join(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		join: &JoinSpec,
	) -> QueryResult<()> {
		let right = join.right();
		let is_cross = join.kind() == JoinType::Cross;
		if is_cross && !join.conditions().is_empty() {
			return Err(QueryError::CrossJoinCondition {
				table: right.display_name(),
			});
		}
		if !is_cross && join.conditions().is_empty() {
			return Err(QueryError::MissingJoinCondition {
				table: right.display_name(),
			});
		}
		if ctx.aliases.resolve(join.left()).is_none() {
			return Err(QueryError::UnknownTable {
				reference: format!("join to {}", right.display_name()),
			});
		}
		if ctx.aliases.is_bound_in_scope(right.id()) {
			return Err(QueryError::TableAlreadyInScope {
				table: right.display_name(),
			});
		}

		writer.push(join.kind().as_str());
		writer.push(" ");
		self.write_table_ref(writer, ctx, right)?;

		if !is_cross {
			writer.push(" ON (");
			writer.push_list(join.conditions(), " AND ", |w, condition| {
				self.write_join_condition(w, ctx, condition)
			})?;
			writer.push(")");
		}
		Ok(())
	}

	fn write_join_condition(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		condition: &JoinCondition,
	) -> QueryResult<()> {
		match condition {
			JoinCondition::Columns(left, right) => {
				self.write_column(writer, ctx, left)?;
				writer.push("=");
				self.write_column(writer, ctx, right)
			}
			// Groups sit next to other ON conditions joined by AND
			JoinCondition::Filter(filter @ Filter::Group(_)) => {
				self.write_wrapped_filter(writer, ctx, filter)
			}
			JoinCondition::Filter(filter) => self.write_filter(writer, ctx, filter),
		}
	}

	/// Write the WHERE predicate.
	///
	/// A single top-level group is the outermost group and is not wrapped;
	/// any other top-level list is an implicit AND group.
	fn write_where(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		filters: &[Filter],
	) -> QueryResult<()> {
		match filters {
			[Filter::Group(group)] => self.write_condition(writer, ctx, group),
			_ => writer.push_list(filters, " AND ", |w, filter| {
				self.write_wrapped_filter(w, ctx, filter)
			}),
		}
	}

	/// Write the children of a group, each parenthesized
	fn write_condition(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		condition: &Condition,
	) -> QueryResult<()> {
		if condition.negate {
			writer.push("NOT (");
		}

		if condition.is_empty() {
			writer.push(condition.logic.identity_predicate());
		} else {
			let separator = format!(" {} ", condition.logic.as_str());
			writer.push_list(&condition.filters, &separator, |w, filter| {
				self.write_wrapped_filter(w, ctx, filter)
			})?;
		}

		if condition.negate {
			writer.push(")");
		}
		Ok(())
	}

	fn write_wrapped_filter(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		filter: &Filter,
	) -> QueryResult<()> {
		writer.push("(");
		self.write_filter(writer, ctx, filter)?;
		writer.push(")");
		Ok(())
	}

	/// Write a filter without surrounding parentheses
	fn write_filter(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		filter: &Filter,
	) -> QueryResult<()> {
		match filter {
			Filter::Compare {
				column,
				oper,
				value,
			} => self.write_compare(writer, ctx, column, *oper, value.as_ref()),
			Filter::List {
				column,
				oper,
				values,
			} => {
				if values.is_empty() {
					return Err(QueryError::EmptyMembershipSet {
						column: column.name().to_string(),
					});
				}
				self.write_column(writer, ctx, column)?;
				writer.push(" ");
				writer.push(oper.as_str());
				writer.push(" (");
				writer.push_list(values, ",", |w, param| {
					self.write_param(w, ctx, param);
					Ok(())
				})?;
				writer.push(")");
				Ok(())
			}
			Filter::SubQuery {
				column,
				oper,
				query,
				inner_column,
			} => {
				self.write_column(writer, ctx, column)?;
				writer.push(" ");
				writer.push(oper.as_str());
				writer.push(" ");
				writer.open_block();
				self.write_select(writer, ctx, query, Some(inner_column))?;
				writer.close_block();
				Ok(())
			}
			Filter::Group(condition) => self.write_condition(writer, ctx, condition),
		}
	}

	fn write_compare(
		&self,
		writer: &mut SqlWriter,
		ctx: &mut RenderContext,
		column: &ColumnRef,
		oper: CompareOper,
		value: Option<&Param>,
	) -> QueryResult<()> {
		self.write_column(writer, ctx, column)?;

		if oper.is_null_test() {
			writer.push(" ");
			writer.push(oper.as_str());
			return Ok(());
		}

		let Some(param) = value else {
			return Err(QueryError::MissingValue {
				column: column.name().to_string(),
				oper: oper.as_str(),
			});
		};

		if oper.is_keyword() {
			writer.push(" ");
			writer.push(oper.as_str());
			writer.push(" ");
		} else {
			writer.push(oper.as_str());
		}
		self.write_param(writer, ctx, param);
		Ok(())
	}

	fn write_param(&self, writer: &mut SqlWriter, ctx: &mut RenderContext, param: &Param) {
		let placeholder = ctx.params.bind(param, |i| self.placeholder(i));
		writer.push(&placeholder);
	}

	/// Write `[alias].[column]` for a column of an occurrence in scope
	fn write_column(
		&self,
		writer: &mut SqlWriter,
		ctx: &RenderContext,
		column: &ColumnRef,
	) -> QueryResult<()> {
		let alias = ctx
			.aliases
			.resolve(column.table_id())
			.ok_or_else(|| QueryError::UnknownTable {
				reference: format!("column {}", column.name()),
			})?;
		self.write_identifier(writer, alias)?;
		writer.push(".");
		self.write_identifier(writer, column.name())
	}

	fn write_select_column(
		&self,
		writer: &mut SqlWriter,
		ctx: &RenderContext,
		column: &SelectColumn,
	) -> QueryResult<()> {
		match column.aggregate_fn() {
			Some(aggregate) => {
				writer.push(aggregate.as_str());
				writer.push("(");
				self.write_column(writer, ctx, column.column())?;
				writer.push(")");
			}
			None => self.write_column(writer, ctx, column.column())?,
		}
		if let Some(alias) = column.output_alias() {
			writer.push(" AS ");
			self.write_identifier(writer, alias)?;
		}
		Ok(())
	}

	fn write_order(
		&self,
		writer: &mut SqlWriter,
		ctx: &RenderContext,
		order: &OrderSpec,
	) -> QueryResult<()> {
		match &order.target {
			OrderTarget::Output(name) => self.write_identifier(writer, name)?,
			OrderTarget::Column(column) => self.write_column(writer, ctx, column)?,
		}
		writer.push(" ");
		writer.push(order.order.as_str());
		Ok(())
	}
}

impl QueryBuilder for SqlServerQueryBuilder {
	fn build_select(
		&self,
		stmt: &SelectStatement,
		options: &RenderOptions,
	) -> QueryResult<Statement> {
		let mut ctx = RenderContext::new();
		let mut writer = SqlWriter::new(options);

		if let Some(prefix) = stmt
			.prefix_statement()
			.and_then(|raw| self.raw_segment(raw, "prefix"))
		{
			writer.push(prefix);
			writer.end_statement();
			writer.statement_break();
		}

		self.write_select(&mut writer, &mut ctx, stmt, None)?;
		writer.end_statement();

		if let Some(suffix) = stmt
			.suffix_statement()
			.and_then(|raw| self.raw_segment(raw, "suffix"))
		{
			writer.statement_break();
			writer.push(suffix);
			writer.end_statement();
		}

		let aliases = ctx.aliases.allocated();
		let sql = writer.into_string();
		let params = ctx.into_params();
		debug!(
			sql_len = sql.len(),
			params = params.len(),
			aliases,
			formatted = options.is_formatted(),
			"rendered select statement"
		);

		Ok(Statement::new(sql, params, stmt.command_timeout()))
	}

	fn escape_identifier(&self, ident: &str) -> String {
		self.escape_iden(ident)
	}

	fn format_placeholder(&self, index: usize) -> String {
		self.placeholder(index)
	}
}
