//! Edge case tests for SELECT statement rendering

use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::*;
use tsqlkit_query::prelude::*;

/// Test repeated renders restart alias and placeholder numbering
#[rstest]
fn test_repeated_render_restarts_numbering() {
	let foo = TableRef::named("dbo.Foo");
	let bar = TableRef::named("dbo.Bar");
	let mut query = Query::select(&foo);
	query
		.inner_join(&bar, foo.col("BarID"), bar.col("BarID"))
		.add_filter(bar.col("Name").eq("x"));

	let first = query.render(false).unwrap();
	let second = query.render(false).unwrap();

	assert_eq!(first, second);
	assert!(second.sql().contains("AS [t0]"));
	assert_eq!(second.params()[0].name(), "@p0");
}

/// Test a table without schema
#[rstest]
fn test_unqualified_table() {
	let stmt = Query::select("Contact").render(false).unwrap();
	assert_eq!(stmt.sql(), "SELECT * FROM [Contact] AS [t0];");
}

/// Test only the first dot separates schema from table
#[rstest]
fn test_name_split_on_first_dot() {
	let stmt = Query::select("dbo.Archive.2024").render(false).unwrap();
	assert_eq!(stmt.sql(), "SELECT * FROM [dbo].[Archive.2024] AS [t0];");
}

/// Test identifiers with spaces and closing brackets
#[rstest]
fn test_identifier_escaping() {
	let details = TableRef::schema_table("dbo", "Order Details");
	let mut query = Query::select(&details);
	query.add_column(details.col("Odd]Name").alias("Safe]Alias"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT [t0].[Odd]]Name] AS [Safe]]Alias] FROM [dbo].[Order Details] AS [t0];"
	);
}

/// Test raw statement segments are trimmed and terminated once
#[rstest]
#[case::bare("SET NOCOUNT ON", "SET NOCOUNT ON; SELECT")]
#[case::terminated("SET NOCOUNT ON;", "SET NOCOUNT ON; SELECT")]
#[case::padded("  SET NOCOUNT ON ;  ", "SET NOCOUNT ON; SELECT")]
#[case::doubled("SET NOCOUNT ON;;", "SET NOCOUNT ON; SELECT")]
fn test_prefix_normalization(#[case] prefix: &str, #[case] expected_start: &str) {
	let mut query = Query::select("dbo.Contact");
	query.prefix(prefix);

	let stmt = query.render(false).unwrap();

	assert!(stmt.sql().starts_with(expected_start), "{}", stmt.sql());
}

/// Test blank prefix and suffix segments are skipped
#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[case::only_terminator(" ; ")]
fn test_blank_segments_are_skipped(#[case] segment: &str) {
	let mut query = Query::select("dbo.Contact");
	query.prefix(segment).suffix(segment);

	let stmt = query.render(false).unwrap();

	assert_eq!(stmt.sql(), "SELECT * FROM [dbo].[Contact] AS [t0];");
}

/// Test OFFSET without FETCH
#[rstest]
fn test_offset_only_paging() {
	let contact = TableRef::named("dbo.Contact");
	let mut query = Query::select(&contact);
	query.order_by("LastName", Order::Asc).skip(100);

	let stmt = query.render(false).unwrap();

	assert!(stmt.sql().ends_with("ORDER BY [LastName] ASC OFFSET 100 ROWS;"));
}

/// Test cleared paging no longer requires ORDER BY
#[rstest]
fn test_cleared_paging() {
	let mut query = Query::select("dbo.Contact");
	query.page(0, 10).clear_paging();

	let stmt = query.render(false).unwrap();

	assert_eq!(stmt.sql(), "SELECT * FROM [dbo].[Contact] AS [t0];");
}

/// Test a long IN list keeps numbering dense
#[rstest]
fn test_large_in_list_numbering() {
	let contact = TableRef::named("dbo.Contact");
	let ids: Vec<i64> = (0..25).collect();
	let mut query = Query::select(&contact);
	query.add_filter(contact.col("ContactID").is_in(ids));

	let stmt = query.render(false).unwrap();

	assert_eq!(stmt.params().len(), 25);
	for (i, binding) in stmt.params().iter().enumerate() {
		assert_eq!(binding.name(), format!("@p{i}"));
		assert_eq!(binding.value(), &Value::BigInt(Some(i as i64)));
	}
	assert!(stmt.sql().contains("@p9,@p10"));
	assert!(stmt.sql().ends_with("@p24));"));
}

/// Test generated aliases skip a name claimed explicitly
#[rstest]
fn test_generated_alias_skips_claimed_name() {
	let foo = TableRef::named("dbo.Foo");
	let claimed = TableRef::named("dbo.Z").alias("t1");
	let other = TableRef::named("dbo.X");
	let mut query = Query::select(&foo);
	query
		.inner_join(&claimed, foo.col("ID"), claimed.col("ID"))
		.inner_join(&other, foo.col("ID"), other.col("ID"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Foo] AS [t0] \
		 INNER JOIN [dbo].[Z] AS [t1] ON ([t0].[ID]=[t1].[ID]) \
		 INNER JOIN [dbo].[X] AS [t2] ON ([t0].[ID]=[t2].[ID]);"
	);
}

/// Test an explicit alias may be reused by a nested statement
///
/// The inner binding shadows the outer one, so a template embedded in
/// itself still renders.
#[rstest]
fn test_explicit_alias_shadowed_in_subquery() {
	let contact = TableRef::named("dbo.Contact").alias("c");
	let mut source = Query::select(&contact);
	source.add_filter(contact.col("Active").eq(true));

	let mut query = source.fork();
	query.add_filter(
		contact
			.col("ManagerID")
			.in_subquery(source.fork(), contact.col("ContactID")),
	);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [c] WHERE ([c].[Active]=@p0) AND \
		 ([c].[ManagerID] IN (SELECT [c].[ContactID] FROM [dbo].[Contact] AS [c] \
		 WHERE ([c].[Active]=@p1)));"
	);
}

/// Test mutation through the builder after a fork does not leak back
#[rstest]
fn test_fork_then_mutate_source() {
	let contact = TableRef::named("dbo.Contact");
	let mut source = Query::select(&contact);
	let fork = source.fork();
	source
		.add_filter(contact.col("Active").eq(true))
		.timeout(Duration::from_secs(5));

	let stmt = fork.render(false).unwrap();

	assert_eq!(stmt.sql(), "SELECT * FROM [dbo].[Contact] AS [t0];");
	assert_eq!(stmt.timeout(), None);
}

/// Test tag parsing feeds the builder
#[rstest]
fn test_tags_drive_builder() {
	let orders = TableRef::named("Sales.Orders");
	let aggregate: Aggregate = "sum".parse().unwrap();
	let order: Order = "DESC".parse().unwrap();
	let mut query = Query::select(&orders);
	query
		.add_column(orders.col("Total").aggregate(aggregate).alias("Revenue"))
		.order_by("Revenue", order);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT SUM([t0].[Total]) AS [Revenue] FROM [Sales].[Orders] AS [t0] \
		 ORDER BY [Revenue] DESC;"
	);
}
