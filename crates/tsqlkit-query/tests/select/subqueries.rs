//! Embedded statement tests: subquery membership and derived tables

use pretty_assertions::assert_eq;
use rstest::*;
use tsqlkit_query::prelude::*;

fn placeholder_names(stmt: &Statement) -> Vec<&str> {
	stmt.params().iter().map(ParameterBinding::name).collect()
}

/// Test NOT IN subquery
#[rstest]
fn test_not_in_subquery() {
	let contact = TableRef::named("dbo.Contact");
	let blocked = TableRef::named("dbo.Blocked");

	let mut query = Query::select(&contact);
	query.add_filter(
		contact
			.col("ContactID")
			.not_in_subquery(Query::select(&blocked), blocked.col("ContactID")),
	);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [t0] WHERE ([t0].[ContactID] NOT IN \
		 (SELECT [t1].[ContactID] FROM [dbo].[Blocked] AS [t1]));"
	);
}

/// Test placeholders are numbered across outer and inner filters in text order
#[rstest]
fn test_placeholders_continue_through_subquery() {
	let contact = TableRef::named("dbo.Contact");
	let orders = TableRef::named("Sales.Orders");

	let mut inner = Query::select(&orders);
	inner.add_filter(orders.col("Total").gt(100_i32));

	let mut query = Query::select(&contact);
	query
		.add_filter(contact.col("Active").eq(true))
		.add_filter(contact.col("ContactID").in_subquery(inner, orders.col("ContactID")))
		.add_filter(contact.col("City").eq("Seattle"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [t0] WHERE ([t0].[Active]=@p0) AND \
		 ([t0].[ContactID] IN (SELECT [t1].[ContactID] FROM [Sales].[Orders] AS [t1] \
		 WHERE ([t1].[Total]>@p1))) AND ([t0].[City]=@p2);"
	);
	assert_eq!(placeholder_names(&stmt), vec!["@p0", "@p1", "@p2"]);
	assert_eq!(stmt.params()[1].value(), &Value::Int(Some(100)));
}

/// Test subquery membership overrides the inner SELECT list
#[rstest]
fn test_subquery_projection_is_inner_column() {
	let contact = TableRef::named("dbo.Contact");
	let orders = TableRef::named("Sales.Orders");

	let mut inner = Query::select(&orders);
	inner
		.add_column(orders.col("OrderID"))
		.add_column(orders.col("Total"));

	let mut query = Query::select(&contact);
	query.add_filter(contact.col("ContactID").in_subquery(inner, orders.col("ContactID")));

	let stmt = query.render(false).unwrap();

	assert!(stmt.sql().contains("IN (SELECT [t1].[ContactID] FROM"));
	assert!(!stmt.sql().contains("[OrderID]"));
}

/// Test an inner statement can filter on a table of the enclosing statement
#[rstest]
fn test_inner_statement_resolves_outer_alias() {
	let contact = TableRef::named("dbo.Contact");
	let orders = TableRef::named("Sales.Orders");

	let mut inner = Query::select(&orders);
	inner.add_filter(contact.col("Region").eq("EU"));

	let mut query = Query::select(&contact);
	query.add_filter(contact.col("ContactID").in_subquery(inner, orders.col("ContactID")));

	let stmt = query.render(false).unwrap();

	assert!(
		stmt.sql()
			.ends_with("FROM [Sales].[Orders] AS [t1] WHERE ([t0].[Region]=@p0)));")
	);
}

/// Test a derived table as the root
///
/// Verifies that the root alias is allocated before the tables inside it.
#[rstest]
fn test_derived_root_table() {
	let contact = TableRef::named("dbo.Contact");
	let mut inner = Query::select(&contact);
	inner
		.add_column(contact.col("LastName"))
		.add_filter(contact.col("Active").eq(true));

	let derived = TableRef::subquery(inner);
	let mut query = Query::select(&derived);
	query
		.add_column(derived.col("LastName"))
		.add_filter(derived.col("LastName").like("B%"))
		.order_by(derived.col("LastName"), Order::Asc);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT [t0].[LastName] FROM (SELECT [t1].[LastName] FROM [dbo].[Contact] AS [t1] \
		 WHERE ([t1].[Active]=@p0)) AS [t0] WHERE ([t0].[LastName] LIKE @p1) \
		 ORDER BY [t0].[LastName] ASC;"
	);
	assert_eq!(placeholder_names(&stmt), vec!["@p0", "@p1"]);
}

/// Test alias order when a derived table is followed by a join
///
/// Tables inside a derived table are numbered before any join that
/// follows it, whether the derived table is the root or a join target.
#[rstest]
#[case::derived_root(
	true,
	"SELECT * FROM (SELECT * FROM [dbo].[Contact] AS [t1]) AS [t0] \
	 INNER JOIN [dbo].[Region] AS [t2] ON ([t0].[RegionID]=[t2].[RegionID]);"
)]
#[case::derived_join(
	false,
	"SELECT * FROM [dbo].[Region] AS [t0] \
	 INNER JOIN (SELECT * FROM [dbo].[Contact] AS [t2]) AS [t1] ON ([t0].[RegionID]=[t1].[RegionID]) \
	 INNER JOIN [dbo].[Country] AS [t3] ON ([t0].[CountryID]=[t3].[CountryID]);"
)]
fn test_derived_table_numbered_before_next_join(#[case] derived_root: bool, #[case] expected: &str) {
	let derived = TableRef::subquery(Query::select("dbo.Contact"));
	let region = TableRef::named("dbo.Region");
	let query = if derived_root {
		let mut query = Query::select(&derived);
		query.inner_join(&region, derived.col("RegionID"), region.col("RegionID"));
		query
	} else {
		let country = TableRef::named("dbo.Country");
		let mut query = Query::select(&region);
		query
			.inner_join(&derived, region.col("RegionID"), derived.col("RegionID"))
			.inner_join(&country, region.col("CountryID"), country.col("CountryID"));
		query
	};

	let stmt = query.render(false).unwrap();

	assert_eq!(stmt.sql(), expected);
}

/// Test embedded statements drop their prefix, suffix and terminator
#[rstest]
fn test_embedded_statement_omits_segments() {
	let contact = TableRef::named("dbo.Contact");
	let mut inner = Query::select(&contact);
	inner.prefix("SET NOCOUNT ON").suffix("SELECT 1");

	let derived = TableRef::subquery(inner);
	let stmt = Query::select(&derived).render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM (SELECT * FROM [dbo].[Contact] AS [t1]) AS [t0];"
	);
}

/// Test a fork embedded in its own source keeps the outer aliases intact
#[rstest]
fn test_fork_embedded_in_source() {
	let contact = TableRef::named("dbo.Contact");
	let mut source = Query::select(&contact);
	source.add_filter(contact.col("LastName").eq("Buchanan"));

	let mut query = source.fork();
	query
		.add_filter(
			contact
				.col("ContactID")
				.in_subquery(source.fork(), contact.col("ContactID")),
		)
		.order_by(contact.col("LastName"), Order::Asc);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [t0] WHERE ([t0].[LastName]=@p0) AND \
		 ([t0].[ContactID] IN (SELECT [t1].[ContactID] FROM [dbo].[Contact] AS [t1] \
		 WHERE ([t1].[LastName]=@p1))) ORDER BY [t0].[LastName] ASC;"
	);
}

/// Test subquery membership nested inside a group
#[rstest]
fn test_subquery_inside_group() {
	let contact = TableRef::named("dbo.Contact");
	let vip = TableRef::named("dbo.Vip");

	let mut query = Query::select(&contact);
	query.add_filter(
		Cond::any()
			.add(contact.col("Owner").eq(true))
			.add(
				contact
					.col("ContactID")
					.in_subquery(Query::select(&vip), vip.col("ContactID")),
			),
	);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [t0] WHERE ([t0].[Owner]=@p0) OR \
		 ([t0].[ContactID] IN (SELECT [t1].[ContactID] FROM [dbo].[Vip] AS [t1]));"
	);
}
