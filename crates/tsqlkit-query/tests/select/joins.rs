//! JOIN rendering tests

use pretty_assertions::assert_eq;
use rstest::*;
use tsqlkit_query::prelude::*;

/// Test every join kind keyword
#[rstest]
#[case::inner(JoinType::Inner, "INNER JOIN")]
#[case::left(JoinType::Left, "LEFT JOIN")]
#[case::right(JoinType::Right, "RIGHT JOIN")]
fn test_join_kinds(#[case] kind: JoinType, #[case] keyword: &str) {
	let foo = TableRef::named("dbo.Foo");
	let bar = TableRef::named("dbo.Bar");
	let mut query = Query::select(&foo);
	query.add_join(JoinSpec::new(kind, &foo, &bar).on_columns("BarID", "ID"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		format!(
			"SELECT * FROM [dbo].[Foo] AS [t0] {keyword} [dbo].[Bar] AS [t1] ON ([t0].[BarID]=[t1].[ID]);"
		)
	);
}

/// Test CROSS JOIN renders without ON
#[rstest]
fn test_cross_join() {
	let a = TableRef::named("dbo.A");
	let b = TableRef::named("dbo.B");
	let mut query = Query::select(&a);
	query.cross_join(&b);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[A] AS [t0] CROSS JOIN [dbo].[B] AS [t1];"
	);
}

/// Test aliases follow join declaration order
///
/// Verifies that a chain of joins allocates `t1`, `t2` in order and that a
/// join may hang off an earlier join target.
#[rstest]
fn test_join_chain_aliases() {
	let orders = TableRef::named("Sales.Orders");
	let lines = TableRef::named("Sales.OrderLines");
	let products = TableRef::named("Sales.Products");

	let mut query = Query::select(&orders);
	query
		.add_column(orders.col("OrderID"))
		.add_column(products.col("Name"))
		.inner_join(&lines, orders.col("OrderID"), lines.col("OrderID"))
		.left_join(&products, lines.col("ProductID"), products.col("ProductID"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT [t0].[OrderID],[t2].[Name] FROM [Sales].[Orders] AS [t0] \
		 INNER JOIN [Sales].[OrderLines] AS [t1] ON ([t0].[OrderID]=[t1].[OrderID]) \
		 LEFT JOIN [Sales].[Products] AS [t2] ON ([t1].[ProductID]=[t2].[ProductID]);"
	);
}

/// Test multiple ON conditions are AND-ed inside one pair of parentheses
#[rstest]
fn test_join_multiple_conditions() {
	let foo = TableRef::named("dbo.Foo");
	let bar = TableRef::named("dbo.Bar");
	let mut query = Query::select(&foo);
	query.add_join(
		JoinSpec::new(JoinType::Inner, &foo, &bar)
			.on_columns("TenantID", "TenantID")
			.on_columns("BarID", "BarID"),
	);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Foo] AS [t0] INNER JOIN [dbo].[Bar] AS [t1] \
		 ON ([t0].[TenantID]=[t1].[TenantID] AND [t0].[BarID]=[t1].[BarID]);"
	);
}

/// Test value comparisons in ON consume placeholders before WHERE
#[rstest]
fn test_join_filter_condition_binds_before_where() {
	let foo = TableRef::named("dbo.Foo");
	let bar = TableRef::named("dbo.Bar");
	let mut query = Query::select(&foo);
	query
		.add_join(
			JoinSpec::new(JoinType::Left, &foo, &bar)
				.on_columns("BarID", "BarID")
				.on_filter(bar.col("Active").eq(true)),
		)
		.add_filter(foo.col("Name").like("A%"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Foo] AS [t0] LEFT JOIN [dbo].[Bar] AS [t1] \
		 ON ([t0].[BarID]=[t1].[BarID] AND [t1].[Active]=@p0) \
		 WHERE ([t0].[Name] LIKE @p1);"
	);
	assert_eq!(stmt.params()[0].value(), &Value::Bool(Some(true)));
	assert_eq!(stmt.params()[0].param_type(), ParamType::Bit);
	assert_eq!(stmt.params()[1].name(), "@p1");
}

/// Test a group in ON is parenthesized against its AND siblings
#[rstest]
fn test_join_group_condition_is_wrapped() {
	let foo = TableRef::named("dbo.Foo");
	let bar = TableRef::named("dbo.Bar");
	let mut query = Query::select(&foo);
	query.add_join(
		JoinSpec::new(JoinType::Inner, &foo, &bar)
			.on_columns("BarID", "BarID")
			.on_filter(
				Cond::any()
					.add(bar.col("Kind").eq("a"))
					.add(bar.col("Kind").eq("b")),
			),
	);

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Foo] AS [t0] INNER JOIN [dbo].[Bar] AS [t1] \
		 ON ([t0].[BarID]=[t1].[BarID] AND (([t1].[Kind]=@p0) OR ([t1].[Kind]=@p1)));"
	);
}

/// Test a self-join through a second occurrence of the same table
#[rstest]
fn test_self_join() {
	let employee = TableRef::named("dbo.Employee");
	let manager = employee.new_occurrence();
	let mut query = Query::select(&employee);
	query
		.add_column(employee.col("Name"))
		.add_column(manager.col("Name").alias("Manager"))
		.left_join(&manager, employee.col("ManagerID"), manager.col("EmployeeID"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT [t0].[Name],[t1].[Name] AS [Manager] FROM [dbo].[Employee] AS [t0] \
		 LEFT JOIN [dbo].[Employee] AS [t1] ON ([t0].[ManagerID]=[t1].[EmployeeID]);"
	);
}

/// Test explicit aliases are rendered verbatim and do not consume numbers
#[rstest]
fn test_explicit_alias() {
	let contact = TableRef::named("dbo.Contact").alias("c");
	let detail = TableRef::named("dbo.Detail");
	let mut query = Query::select(&contact);
	query.inner_join(&detail, contact.col("ID"), detail.col("ContactID"));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT * FROM [dbo].[Contact] AS [c] \
		 INNER JOIN [dbo].[Detail] AS [t0] ON ([c].[ID]=[t0].[ContactID]);"
	);
}

/// Test joining a derived table continues alias numbering inside it
#[rstest]
fn test_join_derived_table() {
	let contact = TableRef::named("dbo.Contact");
	let orders = TableRef::named("Sales.Orders");

	let mut recent = Query::select(&orders);
	recent
		.add_column(orders.col("ContactID"))
		.add_filter(orders.col("Year").gte(2024_i32));
	let recent = TableRef::subquery(recent);

	let mut query = Query::select(&contact);
	query
		.add_column(contact.col("LastName"))
		.inner_join(&recent, contact.col("ID"), recent.col("ContactID"))
		.add_filter(contact.col("Active").eq(true));

	let stmt = query.render(false).unwrap();

	assert_eq!(
		stmt.sql(),
		"SELECT [t0].[LastName] FROM [dbo].[Contact] AS [t0] INNER JOIN \
		 (SELECT [t2].[ContactID] FROM [Sales].[Orders] AS [t2] WHERE ([t2].[Year]>=@p0)) AS [t1] \
		 ON ([t0].[ID]=[t1].[ContactID]) WHERE ([t0].[Active]=@p1);"
	);
	assert_eq!(stmt.params()[0].value(), &Value::Int(Some(2024)));
	assert_eq!(stmt.params()[1].value(), &Value::Bool(Some(true)));
}
