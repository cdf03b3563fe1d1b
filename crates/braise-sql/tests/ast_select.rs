use braise_core::{
    stmt::{Type, Value},
    Column, Table,
};
use braise_sql::{Columns, GroupBy, Node, OrderBy, RawSql, Select, Serializer, TableRef, Where};
use pretty_assertions::assert_eq;

fn people() -> Table {
    Table::new("People")
        .column(Column::new("Id", "Id", Type::I32).primary_key(0))
        .column(Column::new("Name", "Name", Type::String))
        .column(Column::new("Age", "Age", Type::I32))
}

#[test]
fn setting_a_clause_twice_fails() {
    let table = people();

    let err = Select::from_table(&table)
        .filter(Where::raw("Age > 1"))
        .unwrap()
        .filter(Where::raw("Age < 9"))
        .unwrap_err();
    assert!(err.is_already_configured());
    assert_eq!(err.to_string(), "WHERE clause already configured");

    let err = Select::from_table(&table)
        .group_by(GroupBy::raw("Age"))
        .unwrap()
        .group_by(GroupBy::raw("Name"))
        .unwrap_err();
    assert!(err.is_already_configured());

    let err = Select::from_table(&table)
        .order_by(OrderBy::raw("Age"))
        .unwrap()
        .order_by(OrderBy::raw("Name"))
        .unwrap_err();
    assert!(err.is_already_configured());

    let err = Select::from_table(&table)
        .take(1)
        .unwrap()
        .take(2)
        .unwrap_err();
    assert!(err.is_already_configured());
}

#[test]
fn where_and_orders_params_left_then_right() {
    let combined = Where::raw("WHERE Age > @min")
        .param(18)
        .and(Where::raw("Name = @name").param("Ada"));

    assert_eq!(combined.text(), "(Age > @min) AND (Name = @name)");
    assert_eq!(combined.params(), [Value::I32(18), Value::from("Ada")]);
}

#[test]
fn where_or() {
    let combined = Where::raw("A = @a")
        .param(1)
        .or(Where::raw("B = @b").param(2));

    assert_eq!(combined.text(), "(A = @a) OR (B = @b)");
    assert_eq!(combined.params(), [Value::I32(1), Value::I32(2)]);
}

#[test]
fn columns_derive_from_metadata() {
    let table = people();
    assert_eq!(Columns::from_table(&table).text(), "Id, Name, Age");
    assert_eq!(Columns::raw("select Id, Name").text(), "Id, Name");
    assert_eq!(Columns::from_table(&Table::new("Empty")).text(), "*");
    assert_eq!(TableRef::raw("FROM dbo.People").text(), "dbo.People");
}

#[test]
fn raw_select_with_group_by() {
    let select = Select::new(Columns::raw("Age, COUNT(*)"), TableRef::raw("from People"))
        .group_by(GroupBy::raw("group by Age"))
        .unwrap()
        .order_by(OrderBy::raw("ORDER BY Age DESC"))
        .unwrap();

    let stmt = Serializer::top().serialize(&select.into()).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT Age, COUNT(*) FROM People GROUP BY Age ORDER BY Age DESC"
    );
    assert!(stmt.params.is_empty());
}

#[test]
fn raw_sql_keyword_is_optional() {
    let with_keyword = RawSql::raw("SELECT * FROM People WHERE Id = @id").param(7);
    let without = RawSql::raw("* FROM People WHERE Id = @id").param(7);

    let serializer = Serializer::offset_fetch();
    let a = serializer.serialize(&Node::from(with_keyword)).unwrap();
    let b = serializer.serialize(&Node::from(without)).unwrap();

    assert_eq!(a.sql, "SELECT * FROM People WHERE Id = @id");
    assert_eq!(a, b);
    assert_eq!(a.values().collect::<Vec<_>>(), [&Value::I32(7)]);
}

#[test]
fn clause_nodes_render_with_keyword() {
    let serializer = Serializer::top();

    let stmt = serializer
        .serialize(&Node::from(Where::raw("Id = @id").param(1)))
        .unwrap();
    assert_eq!(stmt.sql, "WHERE Id = @id");

    let stmt = serializer.serialize(&Node::from(OrderBy::raw("Name"))).unwrap();
    assert_eq!(stmt.sql, "ORDER BY Name");

    let table = people();
    let stmt = serializer
        .serialize(&Node::from(TableRef::from_table(&table)))
        .unwrap();
    assert_eq!(stmt.sql, "FROM People");
}
