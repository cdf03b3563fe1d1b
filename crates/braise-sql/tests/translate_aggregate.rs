use braise_core::{
    stmt::{Expr, Type},
    Column, Table,
};
use braise_sql::{Query, Serializer};
use pretty_assertions::assert_eq;

fn people() -> Table {
    Table::new("People")
        .column(Column::new("Id", "Id", Type::I32).primary_key(0))
        .column(Column::new("Name", "Name", Type::String))
        .column(Column::new("Age", "Age", Type::I32))
}

fn age() -> Expr {
    Expr::member("Age", Type::I32)
}

#[test]
fn count_drops_ordering() {
    let table = people();
    let query = Query::new(&table)
        .filter(Expr::gt(age(), 18i32))
        .order_by(Expr::member("Name", Type::String))
        .count();

    let stmt = Serializer::top().translate(&query).unwrap();
    assert_eq!(stmt.sql, "SELECT COUNT(*) FROM People WHERE (Age > @0)");
}

#[test]
fn count_with_predicate() {
    let table = people();
    let query = Query::new(&table)
        .filter(Expr::gt(age(), 18i32))
        .count_where(Expr::lt(age(), 65i32));

    let stmt = Serializer::top().translate(&query).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT COUNT(*) FROM People WHERE ((Age > @0)) AND ((Age < @1))"
    );
}

#[test]
fn any_wraps_in_exists() {
    let table = people();
    let query = Query::new(&table).any_where(Expr::eq(Expr::member("Name", Type::String), "Ada"));

    let stmt = Serializer::offset_fetch().translate(&query).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT (CASE WHEN EXISTS(SELECT '' FROM People WHERE (Name = @0)) THEN 1 ELSE 0 END)"
    );
}

#[test]
fn any_without_predicate() {
    let table = people();
    let stmt = Serializer::top().translate(&Query::new(&table).any()).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT (CASE WHEN EXISTS(SELECT '' FROM People) THEN 1 ELSE 0 END)"
    );
}

#[test]
fn min_max_sum_average() {
    let table = people();
    let serializer = Serializer::top();

    let cases = [
        (Query::new(&table).min(age()), "SELECT MIN(Age) FROM People"),
        (Query::new(&table).max(age()), "SELECT MAX(Age) FROM People"),
        (Query::new(&table).sum(age()), "SELECT SUM(Age) FROM People"),
        (Query::new(&table).average(age()), "SELECT AVG(Age) FROM People"),
    ];

    for (query, expected) in cases {
        assert_eq!(serializer.translate(&query).unwrap().sql, expected);
    }
}

#[test]
fn aggregate_keeps_ordering_when_paged() {
    let table = people();
    let query = Query::new(&table)
        .order_by(age())
        .skip(1i32)
        .take(2i32)
        .max(age());

    let stmt = Serializer::offset_fetch().translate(&query).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT MAX(Age) FROM People ORDER BY Age OFFSET 1 ROWS FETCH NEXT 2 ROWS ONLY"
    );
}

#[test]
fn aggregate_with_reader_side_skip_is_unsupported() {
    let table = people();
    let query = Query::new(&table).order_by(age()).skip(1i32).count();

    let err = Serializer::top().translate(&query).unwrap_err();
    assert!(err.is_unsupported_operation());
}

#[test]
fn aggregate_with_take_and_no_skip_is_unsupported() {
    let table = people();

    for serializer in [
        Serializer::top(),
        Serializer::row_number(),
        Serializer::offset_fetch(),
    ] {
        let err = serializer
            .translate(&Query::new(&table).take(5i32).count())
            .unwrap_err();
        assert!(err.is_unsupported_operation());
        assert_eq!(
            err.to_string(),
            "unsupported operation: Count with Take and no Skip"
        );

        let err = serializer
            .translate(&Query::new(&table).take(5i32).sum(age()))
            .unwrap_err();
        assert!(err.is_unsupported_operation());
    }

    // Any only asks whether a row exists, so the limit is harmless.
    let stmt = Serializer::top()
        .translate(&Query::new(&table).take(5i32).any())
        .unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT (CASE WHEN EXISTS(SELECT TOP 5 '' FROM People) THEN 1 ELSE 0 END)"
    );
}

#[test]
fn group_by_and_select_are_unsupported() {
    let table = people();

    let err = Serializer::top()
        .translate(&Query::new(&table).group_by(age()))
        .unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(err.to_string().contains("GroupBy"), "{err}");

    let err = Serializer::top()
        .translate(&Query::new(&table).select(age()))
        .unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(err.to_string().contains("Select"), "{err}");
}

#[test]
fn operators_after_an_aggregate_are_unsupported() {
    let table = people();
    let query = Query::new(&table).count().filter(Expr::gt(age(), 1i32));

    let err = Serializer::top().translate(&query).unwrap_err();
    assert!(err.is_unsupported_operation());
    assert_eq!(err.to_string(), "unsupported operation: Where after Count");
}
