use braise::{
    driver::MemoryCursor,
    sql::RowLimiter,
    stmt::{Expr, Type, Value},
    Column, Materializer, Model, ModelSchema, Query, Result, Serializer, Table,
};
use pretty_assertions::assert_eq;

use std::sync::atomic::Ordering;

#[derive(Debug, Default, PartialEq)]
struct Item {
    id: i32,
}

fn table() -> Table {
    Table::new("Items").column(Column::new("Id", "Id", Type::I32).primary_key(0))
}

impl Model for Item {
    fn schema() -> ModelSchema<Self> {
        ModelSchema::new(table())
            .default_constructor(Item::default)
            .property("Id", |item, value| {
                item.id = value.try_into()?;
                Ok(())
            })
    }
}

fn items(count: i32) -> MemoryCursor {
    (0..count).fold(
        MemoryCursor::new().column("Id", "int", Type::I32),
        |cursor, id| cursor.row([id]),
    )
}

fn ids(rows: impl Iterator<Item = Result<Item>>) -> Vec<i32> {
    rows.map(|item| item.unwrap().id).collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn rows_are_read_on_demand() {
    init_tracing();

    let cursor = items(3);
    let releases = cursor.releases();

    let materializer = Materializer::new();
    let mut rows = materializer.materialize::<Item, _>(cursor).unwrap();

    assert_eq!(rows.next().unwrap().unwrap(), Item { id: 0 });
    assert_eq!(releases.load(Ordering::SeqCst), 0);

    assert_eq!(ids(rows.by_ref()), [1, 2]);
    assert_eq!(releases.load(Ordering::SeqCst), 1);

    assert!(rows.next().is_none());
    drop(rows);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_early_releases_once() {
    let cursor = items(5);
    let releases = cursor.releases();

    let mut rows = Materializer::new().materialize::<Item, _>(cursor).unwrap();
    rows.next();
    drop(rows);

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn explicit_close_stops_the_sequence() {
    let cursor = items(5);
    let releases = cursor.releases();

    let mut rows = Materializer::new().materialize::<Item, _>(cursor).unwrap();
    rows.next();
    rows.close();
    rows.close();

    assert!(rows.next().is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn cursor_error_ends_the_sequence() {
    let cursor = items(5).fail_at(2);
    let releases = cursor.releases();

    let mut rows = Materializer::new().materialize::<Item, _>(cursor).unwrap();
    assert_eq!(rows.next().unwrap().unwrap().id, 0);
    assert_eq!(rows.next().unwrap().unwrap().id, 1);

    let err = rows.next().unwrap().unwrap_err();
    assert_eq!(err.to_string(), "failed to read row 2");

    assert!(rows.next().is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn limiter_skips_and_takes_on_the_reader_side() {
    let limiter = RowLimiter {
        skip: 2,
        take: Some(3),
    };

    let cursor = items(10);
    let releases = cursor.releases();

    let rows = Materializer::new()
        .materialize::<Item, _>(cursor)
        .unwrap()
        .limit(limiter);

    assert_eq!(ids(rows), [2, 3, 4]);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn top_dialect_statement_drives_the_limiter() {
    let table = table();
    let query = Query::new(&table)
        .filter(Expr::ge(Expr::member("Id", Type::I32), 0i32))
        .order_by(Expr::member("Id", Type::I32))
        .skip(1i32)
        .take(2i32);

    let stmt = Serializer::top().translate(&query).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT TOP 3 Id FROM Items WHERE (Id >= @0) ORDER BY Id"
    );
    assert_eq!(stmt.values().collect::<Vec<_>>(), [&Value::I32(0)]);

    let rows = Materializer::new()
        .materialize::<Item, _>(items(3))
        .unwrap()
        .limit(stmt.limiter);

    assert_eq!(ids(rows), [1, 2]);
}

#[test]
fn no_limiter_reads_everything() {
    let rows = Materializer::new()
        .materialize::<Item, _>(items(4))
        .unwrap()
        .limit(None);

    assert_eq!(ids(rows), [0, 1, 2, 3]);
}
