use braise::{
    driver::MemoryCursor,
    stmt::{Type, Value},
    Materializer, Result,
};
use pretty_assertions::assert_eq;

fn scalars<T: braise::Scalar>(cursor: MemoryCursor) -> Vec<T> {
    Materializer::new()
        .materialize_scalar::<T, _>(cursor)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

fn ints(ty: Type, values: impl IntoIterator<Item = Value>) -> MemoryCursor {
    values
        .into_iter()
        .fold(MemoryCursor::new().column("Value", "int", ty), |cursor, value| {
            cursor.row([value])
        })
}

#[test]
fn matching_type_passes_through() {
    let cursor = ints(Type::I32, [Value::I32(1), Value::I32(-2)]);
    assert_eq!(scalars::<i32>(cursor), [1, -2]);
}

#[test]
fn null_reads_as_default() {
    let cursor = ints(Type::I32, [Value::Null, Value::I32(5)]);
    assert_eq!(scalars::<i32>(cursor), [0, 5]);

    let cursor = ints(Type::I32, [Value::Null, Value::I32(5)]);
    assert_eq!(scalars::<Option<i32>>(cursor), [None, Some(5)]);
}

#[test]
fn other_types_are_converted() {
    let cursor = ints(Type::I32, [Value::I32(7)]);
    assert_eq!(scalars::<i64>(cursor), [7]);

    let cursor = ints(Type::I64, [Value::I64(3)]);
    assert_eq!(scalars::<String>(cursor), ["3"]);

    let cursor = MemoryCursor::new()
        .column("Total", "decimal", Type::F64)
        .row([2.5]);
    assert_eq!(scalars::<f64>(cursor), [2.5]);
}

#[test]
fn only_the_first_column_is_read() {
    let cursor = MemoryCursor::new()
        .column("Name", "nvarchar", Type::String)
        .column("Id", "int", Type::I32)
        .row([Value::from("Ada"), Value::from(1)]);

    assert_eq!(scalars::<String>(cursor), ["Ada"]);
}

#[test]
fn narrowing_overflow_fails() {
    let cursor = ints(Type::I64, [Value::I64(i64::MAX)]);

    let err = Materializer::new()
        .materialize_scalar::<i16, _>(cursor)
        .unwrap()
        .next()
        .unwrap()
        .unwrap_err();
    assert!(err.is_conversion_failure());
}

#[test]
fn row_without_columns_is_rejected() {
    let cursor = MemoryCursor::new().row(Vec::<Value>::new());
    assert!(Materializer::new().materialize_scalar::<i32, _>(cursor).is_err());
}
