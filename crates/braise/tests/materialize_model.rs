use braise::{
    driver::MemoryCursor,
    err,
    schema::Converter,
    stmt::{Type, TypeEnum, Value, ValueEnum},
    Column, Materializer, Model, ModelSchema, Result, Row, Table,
};
use pretty_assertions::assert_eq;

use std::sync::atomic::Ordering;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum Status {
    #[default]
    Unknown,
    Active,
    Closed,
}

#[derive(Debug, Default, PartialEq)]
struct Person {
    id: i32,
    name: String,
    nickname: Option<String>,
    age: i64,
    status: Status,
    external_id: String,
}

fn status_type() -> TypeEnum {
    TypeEnum::new("Status")
        .variant("Unknown", 0)
        .variant("Active", 1)
        .variant("Closed", 2)
}

impl TryFrom<Value> for Status {
    type Error = braise::Error;

    fn try_from(value: Value) -> Result<Self> {
        let value: ValueEnum = value.try_into()?;
        match value.discriminant {
            0 => Ok(Status::Unknown),
            1 => Ok(Status::Active),
            2 => Ok(Status::Closed),
            other => Err(err!("unknown status {other}")),
        }
    }
}

impl Model for Person {
    fn schema() -> ModelSchema<Self> {
        let table = Table::new("People")
            .column(Column::new("person_id", "Id", Type::I32).primary_key(0))
            .column(Column::new("Name", "Name", Type::String))
            .column(Column::new("Nickname", "Nickname", Type::option(Type::String)))
            .column(Column::new("Age", "Age", Type::I64))
            .column(Column::new("Status", "Status", status_type()))
            .column(Column::new("ExternalId", "ExternalId", Type::String));

        ModelSchema::new(table)
            .default_constructor(Person::default)
            .property("Id", |person, value| {
                person.id = value.try_into()?;
                Ok(())
            })
            .property("Name", |person, value| {
                person.name = value.try_into()?;
                Ok(())
            })
            .property("Nickname", |person, value| {
                person.nickname = value.try_into()?;
                Ok(())
            })
            .property("Age", |person, value| {
                person.age = value.try_into()?;
                Ok(())
            })
            .property("Status", |person, value| {
                person.status = value.try_into()?;
                Ok(())
            })
            .property("ExternalId", |person, value| {
                person.external_id = value.try_into()?;
                Ok(())
            })
    }
}

fn collect<T: Model>(cursor: MemoryCursor) -> Vec<T> {
    Materializer::new()
        .materialize::<T, _>(cursor)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap()
}

#[test]
fn populates_matching_properties() {
    let cursor = MemoryCursor::new()
        .column("person_id", "int", Type::I32)
        .column("Name", "nvarchar", Type::String)
        .row([Value::from(1), Value::from("Ada")])
        .row([Value::from(2), Value::from("Grace")]);

    let people = collect::<Person>(cursor);

    assert_eq!(
        people,
        [
            Person {
                id: 1,
                name: "Ada".to_string(),
                ..Person::default()
            },
            Person {
                id: 2,
                name: "Grace".to_string(),
                ..Person::default()
            },
        ]
    );
}

#[test]
fn null_leaves_natural_defaults() {
    let cursor = MemoryCursor::new()
        .column("person_id", "int", Type::I32)
        .column("Name", "nvarchar", Type::String)
        .column("Nickname", "nvarchar", Type::String)
        .column("Age", "bigint", Type::I64)
        .column("Status", "int", Type::I32)
        .row([Value::Null, Value::Null, Value::Null, Value::Null, Value::Null]);

    let [person] = collect::<Person>(cursor).try_into().unwrap();

    assert_eq!(person, Person::default());
    assert_eq!(person.status, Status::Unknown);
    assert_eq!(person.nickname, None);
}

#[test]
fn unmapped_columns_are_ignored() {
    let cursor = MemoryCursor::new()
        .column("person_id", "int", Type::I32)
        .column("RowVersion", "timestamp", Type::Bytes)
        .row([Value::from(7), Value::Bytes(vec![0, 1])]);

    let [person] = collect::<Person>(cursor).try_into().unwrap();
    assert_eq!(person.id, 7);
}

#[test]
fn differing_types_use_the_general_conversion() {
    let cursor = MemoryCursor::new()
        .column("Age", "int", Type::I32)
        .column("Name", "varchar", Type::I32)
        .row([Value::from(42), Value::from(5)]);

    let [person] = collect::<Person>(cursor).try_into().unwrap();
    assert_eq!(person.age, 42);
    assert_eq!(person.name, "5");
}

#[test]
fn enum_property_uses_enum_converter() {
    let cursor = MemoryCursor::new()
        .column("Status", "tinyint", Type::I16)
        .row([Value::I16(2)])
        .row([Value::I16(1)]);

    let statuses = collect::<Person>(cursor)
        .into_iter()
        .map(|person| person.status)
        .collect::<Vec<_>>();
    assert_eq!(statuses, [Status::Closed, Status::Active]);
}

#[test]
fn guid_column_reads_into_string_property() {
    let id = uuid::Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let cursor = MemoryCursor::new()
        .column("ExternalId", "uniqueidentifier", Type::Uuid)
        .row([Value::Uuid(id)]);

    let [person] = collect::<Person>(cursor).try_into().unwrap();
    assert_eq!(person.external_id, "67e55044-10b1-426f-9247-bb680e5fe0c8");
}

#[test]
fn conversion_failure_names_the_property() {
    let cursor = MemoryCursor::new()
        .column("Age", "nvarchar", Type::String)
        .row([Value::from("old")])
        .row([Value::from("older")]);
    let releases = cursor.releases();

    let mut people = Materializer::new().materialize::<Person, _>(cursor).unwrap();

    let err = people.next().unwrap().unwrap_err();
    assert!(err.to_string().starts_with("cannot populate `Age` of `"), "{err}");
    assert!(err.cause().is_some_and(|cause| cause.is_conversion_failure()));

    assert!(people.next().is_none());
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn read_materializes_the_current_row() {
    use braise::Cursor;

    let mut cursor = MemoryCursor::new()
        .column("person_id", "int", Type::I32)
        .row([Value::from(3)]);
    cursor.advance().unwrap();

    let person = Materializer::new().read::<Person>(&cursor).unwrap();
    assert_eq!(person.id, 3);
}

/// Stores labels upper-cased.
#[derive(Debug)]
struct Shout;

impl Converter for Shout {
    fn from_db(&self, value: Value) -> Result<Value> {
        let value: String = value.try_into()?;
        Ok(value.to_uppercase().into())
    }

    fn to_db(&self, value: Value) -> Result<Value> {
        let value: String = value.try_into()?;
        Ok(value.to_lowercase().into())
    }
}

#[derive(Debug, Default)]
struct Tag {
    label: String,
    source: String,
}

impl Model for Tag {
    fn schema() -> ModelSchema<Self> {
        let table = Table::new("Tags")
            .column(Column::new("Label", "Label", Type::String).converter(Shout))
            .column(Column::new("Source", "Source", Type::String));

        ModelSchema::new(table)
            .default_constructor(Tag::default)
            .property("Label", |tag, value| {
                tag.label = value.try_into()?;
                Ok(())
            })
            .property("Source", |tag, value| {
                tag.source = value.try_into()?;
                Ok(())
            })
            .inject("Source", || Value::from("import"))
    }
}

#[test]
fn explicit_converter_wins() {
    let cursor = MemoryCursor::new()
        .column("Label", "nvarchar", Type::String)
        .row([Value::from("rust")]);

    let [tag] = collect::<Tag>(cursor).try_into().unwrap();
    assert_eq!(tag.label, "RUST");
}

#[test]
fn injected_property_bypasses_the_row() {
    let cursor = MemoryCursor::new()
        .column("Label", "nvarchar", Type::String)
        .column("Source", "nvarchar", Type::String)
        .row([Value::from("a"), Value::from("row")]);

    let [tag] = collect::<Tag>(cursor).try_into().unwrap();
    assert_eq!(tag.source, "import");

    // Injection does not depend on the row having the column at all.
    let cursor = MemoryCursor::new()
        .column("Label", "nvarchar", Type::String)
        .row([Value::from("b")]);

    let [tag] = collect::<Tag>(cursor).try_into().unwrap();
    assert_eq!(tag.source, "import");
}

#[derive(Debug, Default)]
struct Event {
    year: i32,
    month: i32,
    day: i32,
    date: Option<chrono::NaiveDate>,
}

impl Model for Event {
    fn schema() -> ModelSchema<Self> {
        let table = Table::new("Events")
            .column(Column::new("Year", "Year", Type::I32))
            .column(Column::new("Month", "Month", Type::I32));

        ModelSchema::new(table)
            .default_constructor(Event::default)
            .property("Year", |event, value| {
                event.year = value.try_into()?;
                Ok(())
            })
            .property("Month", |event, value| {
                event.month = value.try_into()?;
                Ok(())
            })
            .on_materialize(|event, row| {
                // The day has no mapped column; read it straight from the row.
                if let Some(ordinal) = row.ordinal("Day") {
                    event.day = row.get_i32(ordinal)?;
                }

                event.date = chrono::NaiveDate::from_ymd_opt(
                    event.year,
                    u32::try_from(event.month).map_err(|_| err!("bad month"))?,
                    u32::try_from(event.day).map_err(|_| err!("bad day"))?,
                );
                Ok(())
            })
    }
}

#[test]
fn materialize_hook_composes_derived_fields() {
    let cursor = MemoryCursor::new()
        .column("Year", "int", Type::I32)
        .column("Month", "int", Type::I32)
        .column("Day", "int", Type::I32)
        .row([2024, 2, 29]);

    let [event] = collect::<Event>(cursor).try_into().unwrap();
    assert_eq!(event.day, 29);
    assert_eq!(event.date, chrono::NaiveDate::from_ymd_opt(2024, 2, 29));
}

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
    label: Option<String>,
}

impl Model for Point {
    fn schema() -> ModelSchema<Self> {
        let table = Table::new("Points")
            .column(Column::new("X", "x", Type::I32))
            .column(Column::new("Y", "y", Type::I32))
            .column(Column::new("Label", "label", Type::option(Type::String)));

        ModelSchema::new(table).constructor(
            braise::Constructor::new(|values| {
                let [x, y, label]: [Value; 3] = values
                    .try_into()
                    .map_err(|_| err!("expected three arguments"))?;

                Ok(Point {
                    x: x.try_into()?,
                    y: y.try_into()?,
                    label: label.try_into()?,
                })
            })
            .param("x", Type::I32)
            .param("y", Type::I32)
            .param("label", Type::option(Type::String)),
        )
    }
}

#[test]
fn single_constructor_is_fed_by_name() {
    let cursor = MemoryCursor::new()
        .column("label", "nvarchar", Type::String)
        .column("Y", "int", Type::I32)
        .column("X", "bigint", Type::I64)
        .row([Value::from("origin"), Value::I32(0), Value::I64(0)])
        .row([Value::Null, Value::Null, Value::I64(4)]);

    let points = collect::<Point>(cursor);

    assert_eq!(
        points,
        [
            Point {
                x: 0,
                y: 0,
                label: Some("origin".to_string()),
            },
            Point {
                x: 4,
                y: 0,
                label: None,
            },
        ]
    );
}

#[test]
fn constructor_parameter_without_column_gets_default() {
    let cursor = MemoryCursor::new()
        .column("X", "int", Type::I32)
        .row([9]);

    let [point] = collect::<Point>(cursor).try_into().unwrap();
    assert_eq!(
        point,
        Point {
            x: 9,
            y: 0,
            label: None,
        }
    );
}

struct Ambiguous;

impl Model for Ambiguous {
    fn schema() -> ModelSchema<Self> {
        ModelSchema::new(Table::new("Ambiguous"))
            .constructor(braise::Constructor::new(|_| Ok(Ambiguous)))
            .constructor(braise::Constructor::new(|_| Ok(Ambiguous)).param("id", Type::I32))
    }
}

#[test]
fn ambiguous_constructor_is_an_error() {
    let cursor = MemoryCursor::new().column("id", "int", Type::I32).row([1]);
    let releases = cursor.releases();

    let Err(err) = Materializer::new().materialize::<Ambiguous, _>(cursor) else {
        panic!("expected an ambiguous constructor error");
    };

    assert!(err.is_ambiguous_constructor());
    assert!(err.to_string().contains("Ambiguous"), "{err}");
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[derive(Debug, PartialEq)]
struct Account {
    id: i32,
    owner: String,
}

impl Model for Account {
    fn schema() -> ModelSchema<Self> {
        let table = Table::new("Accounts")
            .column(Column::new("person_id", "Id", Type::I32).primary_key(0))
            .column(Column::new("owner_name", "Owner", Type::String));

        ModelSchema::new(table).constructor(
            braise::Constructor::new(|values| {
                let [id, owner]: [Value; 2] = values
                    .try_into()
                    .map_err(|_| err!("expected two arguments"))?;

                Ok(Account {
                    id: id.try_into()?,
                    owner: owner.try_into()?,
                })
            })
            .param("Id", Type::I32)
            .param("Owner", Type::String),
        )
    }
}

#[test]
fn fields_aliased_to_the_property_feed_both_paths() {
    let row = || {
        MemoryCursor::new()
            .column("Id", "int", Type::I32)
            .column("Owner", "nvarchar", Type::String)
            .row([Value::I32(42), Value::from("ada")])
    };

    let [person] = collect::<Person>(row()).try_into().unwrap();
    assert_eq!(person.id, 42);

    let [account] = collect::<Account>(row()).try_into().unwrap();
    assert_eq!(
        account,
        Account {
            id: 42,
            owner: "ada".to_string(),
        }
    );
}

#[test]
fn constructor_prefers_the_column_name() {
    let cursor = MemoryCursor::new()
        .column("Id", "int", Type::I32)
        .column("person_id", "int", Type::I32)
        .column("owner_name", "nvarchar", Type::String)
        .row([Value::I32(1), Value::I32(2), Value::from("ada")]);

    let [account] = collect::<Account>(cursor).try_into().unwrap();
    assert_eq!(account.id, 2);
}
