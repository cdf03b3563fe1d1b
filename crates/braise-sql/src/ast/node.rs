use super::{GroupBy, OrderBy, RawSql, Select, TableRef, Where};

#[derive(Debug, Clone)]
pub enum Node<'a> {
    Select(Select<'a>),
    Table(TableRef<'a>),
    Where(Where),
    GroupBy(GroupBy),
    OrderBy(OrderBy),
    RawSql(RawSql),
}

impl<'a> From<Select<'a>> for Node<'a> {
    fn from(value: Select<'a>) -> Self {
        Self::Select(value)
    }
}

impl<'a> From<TableRef<'a>> for Node<'a> {
    fn from(value: TableRef<'a>) -> Self {
        Self::Table(value)
    }
}

impl From<Where> for Node<'_> {
    fn from(value: Where) -> Self {
        Self::Where(value)
    }
}

impl From<GroupBy> for Node<'_> {
    fn from(value: GroupBy) -> Self {
        Self::GroupBy(value)
    }
}

impl From<OrderBy> for Node<'_> {
    fn from(value: OrderBy) -> Self {
        Self::OrderBy(value)
    }
}

impl From<RawSql> for Node<'_> {
    fn from(value: RawSql) -> Self {
        Self::RawSql(value)
    }
}
