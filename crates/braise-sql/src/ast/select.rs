use super::{Columns, GroupBy, OrderBy, TableRef, Where};
use braise_core::{Error, Result, Table};

/// A SELECT statement assembled one clause at a time.
///
/// Every clause may be set at most once; setting it again fails with an
/// "already configured" error.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    columns: Columns<'a>,
    from: TableRef<'a>,
    filter: Option<Where>,
    group_by: Option<GroupBy>,
    order_by: Option<OrderBy>,
    skip: Option<usize>,
    take: Option<usize>,
}

impl<'a> Select<'a> {
    pub fn new(columns: Columns<'a>, from: TableRef<'a>) -> Self {
        Self {
            columns,
            from,
            filter: None,
            group_by: None,
            order_by: None,
            skip: None,
            take: None,
        }
    }

    /// Selects every mapped column of `table`.
    pub fn from_table(table: &'a Table) -> Self {
        Self::new(Columns::from_table(table), TableRef::from_table(table))
    }

    pub fn filter(mut self, filter: Where) -> Result<Self> {
        set_once(&mut self.filter, filter, "WHERE")?;
        Ok(self)
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Result<Self> {
        set_once(&mut self.group_by, group_by, "GROUP BY")?;
        Ok(self)
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Result<Self> {
        set_once(&mut self.order_by, order_by, "ORDER BY")?;
        Ok(self)
    }

    pub fn skip(mut self, skip: usize) -> Result<Self> {
        set_once(&mut self.skip, skip, "SKIP")?;
        Ok(self)
    }

    pub fn take(mut self, take: usize) -> Result<Self> {
        set_once(&mut self.take, take, "TAKE")?;
        Ok(self)
    }

    pub fn columns(&self) -> &Columns<'a> {
        &self.columns
    }

    pub fn from(&self) -> &TableRef<'a> {
        &self.from
    }

    pub fn filter_clause(&self) -> Option<&Where> {
        self.filter.as_ref()
    }

    pub fn group_by_clause(&self) -> Option<&GroupBy> {
        self.group_by.as_ref()
    }

    pub fn order_by_clause(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn skip_count(&self) -> Option<usize> {
        self.skip
    }

    pub fn take_count(&self) -> Option<usize> {
        self.take
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, clause: &'static str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::already_configured(clause));
    }
    *slot = Some(value);
    Ok(())
}
