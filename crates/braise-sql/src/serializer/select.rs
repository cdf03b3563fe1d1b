use super::{Dialect, Formatter, Params, Serializer, ToSql};
use crate::{ast::Select, ParamSource, RowLimiter, Statement};

use braise_core::{stmt::Value, Error, Result};

impl Serializer {
    /// Renders a SELECT, applying the dialect's paging.
    pub fn serialize_select(&self, select: &Select<'_>) -> Result<Statement> {
        let mut unused = Vec::<Value>::new();
        let mut f = Formatter::new(self, &mut unused, select.from().table());
        let limiter = select_to_sql(select, &mut f)?;
        let sql = f.dst;

        tracing::trace!(sql = %sql, dialect = %self.dialect, "rendered select");

        Ok(Statement {
            sql,
            params: select
                .filter_clause()
                .map(ParamSource::from)
                .into_iter()
                .collect(),
            limiter,
        })
    }
}

fn select_to_sql<P: Params>(
    select: &Select<'_>,
    f: &mut Formatter<'_, P>,
) -> Result<Option<RowLimiter>> {
    let take = select.take_count();

    let Some(skip) = select.skip_count() else {
        head(select, f, take)?;
        clauses(select, f, true)?;
        return Ok(None);
    };

    let Some(order_by) = select.order_by_clause() else {
        return Err(Error::invalid_query(
            "Skip requires OrderBy; row order is undefined without it",
        ));
    };

    match f.serializer.dialect {
        Dialect::Top => {
            let top = take
                .map(|take| {
                    skip.checked_add(take)
                        .ok_or_else(|| Error::invalid_query("Skip + Take overflows"))
                })
                .transpose()?;

            head(select, f, top)?;
            clauses(select, f, true)?;
            Ok(Some(RowLimiter { skip, take }))
        }
        Dialect::RowNumber => {
            fmt!(f, "WITH Results_CTE AS (SELECT " select.columns().text()
                ", ROW_NUMBER() OVER (ORDER BY " order_by.text() ") AS __RowNum__ FROM "
                select.from().text());
            clauses(select, f, false)?;
            fmt!(f, ") SELECT * FROM Results_CTE WHERE __RowNum__ > " skip);

            if let Some(take) = take {
                let end = skip
                    .checked_add(take)
                    .ok_or_else(|| Error::invalid_query("Skip + Take overflows"))?;
                fmt!(f, " AND __RowNum__ <= " end);
            }

            Ok(None)
        }
        Dialect::OffsetFetch => {
            head(select, f, None)?;
            clauses(select, f, true)?;
            fmt!(f, " OFFSET " skip " ROWS");

            if let Some(take) = take {
                fmt!(f, " FETCH NEXT " take " ROWS ONLY");
            }

            Ok(None)
        }
    }
}

/// `SELECT [TOP n] <columns> FROM <table>`
fn head<P: Params>(select: &Select<'_>, f: &mut Formatter<'_, P>, top: Option<usize>) -> Result<()> {
    fmt!(f, "SELECT ");

    if let Some(top) = top {
        fmt!(f, "TOP " top " ");
    }

    fmt!(f, select.columns().text() " FROM " select.from().text());
    Ok(())
}

/// `[WHERE ...] [GROUP BY ...] [ORDER BY ...]`
fn clauses<P: Params>(select: &Select<'_>, f: &mut Formatter<'_, P>, order: bool) -> Result<()> {
    if let Some(filter) = select.filter_clause() {
        fmt!(f, " WHERE " filter.text());
    }

    if let Some(group_by) = select.group_by_clause() {
        fmt!(f, " GROUP BY " group_by.text());
    }

    if let Some(order_by) = select.order_by_clause().filter(|_| order) {
        fmt!(f, " ORDER BY " order_by.text());
    }

    Ok(())
}
