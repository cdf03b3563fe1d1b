use super::Serializer;
use braise_core::Error;

use std::{fmt, str::FromStr};

/// How a dialect emits paging.
///
/// All dialects emit `TOP n` when a query takes rows without skipping any.
/// They differ once rows are skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// No native offset. Emits `TOP (skip + take)` and leaves the skip to a
    /// reader-side limiter.
    #[default]
    Top,

    /// Numbers rows with `ROW_NUMBER()` inside a common table expression
    /// and filters on the number.
    RowNumber,

    /// Native `OFFSET n ROWS [FETCH NEXT m ROWS ONLY]`.
    OffsetFetch,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::RowNumber => "row_number",
            Self::OffsetFetch => "offset_fetch",
        }
    }

    /// Returns true if the dialect skips rows in SQL.
    pub fn has_native_offset(self) -> bool {
        !matches!(self, Self::Top)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == ' ', "_");

        match name.as_str() {
            "top" | "sqlserver" | "sqlserver2005" => Ok(Self::Top),
            "row_number" | "rownumber" | "cte" | "sqlserver2008" => Ok(Self::RowNumber),
            "offset_fetch" | "offsetfetch" | "offset" | "sqlserver2012" => Ok(Self::OffsetFetch),
            _ => Err(braise_core::err!("unknown SQL dialect `{s}`")),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serializer {
    pub fn top() -> Serializer {
        Serializer::new(Dialect::Top)
    }

    pub fn row_number() -> Serializer {
        Serializer::new(Dialect::RowNumber)
    }

    pub fn offset_fetch() -> Serializer {
        Serializer::new(Dialect::OffsetFetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("SqlServer2008".parse::<Dialect>().unwrap(), Dialect::RowNumber);
        assert_eq!("offset-fetch".parse::<Dialect>().unwrap(), Dialect::OffsetFetch);
        assert_eq!(" top ".parse::<Dialect>().unwrap(), Dialect::Top);
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for dialect in [Dialect::Top, Dialect::RowNumber, Dialect::OffsetFetch] {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }
}
