use super::{Formatter, Params};
use braise_core::Result;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for &String {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

macro_rules! impl_to_sql_for_integer {
    ($($ty:ty),*) => {
        $(
            impl ToSql for $ty {
                fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
                    f.dst.push_str(&self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

impl_to_sql_for_integer!(i64, usize);
