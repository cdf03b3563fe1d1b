mod column;
pub use column::{Column, Generated};

mod converter;
pub use converter::{Converter, EnumConverter, GenericConverter, GuidStringConverter};

mod table;
pub use table::Table;
