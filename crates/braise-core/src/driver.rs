mod command;
pub use command::Command;

mod memory;
pub use memory::{MemoryColumn, MemoryCommand, MemoryCursor};

mod row;
pub use row::{Cursor, Row};
