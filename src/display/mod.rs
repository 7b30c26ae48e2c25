//! Fixed-width table rendering.

mod table;

pub use table::{write_record, write_table, EMPTY_MESSAGE, RULE_WIDTH, TABLE_HEADER};
