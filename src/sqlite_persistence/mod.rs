mod table_schema;

pub use table_schema::{quote_identifier, Column, SqlType, Table};
