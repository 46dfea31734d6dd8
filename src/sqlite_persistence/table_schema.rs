use anyhow::{bail, Result};
use rusqlite::{params, types::Type, Connection};

#[macro_export]
macro_rules! sqlite_column {
    ($name:expr, $sql_type:expr $(, $field:ident = $value:expr)*) => {
        {
            // Allow unused_mut because the variable is only mutated when optional
            // field assignments are passed to the macro (e.g., `non_null = true`)
            #[allow(unused_mut)]
            let mut column = Column {
                name: $name,
                sql_type: $sql_type,
                non_null: false,
            };
            $(
                column.$field = $value;
            )*
            column
        }
    };
}

#[derive(Debug, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Integer,
    Real,
}

impl SqlType {
    fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
        }
    }

    fn from_sql(s: &str) -> Option<&'static SqlType> {
        match s {
            "TEXT" => Some(&SqlType::Text),
            "INTEGER" => Some(&SqlType::Integer),
            "REAL" => Some(&SqlType::Real),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Column<'a, S: AsRef<str>> {
    pub name: S,
    pub sql_type: &'a SqlType,
    pub non_null: bool,
}

/// Column layout of a table whose name is only known at runtime.
///
/// The pipeline writes to a configurable table, so every statement builder
/// takes the table name as an argument and quotes it.
pub struct Table {
    pub columns: &'static [Column<'static, &'static str>],
}

/// Quotes an SQL identifier with double quotes, escaping embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl Table {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn create_sql(&self, table_name: &str) -> String {
        let mut create_sql = format!("CREATE TABLE {} (", quote_identifier(table_name));
        for (column_index, column) in self.columns.iter().enumerate() {
            if column_index > 0 {
                create_sql.push_str(", ");
            }
            create_sql.push_str(&format!(
                "{} {}",
                quote_identifier(column.name),
                column.sql_type.as_sql()
            ));
            if column.non_null {
                create_sql.push_str(" NOT NULL");
            }
        }
        create_sql.push_str(");");
        create_sql
    }

    pub fn insert_sql(&self, table_name: &str) -> String {
        let names = self
            .columns
            .iter()
            .map(|c| quote_identifier(c.name))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(table_name),
            names,
            placeholders
        )
    }

    pub fn create(&self, conn: &Connection, table_name: &str) -> Result<()> {
        conn.execute(&self.create_sql(table_name), params![])?;
        Ok(())
    }

    /// Drops `table_name` if present and creates it again, empty.
    pub fn replace(&self, conn: &Connection, table_name: &str) -> Result<()> {
        conn.execute(
            &format!("DROP TABLE IF EXISTS {};", quote_identifier(table_name)),
            params![],
        )?;
        self.create(conn, table_name)
    }

    pub fn count_rows(&self, conn: &Connection, table_name: &str) -> Result<i64> {
        let count = conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", quote_identifier(table_name)),
            [],
            |r| r.get(0),
        )?;
        Ok(count)
    }

    pub fn validate(&self, conn: &Connection, table_name: &str) -> Result<()> {
        let mut stmt = conn.prepare(&format!(
            "PRAGMA table_info({});",
            quote_identifier(table_name)
        ))?;
        let actual_columns: Vec<Result<Column<'_, String>, rusqlite::Error>> = stmt
            .query_map(params![], |row| {
                let name = row.get::<usize, String>(1)?;
                let sql_type = SqlType::from_sql(row.get::<_, String>(2)?.as_str())
                    .ok_or_else(|| {
                        rusqlite::Error::InvalidColumnType(2, "type".to_string(), Type::Text)
                    })?;
                Ok(Column {
                    name,
                    sql_type,
                    non_null: row.get::<_, i32>(3)? == 1,
                })
            })?
            .collect();

        if actual_columns.is_empty() {
            bail!("Table {} does not exist", table_name);
        }

        if actual_columns.len() != self.columns.len() {
            bail!(
                "Table {} has {} columns, expected {}. Found column names: {}, expected: {}",
                table_name,
                actual_columns.len(),
                self.columns.len(),
                actual_columns
                    .iter()
                    .filter_map(|c| c.as_ref().ok().map(|c| c.name.clone()))
                    .collect::<Vec<String>>()
                    .join(", "),
                self.column_names().join(", ")
            );
        }

        for (actual_column_result, expected_column) in
            actual_columns.iter().zip(self.columns.iter())
        {
            let actual_column = match actual_column_result {
                Ok(column) => column,
                Err(e) => bail!("Error reading column: {:?}", e),
            };
            if actual_column.name != expected_column.name {
                bail!(
                    "Table {} Column name mismatch: expected {}, got {}",
                    table_name,
                    expected_column.name,
                    actual_column.name
                );
            }
            if actual_column.sql_type != expected_column.sql_type {
                bail!(
                    "Table {} Column {} type mismatch: expected {:?}, got {:?}",
                    table_name,
                    expected_column.name,
                    expected_column.sql_type,
                    actual_column.sql_type
                );
            }
            if actual_column.non_null != expected_column.non_null {
                bail!(
                    "Table {} Column {} non-null mismatch: expected {}, got {}",
                    table_name,
                    expected_column.name,
                    expected_column.non_null,
                    actual_column.non_null
                );
            }
        }
        Ok(())
    }
}
