//! PostgreSQL rendering of the persisted layout.

use super::{ColumnDef, TableDef, CATALOG};

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn column_sql(col: &ColumnDef) -> String {
    let mut sql = format!("{} {}", quote_ident(col.name), col.ty.sql_name());
    if col.primary_key {
        sql.push_str(" PRIMARY KEY");
    }
    if !col.nullable {
        sql.push_str(" NOT NULL");
    }
    sql
}

pub fn create_table_sql(table: &TableDef) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("\t{}", column_sql(c)))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
        quote_ident(table.name),
        columns.join(",\n")
    )
}

pub fn catalog_sql() -> String {
    CATALOG
        .iter()
        .map(|t| create_table_sql(t))
        .collect::<Vec<_>>()
        .join("\n\n")
}
