//! Table definitions for the household reporting store.
//!
//! Every table is declared once as a `TableDef` constant in [`catalog`]. The
//! validation engine and the DDL renderer both read from these definitions, so
//! the persisted layout and the accepted insert shape cannot drift apart.

pub mod catalog;
pub mod ddl;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::validation::{self, ValidationError};

pub use catalog::{table, table_names, CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericPrecision {
    pub precision: u32,
    pub scale: u32,
}

impl NumericPrecision {
    /// Digits allowed left of the decimal point.
    pub fn integer_digits(&self) -> u32 {
        self.precision.saturating_sub(self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    /// Auto-incrementing integer assigned by the store.
    Serial,
    /// `numeric`, optionally constrained to `(precision, scale)`.
    Decimal(Option<NumericPrecision>),
    /// `timestamp` without time zone.
    Timestamp,
}

impl ColumnType {
    pub fn sql_name(&self) -> String {
        match self {
            ColumnType::Text => "text".to_string(),
            ColumnType::Integer => "integer".to_string(),
            ColumnType::Serial => "serial".to_string(),
            ColumnType::Decimal(Some(p)) => format!("numeric({}, {})", p.precision, p.scale),
            ColumnType::Decimal(None) => "numeric".to_string(),
            ColumnType::Timestamp => "timestamp".to_string(),
        }
    }

    /// Name used in validation messages for the JSON shape this column expects.
    pub fn expected_json(&self) -> &'static str {
        match self {
            ColumnType::Text => "string",
            ColumnType::Integer | ColumnType::Serial => "integer",
            ColumnType::Decimal(_) => "decimal string",
            ColumnType::Timestamp => "timestamp string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    /// Left out of the insertable shape; the store supplies the value.
    pub omit_on_insert: bool,
}

impl ColumnDef {
    const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            primary_key: false,
            omit_on_insert: false,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub const fn serial(name: &'static str) -> Self {
        Self::new(name, ColumnType::Serial)
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, ColumnType::Timestamp)
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self::new(name, ColumnType::Decimal(None))
    }

    /// `numeric(10, 2)`, the money type used throughout the reporting tables.
    pub const fn money(name: &'static str) -> Self {
        Self::new(
            name,
            ColumnType::Decimal(Some(NumericPrecision {
                precision: 10,
                scale: 2,
            })),
        )
    }

    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub const fn primary_key(self) -> Self {
        Self {
            primary_key: true,
            ..self
        }
    }

    pub const fn omit_on_insert(self) -> Self {
        Self {
            omit_on_insert: true,
            ..self
        }
    }

    /// Whether an insert candidate must carry a non-null value for this column.
    pub fn required_on_insert(&self) -> bool {
        !self.omit_on_insert && !self.nullable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// All columns, in declaration order: the "selected row" shape.
    pub fn select_columns(&self) -> impl Iterator<Item = &ColumnDef> + '_ {
        self.columns.iter()
    }

    /// Columns a caller supplies when inserting: the "insertable row" shape.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnDef> + '_ {
        self.columns.iter().filter(|c| !c.omit_on_insert)
    }
}

/// A full row of one catalog table, as read back from the store.
pub trait TableRow: Serialize + DeserializeOwned {
    fn table() -> &'static TableDef;

    /// Primary key rendered the way the store compares it, `None` for tables
    /// without a declared key.
    fn primary_key(&self) -> Option<String>;
}

/// The insertable shape of a catalog table.
pub trait InsertRecord: Serialize + DeserializeOwned {
    type Row: TableRow;

    fn validate(input: &Value) -> Result<Self, ValidationError> {
        validation::validate_insert(<Self::Row as TableRow>::table(), input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_column_is_numeric_10_2() {
        let col = ColumnDef::money("hh_total_value");
        assert_eq!(col.ty.sql_name(), "numeric(10, 2)");
        assert!(col.required_on_insert());
    }

    #[test]
    fn test_builders_compose() {
        let col = ColumnDef::text("hh_id").primary_key().omit_on_insert();
        assert!(col.primary_key);
        assert!(col.omit_on_insert);
        assert!(!col.nullable);
        assert!(!col.required_on_insert());
    }

    #[test]
    fn test_nullable_text_is_not_required() {
        let col = ColumnDef::text("security_description").nullable();
        assert!(!col.required_on_insert());
    }

    #[test]
    fn test_integer_digits() {
        let p = NumericPrecision { precision: 10, scale: 2 };
        assert_eq!(p.integer_digits(), 8);
    }
}
