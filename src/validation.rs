//! Insert validation driven by the table catalog.
//!
//! A candidate is an untyped JSON object. Each insertable column is checked
//! for presence, JSON shape and, for constrained numerics, precision/scale.
//! All violations are collected before returning, so one rejection lists
//! every bad field. Unknown keys and store-assigned keys are dropped.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{ColumnDef, ColumnType, NumericPrecision, TableDef};

pub const ROOT_FIELD: &str = "$root";

const MAX_EXPONENT_DIGITS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("is required")]
    Missing,
    #[error("expected {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("is out of range for integer")]
    OutOfRange,
    #[error("exceeds numeric({precision}, {scale})")]
    Precision { precision: u32, scale: u32 },
    #[error("expected an object, got {found}")]
    NotAnObject { found: &'static str },
    /// The checked values did not build the requested record type.
    #[error("rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    fn new(field: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {table} record: {}", summarize(.issues))]
pub struct ValidationError {
    pub table: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }

    pub fn issue_for(&self, field: &str) -> Option<&IssueKind> {
        self.issues.iter().find(|i| i.field == field).map(|i| &i.kind)
    }

    pub fn missing_fields(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.kind == IssueKind::Missing)
            .map(|i| i.field.as_str())
            .collect()
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validates `input` against the insertable columns of `table` and builds the
/// typed insert record from the accepted values.
pub fn validate_insert<T: DeserializeOwned>(
    table: &'static TableDef,
    input: &Value,
) -> Result<T, ValidationError> {
    let accepted = accept_insert(table, input)?;
    into_record(table, accepted)
}

/// Runs the column checks and returns the accepted values as written, minus
/// unknown and store-assigned keys.
pub fn accept_insert(
    table: &'static TableDef,
    input: &Value,
) -> Result<Map<String, Value>, ValidationError> {
    let obj = input.as_object().ok_or_else(|| ValidationError {
        table: table.name,
        issues: vec![FieldIssue::new(
            ROOT_FIELD,
            IssueKind::NotAnObject {
                found: json_type_name(input),
            },
        )],
    })?;

    let mut accepted = Map::new();
    let mut issues = Vec::new();

    for col in table.insert_columns() {
        match obj.get(col.name) {
            None | Some(Value::Null) if col.nullable => {
                accepted.insert(col.name.to_string(), Value::Null);
            }
            None | Some(Value::Null) => issues.push(FieldIssue::new(col.name, IssueKind::Missing)),
            Some(value) => match check_value(col, value) {
                Ok(v) => {
                    accepted.insert(col.name.to_string(), v);
                }
                Err(kind) => issues.push(FieldIssue::new(col.name, kind)),
            },
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError {
            table: table.name,
            issues,
        });
    }
    Ok(accepted)
}

/// Deserializes accepted values into `T`. Only fails when `T` does not match
/// the columns of `table`, which surfaces as a `Rejected` issue on `$root`.
pub fn into_record<T: DeserializeOwned>(
    table: &'static TableDef,
    accepted: Map<String, Value>,
) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(accepted)).map_err(|e| ValidationError {
        table: table.name,
        issues: vec![FieldIssue::new(ROOT_FIELD, IssueKind::Rejected(e.to_string()))],
    })
}

/// Checks one present, non-null value and returns its normalized JSON form.
fn check_value(col: &ColumnDef, value: &Value) -> Result<Value, IssueKind> {
    let wrong_type = || IssueKind::WrongType {
        expected: col.ty.expected_json(),
        found: json_type_name(value),
    };

    match col.ty {
        ColumnType::Text => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err(wrong_type()),
        },
        ColumnType::Integer | ColumnType::Serial => {
            if let Some(n) = value.as_i64() {
                i32::try_from(n)
                    .map(Value::from)
                    .map_err(|_| IssueKind::OutOfRange)
            } else if value.is_u64() {
                Err(IssueKind::OutOfRange)
            } else {
                Err(wrong_type())
            }
        }
        ColumnType::Decimal(precision) => {
            let raw = value.as_str().ok_or_else(wrong_type)?;
            if !decimal_exponent_in_range(raw) {
                return Err(wrong_type());
            }
            let decimal = BigDecimal::from_str(raw).map_err(|_| wrong_type())?;
            if let Some(p) = precision {
                if !fits_precision(&decimal, p) {
                    return Err(IssueKind::Precision {
                        precision: p.precision,
                        scale: p.scale,
                    });
                }
            }
            Ok(Value::String(raw.to_string()))
        }
        ColumnType::Timestamp => {
            let raw = value.as_str().ok_or_else(wrong_type)?;
            let ts = parse_timestamp(raw).ok_or_else(wrong_type)?;
            Ok(Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()))
        }
    }
}

/// Exponents beyond four digits are refused before parsing; `BigDecimal`
/// overflows on extreme exponents.
pub fn decimal_exponent_in_range(raw: &str) -> bool {
    match raw.find(['e', 'E']) {
        None => true,
        Some(pos) => {
            let exponent = &raw[pos + 1..];
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            digits.len() <= MAX_EXPONENT_DIGITS
        }
    }
}

/// Screens the decimal columns of a full row before it is deserialized.
pub fn check_decimal_exponents(table: &'static TableDef, row: &Value) -> Result<(), ValidationError> {
    let Some(obj) = row.as_object() else {
        return Ok(());
    };
    let issues: Vec<FieldIssue> = table
        .select_columns()
        .filter(|c| matches!(c.ty, ColumnType::Decimal(_)))
        .filter_map(|c| match obj.get(c.name) {
            Some(value @ Value::String(raw)) if !decimal_exponent_in_range(raw) => Some(FieldIssue::new(
                c.name,
                IssueKind::WrongType {
                    expected: c.ty.expected_json(),
                    found: json_type_name(value),
                },
            )),
            _ => None,
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            table: table.name,
            issues,
        })
    }
}

/// Counts digits as written, so `"1.500"` has three fractional digits.
pub fn fits_precision(value: &BigDecimal, p: NumericPrecision) -> bool {
    let (digits, exponent) = value.as_bigint_and_exponent();
    let digits = digits.to_string();
    let significant = digits.trim_start_matches('-');

    let fractional = exponent.max(0);
    let integer = if significant == "0" {
        Some(0)
    } else {
        (significant.len() as i64).checked_sub(exponent).map(|n| n.max(0))
    };

    match integer {
        Some(integer) => {
            fractional <= i64::from(p.scale) && integer <= i64::from(p.integer_digits())
        }
        None => false,
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}
