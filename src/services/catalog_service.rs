use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{
    Account, CreateAccount, CreateHhFlow, CreateHhMaster, CreateHhMonthlyPerformance,
    CreateHhPerformance, CreateHhTransaction, CreateHousehold, CreatePosition, HhFlow, HhMaster,
    HhMonthlyPerformance, HhPerformance, HhTransaction, Household, Position,
};
use crate::schema::{self, InsertRecord, TableDef, TableRow};
use crate::validation::{self, ValidationError};

type InsertValidator = fn(&Value) -> Result<Value, AppError>;
type KeyChecker = fn(Vec<Value>) -> Result<Vec<DuplicateKey>, AppError>;

/// Result of validating one record of a batch, by position in the input.
#[derive(Debug)]
pub struct RecordOutcome {
    pub index: usize,
    pub result: Result<Value, ValidationError>,
}

/// Rows sharing one primary-key value; the store would accept only the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    pub rows: Vec<usize>,
}

pub fn describe_table(table: &str) -> Result<&'static TableDef, AppError> {
    schema::table(table).ok_or_else(|| AppError::UnknownTable(table.to_string()))
}

/// Returns the accepted values as the caller wrote them, once they are known
/// to build an `I`.
fn validate_as<I: InsertRecord>(input: &Value) -> Result<Value, AppError> {
    let table = <I::Row as TableRow>::table();
    let accepted = validation::accept_insert(table, input)?;
    validation::into_record::<I>(table, accepted.clone())?;
    Ok(Value::Object(accepted))
}

fn insert_validator(table: &str) -> Result<InsertValidator, AppError> {
    let validator: InsertValidator = match describe_table(table)?.name {
        "positions" => validate_as::<CreatePosition>,
        "hhflows" => validate_as::<CreateHhFlow>,
        "accounts" => validate_as::<CreateAccount>,
        "hhperformance" => validate_as::<CreateHhPerformance>,
        "household" => validate_as::<CreateHousehold>,
        "hhmaster" => validate_as::<CreateHhMaster>,
        "hhmonthlyperformance" => validate_as::<CreateHhMonthlyPerformance>,
        "hhtransactions" => validate_as::<CreateHhTransaction>,
        other => return Err(AppError::UnknownTable(other.to_string())),
    };
    Ok(validator)
}

/// Validates one insert candidate for `table` and returns the accepted record.
pub fn validate_insert_json(table: &str, input: &Value) -> Result<Value, AppError> {
    insert_validator(table)?(input)
}

/// Validates an object or an array of objects. A rejected record does not
/// stop the rest of the batch.
pub fn validate_batch(table: &str, input: &Value) -> Result<Vec<RecordOutcome>, AppError> {
    let validator = insert_validator(table)?;
    let records: Vec<&Value> = match input {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };
    info!("Validating {} {} record(s)", records.len(), table);

    let mut outcomes = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let result = match validator(record) {
            Ok(accepted) => Ok(accepted),
            Err(AppError::Validation(e)) => {
                warn!("Record {} rejected: {}", index, e);
                Err(e)
            }
            Err(e) => return Err(e),
        };
        outcomes.push(RecordOutcome { index, result });
    }

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    debug!("{} of {} {} record(s) rejected", rejected, outcomes.len(), table);
    Ok(outcomes)
}

/// Groups rows by primary key the way the table's unique constraint would.
/// Tables without a declared key never report duplicates.
pub fn find_duplicate_keys<R: TableRow>(rows: &[R]) -> Vec<DuplicateKey> {
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        if let Some(key) = row.primary_key() {
            seen.entry(key).or_default().push(index);
        }
    }

    let mut duplicates: Vec<DuplicateKey> = seen
        .into_iter()
        .filter(|(_, rows)| rows.len() > 1)
        .map(|(key, rows)| DuplicateKey { key, rows })
        .collect();
    duplicates.sort_by_key(|d| d.rows[0]);
    duplicates
}

fn check_as<R: TableRow>(rows: Vec<Value>) -> Result<Vec<DuplicateKey>, AppError> {
    for row in &rows {
        validation::check_decimal_exponents(R::table(), row)?;
    }
    let parsed = rows
        .into_iter()
        .map(serde_json::from_value::<R>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(find_duplicate_keys(&parsed))
}

fn key_checker(table: &str) -> Result<KeyChecker, AppError> {
    let checker: KeyChecker = match describe_table(table)?.name {
        "positions" => check_as::<Position>,
        "hhflows" => check_as::<HhFlow>,
        "accounts" => check_as::<Account>,
        "hhperformance" => check_as::<HhPerformance>,
        "household" => check_as::<Household>,
        "hhmaster" => check_as::<HhMaster>,
        "hhmonthlyperformance" => check_as::<HhMonthlyPerformance>,
        "hhtransactions" => check_as::<HhTransaction>,
        other => return Err(AppError::UnknownTable(other.to_string())),
    };
    Ok(checker)
}

/// Parses full rows of `table` (an object or an array) and reports primary
/// key collisions.
pub fn check_primary_keys(table: &str, rows: &Value) -> Result<Vec<DuplicateKey>, AppError> {
    let checker = key_checker(table)?;
    let rows = match rows {
        Value::Array(items) => items.clone(),
        single => vec![single.clone()],
    };
    info!("Checking primary keys of {} {} row(s)", rows.len(), table);

    let duplicates = checker(rows)?;
    for dup in &duplicates {
        warn!("Duplicate {} key '{}' in rows {:?}", table, dup.key, dup.rows);
    }
    Ok(duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn household_candidate() -> Value {
        json!({
            "household_name": "Smith Family",
            "hh_cost_basis": "100000.00",
            "hh_unrealized_gl": "2500.00",
            "hh_income_on_current_positions": "300.00",
            "hh_total_value": "102500.00",
        })
    }

    fn performance_row(period: &str, ret: &str) -> Value {
        json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "period": period,
            "return": ret,
        })
    }

    #[test]
    fn test_every_catalog_table_has_a_validator_and_checker() {
        for name in schema::table_names() {
            assert!(insert_validator(name).is_ok(), "no validator for {}", name);
            assert!(key_checker(name).is_ok(), "no key checker for {}", name);
        }
    }

    #[test]
    fn test_unknown_table() {
        let err = validate_insert_json("portfolios", &json!({})).unwrap_err();
        assert!(matches!(err, AppError::UnknownTable(ref t) if t == "portfolios"));
    }

    #[test]
    fn test_validate_insert_json_returns_accepted_record() {
        let accepted = validate_insert_json("household", &household_candidate()).unwrap();
        assert_eq!(accepted, household_candidate());
    }

    #[test]
    fn test_validate_insert_json_surfaces_validation_error() {
        let mut candidate = household_candidate();
        candidate["hh_cost_basis"] = json!("100000.123");
        let err = validate_insert_json("household", &candidate).unwrap_err();
        match err {
            AppError::Validation(e) => assert!(e.has_issue("hh_cost_basis")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_insert_json_keeps_decimals_as_written() {
        let mut candidate = household_candidate();
        candidate["hh_cost_basis"] = json!("1e7");
        candidate["hh_unrealized_gl"] = json!("+5.00");
        let accepted = validate_insert_json("household", &candidate).unwrap();
        assert_eq!(accepted, candidate);
    }

    #[test]
    fn test_validate_insert_json_extreme_exponent_is_a_validation_error() {
        let mut candidate = household_candidate();
        candidate["hh_total_value"] = json!("1e9223372036854775807");
        match validate_insert_json("household", &candidate).unwrap_err() {
            AppError::Validation(e) => assert!(e.has_issue("hh_total_value")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_batch_keeps_going_after_rejection() {
        let batch = json!([household_candidate(), { "household_name": "Jones" }, household_candidate()]);
        let outcomes = validate_batch("household", &batch).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
        assert_eq!(outcomes[1].index, 1);
    }

    #[test]
    fn test_validate_batch_single_object() {
        let outcomes = validate_batch("household", &household_candidate()).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_ok());
    }

    #[test]
    fn test_equal_returns_collide_as_primary_keys() {
        // Known schema defect: hhperformance is keyed on the return figure.
        let rows = json!([
            performance_row("1 Year", "7.25"),
            performance_row("3 Years", "5.10"),
            performance_row("5 Years", "7.250"),
        ]);
        let duplicates = check_primary_keys("hhperformance", &rows).unwrap();
        assert_eq!(
            duplicates,
            vec![DuplicateKey {
                key: "7.25".to_string(),
                rows: vec![0, 2],
            }]
        );
    }

    #[test]
    fn test_unkeyed_tables_never_collide() {
        let row = json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "period": 202401,
            "return": "1.00",
            "ending_value": "100.00",
        });
        let rows = json!([row.clone(), row]);
        assert!(check_primary_keys("hhmonthlyperformance", &rows).unwrap().is_empty());
    }

    #[test]
    fn test_check_primary_keys_rejects_malformed_rows() {
        let rows = json!([{ "hh_id": "HH-1" }]);
        let err = check_primary_keys("household", &rows).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_check_primary_keys_screens_extreme_exponents() {
        let rows = json!([
            performance_row("1 Year", "7.25"),
            performance_row("3 Years", "1e-9223372036854775808"),
        ]);
        match check_primary_keys("hhperformance", &rows).unwrap_err() {
            AppError::Validation(e) => {
                assert_eq!(e.table, "hhperformance");
                assert!(e.has_issue("return"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_describe_table() {
        let table = describe_table("accounts").unwrap();
        assert_eq!(table.primary_key().map(|c| c.name), Some("account_id"));
    }
}
