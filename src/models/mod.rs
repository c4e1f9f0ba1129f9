mod account;
mod hh_flow;
mod hh_master;
mod hh_monthly_performance;
mod hh_performance;
mod hh_transaction;
mod household;
mod position;

pub use account::{Account, CreateAccount};
pub use hh_flow::{CreateHhFlow, HhFlow};
pub use hh_master::{CreateHhMaster, HhMaster};
pub use hh_monthly_performance::{CreateHhMonthlyPerformance, HhMonthlyPerformance};
pub use hh_performance::{CreateHhPerformance, HhPerformance};
pub use hh_transaction::{CreateHhTransaction, HhTransaction};
pub use household::{CreateHousehold, Household};
pub use position::{CreatePosition, Position};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InsertRecord, TableRow};
    use bigdecimal::BigDecimal;
    use serde_json::{json, Value};
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn keys(value: &Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    fn insert_column_names<R: TableRow>() -> BTreeSet<String> {
        R::table().insert_columns().map(|c| c.name.to_string()).collect()
    }

    fn select_column_names<R: TableRow>() -> BTreeSet<String> {
        R::table().select_columns().map(|c| c.name.to_string()).collect()
    }

    /// The typed insert shape serializes to exactly the catalog's insertable columns.
    fn assert_insert_shape<I: InsertRecord>(candidate: Value) -> I {
        let record = I::validate(&candidate).unwrap();
        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(keys(&serialized), insert_column_names::<I::Row>());
        record
    }

    fn assert_row_shape<R: TableRow>(row: &R) {
        let serialized = serde_json::to_value(row).unwrap();
        assert_eq!(keys(&serialized), select_column_names::<R>());
    }

    #[test]
    fn test_household_shapes() {
        let data: CreateHousehold = assert_insert_shape(json!({
            "household_name": "Smith Family",
            "hh_cost_basis": "100000.00",
            "hh_unrealized_gl": "2500.00",
            "hh_income_on_current_positions": "300.00",
            "hh_total_value": "102500.00",
        }));
        let row = Household::new("HH-1".to_string(), data);
        assert_row_shape(&row);
        assert_eq!(row.primary_key(), Some("HH-1".to_string()));
    }

    #[test]
    fn test_hhmaster_shapes() {
        let data: CreateHhMaster = assert_insert_shape(json!({
            "household_name": "Smith Family",
            "address": "12 Elm St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "2024-01-01T00:00:00",
            "phone": "555-0100",
            "email": "smith@example.com",
        }));
        assert_row_shape(&HhMaster::new("HH-1".to_string(), data));
    }

    #[test]
    fn test_hhflow_shapes_keep_stored_column_names() {
        let data: CreateHhFlow = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "attribute": "Net Contributions",
            "1_month": "1.10",
            "3_months": "2.20",
            "ytd": "3.30",
            "1_year": "4.40",
            "3_years": "5.50",
            "5_years": "6.60",
            "10_years": "n/a",
            "inception": "7.70",
            "sort_index": 1,
        }));
        assert_eq!(data.ten_years, "n/a");
        let row = HhFlow::new(data);
        assert_row_shape(&row);
        assert_eq!(row.primary_key(), None);
    }

    #[test]
    fn test_hhperformance_insert_shape_has_no_return() {
        let data: CreateHhPerformance = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "period": "1 Year",
            "return": "12.5",
        }));
        let row = HhPerformance::new(BigDecimal::from_str("12.50").unwrap(), data);
        assert_row_shape(&row);
        assert_eq!(row.primary_key(), Some("12.5".to_string()));
    }

    #[test]
    fn test_hhmonthlyperformance_shapes() {
        let data: CreateHhMonthlyPerformance = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "period": 202401,
            "return": "1.25",
            "ending_value": "102500.00",
        }));
        assert_row_shape(&HhMonthlyPerformance::new(data));
    }

    #[test]
    fn test_account_shapes() {
        let data: CreateAccount = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "date_of_date": 20240131,
            "account_name": "Joint Brokerage",
            "account_type": "Brokerage",
            "account_cost_basis": "50000.00",
            "account_total_value": "51250.00",
            "account_unrealized_gl": "1250.00",
            "account_income_on_current_positions": "150.00",
            "account_opening_date": 20150601,
            "account_inception_date": 20150601,
            "fee_plans": "Standard",
        }));
        let row = Account::new(42, data);
        assert_row_shape(&row);
        assert_eq!(row.primary_key(), Some("42".to_string()));
    }

    #[test]
    fn test_position_shapes() {
        let data: CreatePosition = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "date_of_date": 20240131,
            "account_id": 42,
            "account_name": "Joint Brokerage",
            "symbol": "VTI",
            "description": "2024-01-31T00:00:00",
            "_of_units": "100.00",
            "cost_price": "200.00",
            "position_cost_basis": "20000.00",
            "close_price": "235.50",
            "position_market_value": "23550.00",
            "position_income_since_inception": "812.40",
            "position_unrealized_gl": "3550.00",
            "asset_class": "Equity",
            "classification": "US Total Market",
        }));
        assert_eq!(data.of_units, BigDecimal::from_str("100.00").unwrap());
        assert_row_shape(&Position::new(data));
    }

    #[test]
    fn test_hhtransaction_shapes() {
        let data: CreateHhTransaction = assert_insert_shape(json!({
            "hh_id": "HH-1",
            "household_name": "Smith Family",
            "account_id": 42,
            "account_name": "Joint Brokerage",
            "activity_type": "BUY",
            "description": "Bought VTI",
            "gainloss_": "0",
            "process_date": 20240115,
            "quantity": "10",
            "security_description": "Vanguard Total Stock Market ETF",
            "symbol_cusip_or_code": "VTI",
            "total_amount": "-2355.00",
            "trade_date": 20240112,
            "unit_price": "235.50",
        }));
        assert_eq!(data.symbol_cusip_or_code.as_deref(), Some("VTI"));
        assert_row_shape(&HhTransaction::new(data));
    }
}
