use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HHFLOWS;
use crate::schema::{InsertRecord, TableDef, TableRow};

// One flow-of-funds attribute for a household, with a figure per period.
// Column names starting with a digit keep their stored spelling via rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HhFlow {
    pub hh_id: String,
    pub household_name: String,
    pub attribute: String,
    #[serde(rename = "1_month")]
    #[sqlx(rename = "1_month")]
    pub one_month: BigDecimal,
    #[serde(rename = "3_months")]
    #[sqlx(rename = "3_months")]
    pub three_months: BigDecimal,
    pub ytd: BigDecimal,
    #[serde(rename = "1_year")]
    #[sqlx(rename = "1_year")]
    pub one_year: BigDecimal,
    #[serde(rename = "3_years")]
    #[sqlx(rename = "3_years")]
    pub three_years: BigDecimal,
    #[serde(rename = "5_years")]
    #[sqlx(rename = "5_years")]
    pub five_years: BigDecimal,
    #[serde(rename = "10_years")]
    #[sqlx(rename = "10_years")]
    pub ten_years: String,
    pub inception: BigDecimal,
    pub sort_index: i32,
}

// Every column is caller-supplied, so the insert shape mirrors the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHhFlow {
    pub hh_id: String,
    pub household_name: String,
    pub attribute: String,
    #[serde(rename = "1_month")]
    pub one_month: BigDecimal,
    #[serde(rename = "3_months")]
    pub three_months: BigDecimal,
    pub ytd: BigDecimal,
    #[serde(rename = "1_year")]
    pub one_year: BigDecimal,
    #[serde(rename = "3_years")]
    pub three_years: BigDecimal,
    #[serde(rename = "5_years")]
    pub five_years: BigDecimal,
    #[serde(rename = "10_years")]
    pub ten_years: String,
    pub inception: BigDecimal,
    pub sort_index: i32,
}

impl HhFlow {
    pub fn new(data: CreateHhFlow) -> Self {
        Self {
            hh_id: data.hh_id,
            household_name: data.household_name,
            attribute: data.attribute,
            one_month: data.one_month,
            three_months: data.three_months,
            ytd: data.ytd,
            one_year: data.one_year,
            three_years: data.three_years,
            five_years: data.five_years,
            ten_years: data.ten_years,
            inception: data.inception,
            sort_index: data.sort_index,
        }
    }
}

impl TableRow for HhFlow {
    fn table() -> &'static TableDef {
        &HHFLOWS
    }

    fn primary_key(&self) -> Option<String> {
        None
    }
}

impl InsertRecord for CreateHhFlow {
    type Row = HhFlow;
}
