use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HHMONTHLYPERFORMANCE;
use crate::schema::{InsertRecord, TableDef, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HhMonthlyPerformance {
    pub hh_id: String,
    pub household_name: String,
    pub period: i32,
    #[serde(rename = "return")]
    #[sqlx(rename = "return")]
    pub return_value: BigDecimal,
    pub ending_value: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHhMonthlyPerformance {
    pub hh_id: String,
    pub household_name: String,
    pub period: i32,
    #[serde(rename = "return")]
    pub return_value: BigDecimal,
    pub ending_value: BigDecimal,
}

impl HhMonthlyPerformance {
    pub fn new(data: CreateHhMonthlyPerformance) -> Self {
        Self {
            hh_id: data.hh_id,
            household_name: data.household_name,
            period: data.period,
            return_value: data.return_value,
            ending_value: data.ending_value,
        }
    }
}

impl TableRow for HhMonthlyPerformance {
    fn table() -> &'static TableDef {
        &HHMONTHLYPERFORMANCE
    }

    fn primary_key(&self) -> Option<String> {
        None
    }
}

impl InsertRecord for CreateHhMonthlyPerformance {
    type Row = HhMonthlyPerformance;
}
