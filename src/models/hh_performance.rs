use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HHPERFORMANCE;
use crate::schema::{InsertRecord, TableDef, TableRow};

// Household return for a labelled period.
//
// The stored table is keyed on `return` itself, so two periods with the same
// figure collide. The column is also left out of the insert shape and has to
// be supplied separately when building a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HhPerformance {
    pub hh_id: String,
    pub household_name: String,
    pub period: String,
    #[serde(rename = "return")]
    #[sqlx(rename = "return")]
    pub return_value: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHhPerformance {
    pub hh_id: String,
    pub household_name: String,
    pub period: String,
}

impl HhPerformance {
    pub fn new(return_value: BigDecimal, data: CreateHhPerformance) -> Self {
        Self {
            hh_id: data.hh_id,
            household_name: data.household_name,
            period: data.period,
            return_value,
        }
    }
}

impl TableRow for HhPerformance {
    fn table() -> &'static TableDef {
        &HHPERFORMANCE
    }

    // numeric equality ignores trailing zeros: 1.5 and 1.50 are the same key
    fn primary_key(&self) -> Option<String> {
        Some(self.return_value.normalized().to_string())
    }
}

impl InsertRecord for CreateHhPerformance {
    type Row = HhPerformance;
}
