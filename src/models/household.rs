use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HOUSEHOLD;
use crate::schema::{InsertRecord, TableDef, TableRow};

// Represents a client household and its rolled-up totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Household {
    pub hh_id: String,
    pub household_name: String,
    pub hh_cost_basis: BigDecimal,
    pub hh_unrealized_gl: BigDecimal,
    pub hh_income_on_current_positions: BigDecimal,
    pub hh_total_value: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHousehold {
    pub household_name: String,
    pub hh_cost_basis: BigDecimal,
    pub hh_unrealized_gl: BigDecimal,
    pub hh_income_on_current_positions: BigDecimal,
    pub hh_total_value: BigDecimal,
}

impl Household {
    pub fn new(hh_id: String, data: CreateHousehold) -> Self {
        Self {
            hh_id,
            household_name: data.household_name,
            hh_cost_basis: data.hh_cost_basis,
            hh_unrealized_gl: data.hh_unrealized_gl,
            hh_income_on_current_positions: data.hh_income_on_current_positions,
            hh_total_value: data.hh_total_value,
        }
    }
}

impl TableRow for Household {
    fn table() -> &'static TableDef {
        &HOUSEHOLD
    }

    fn primary_key(&self) -> Option<String> {
        Some(self.hh_id.clone())
    }
}

impl InsertRecord for CreateHousehold {
    type Row = Household;
}
