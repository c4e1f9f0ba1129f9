use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::ACCOUNTS;
use crate::schema::{InsertRecord, TableDef, TableRow};

// Represents a custodial or brokerage account within a household.
// `hh_id` points at the household but is not enforced as a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub hh_id: String,
    pub date_of_date: i32,
    pub account_id: i32,
    pub account_name: String,
    pub account_type: String,
    pub account_cost_basis: BigDecimal,
    pub account_total_value: BigDecimal,
    pub account_unrealized_gl: BigDecimal,
    pub account_income_on_current_positions: BigDecimal,
    pub account_opening_date: i32,
    pub account_inception_date: i32,
    pub fee_plans: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccount {
    pub hh_id: String,
    pub date_of_date: i32,
    pub account_name: String,
    pub account_type: String,
    pub account_cost_basis: BigDecimal,
    pub account_total_value: BigDecimal,
    pub account_unrealized_gl: BigDecimal,
    pub account_income_on_current_positions: BigDecimal,
    pub account_opening_date: i32,
    pub account_inception_date: i32,
    pub fee_plans: String,
}

impl Account {
    pub fn new(account_id: i32, data: CreateAccount) -> Self {
        Self {
            hh_id: data.hh_id,
            date_of_date: data.date_of_date,
            account_id,
            account_name: data.account_name,
            account_type: data.account_type,
            account_cost_basis: data.account_cost_basis,
            account_total_value: data.account_total_value,
            account_unrealized_gl: data.account_unrealized_gl,
            account_income_on_current_positions: data.account_income_on_current_positions,
            account_opening_date: data.account_opening_date,
            account_inception_date: data.account_inception_date,
            fee_plans: data.fee_plans,
        }
    }
}

impl TableRow for Account {
    fn table() -> &'static TableDef {
        &ACCOUNTS
    }

    fn primary_key(&self) -> Option<String> {
        Some(self.account_id.to_string())
    }
}

impl InsertRecord for CreateAccount {
    type Row = Account;
}
