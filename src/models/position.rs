use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::POSITIONS;
use crate::schema::{InsertRecord, TableDef, TableRow};

// Represents a security holding within an account as of `date_of_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Position {
    pub hh_id: String,
    pub date_of_date: i32,
    pub account_id: i32,
    pub account_name: String,
    pub symbol: String,
    pub description: NaiveDateTime,
    #[serde(rename = "_of_units")]
    #[sqlx(rename = "_of_units")]
    pub of_units: BigDecimal,
    pub cost_price: BigDecimal,
    pub position_cost_basis: BigDecimal,
    pub close_price: BigDecimal,
    pub position_market_value: BigDecimal,
    pub position_income_since_inception: String,
    pub position_unrealized_gl: BigDecimal,
    pub asset_class: String,
    pub classification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePosition {
    pub hh_id: String,
    pub date_of_date: i32,
    pub account_id: i32,
    pub account_name: String,
    pub symbol: String,
    pub description: NaiveDateTime,
    #[serde(rename = "_of_units")]
    pub of_units: BigDecimal,
    pub cost_price: BigDecimal,
    pub position_cost_basis: BigDecimal,
    pub close_price: BigDecimal,
    pub position_market_value: BigDecimal,
    pub position_income_since_inception: String,
    pub position_unrealized_gl: BigDecimal,
    pub asset_class: String,
    pub classification: String,
}

impl Position {
    pub fn new(data: CreatePosition) -> Self {
        Self {
            hh_id: data.hh_id,
            date_of_date: data.date_of_date,
            account_id: data.account_id,
            account_name: data.account_name,
            symbol: data.symbol,
            description: data.description,
            of_units: data.of_units,
            cost_price: data.cost_price,
            position_cost_basis: data.position_cost_basis,
            close_price: data.close_price,
            position_market_value: data.position_market_value,
            position_income_since_inception: data.position_income_since_inception,
            position_unrealized_gl: data.position_unrealized_gl,
            asset_class: data.asset_class,
            classification: data.classification,
        }
    }
}

impl TableRow for Position {
    fn table() -> &'static TableDef {
        &POSITIONS
    }

    fn primary_key(&self) -> Option<String> {
        None
    }
}

impl InsertRecord for CreatePosition {
    type Row = Position;
}
