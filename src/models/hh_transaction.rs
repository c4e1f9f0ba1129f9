use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HHTRANSACTIONS;
use crate::schema::{InsertRecord, TableDef, TableRow};

// A recorded activity (trade, transfer, fee...) on a household account.
// Quantity, unit price and gain/loss are stored as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HhTransaction {
    pub hh_id: String,
    pub household_name: String,
    pub account_id: i32,
    pub account_name: String,
    pub activity_type: String,
    pub description: String,
    #[serde(rename = "gainloss_")]
    #[sqlx(rename = "gainloss_")]
    pub gainloss: String,
    pub process_date: i32,
    pub quantity: String,
    pub security_description: Option<String>,
    pub symbol_cusip_or_code: Option<String>,
    pub total_amount: BigDecimal,
    pub trade_date: i32,
    pub unit_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHhTransaction {
    pub hh_id: String,
    pub household_name: String,
    pub account_id: i32,
    pub account_name: String,
    pub activity_type: String,
    pub description: String,
    #[serde(rename = "gainloss_")]
    pub gainloss: String,
    pub process_date: i32,
    pub quantity: String,
    pub security_description: Option<String>,
    pub symbol_cusip_or_code: Option<String>,
    pub total_amount: BigDecimal,
    pub trade_date: i32,
    pub unit_price: String,
}

impl HhTransaction {
    pub fn new(data: CreateHhTransaction) -> Self {
        Self {
            hh_id: data.hh_id,
            household_name: data.household_name,
            account_id: data.account_id,
            account_name: data.account_name,
            activity_type: data.activity_type,
            description: data.description,
            gainloss: data.gainloss,
            process_date: data.process_date,
            quantity: data.quantity,
            security_description: data.security_description,
            symbol_cusip_or_code: data.symbol_cusip_or_code,
            total_amount: data.total_amount,
            trade_date: data.trade_date,
            unit_price: data.unit_price,
        }
    }
}

impl TableRow for HhTransaction {
    fn table() -> &'static TableDef {
        &HHTRANSACTIONS
    }

    fn primary_key(&self) -> Option<String> {
        None
    }
}

impl InsertRecord for CreateHhTransaction {
    type Row = HhTransaction;
}
