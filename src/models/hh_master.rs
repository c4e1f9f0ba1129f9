use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::catalog::HHMASTER;
use crate::schema::{InsertRecord, TableDef, TableRow};

// Contact profile of a household. `zip_code` is stored as a timestamp column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HhMaster {
    pub hh_id: String,
    pub household_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: NaiveDateTime,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHhMaster {
    pub household_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: NaiveDateTime,
    pub phone: String,
    pub email: String,
}

impl HhMaster {
    pub fn new(hh_id: String, data: CreateHhMaster) -> Self {
        Self {
            hh_id,
            household_name: data.household_name,
            address: data.address,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            phone: data.phone,
            email: data.email,
        }
    }
}

impl TableRow for HhMaster {
    fn table() -> &'static TableDef {
        &HHMASTER
    }

    fn primary_key(&self) -> Option<String> {
        Some(self.hh_id.clone())
    }
}

impl InsertRecord for CreateHhMaster {
    type Row = HhMaster;
}
