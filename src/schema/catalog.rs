//! The eight reporting tables.
//!
//! Column types are kept exactly as they are persisted, including the known
//! mismatches: `hhmaster.zip_code` and `positions.description` are timestamps,
//! several quantities are text, and `hhperformance.return` is the primary key.
//! None of the household/account references are enforced as foreign keys.

use super::{ColumnDef, TableDef};

pub const POSITIONS: TableDef = TableDef {
    name: "positions",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::integer("date_of_date"),
        ColumnDef::integer("account_id"),
        ColumnDef::text("account_name"),
        ColumnDef::text("symbol"),
        ColumnDef::timestamp("description"),
        ColumnDef::money("_of_units"),
        ColumnDef::money("cost_price"),
        ColumnDef::money("position_cost_basis"),
        ColumnDef::money("close_price"),
        ColumnDef::money("position_market_value"),
        ColumnDef::text("position_income_since_inception"),
        ColumnDef::money("position_unrealized_gl"),
        ColumnDef::text("asset_class"),
        ColumnDef::text("classification"),
    ],
};

pub const HHFLOWS: TableDef = TableDef {
    name: "hhflows",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::text("household_name"),
        ColumnDef::text("attribute"),
        ColumnDef::money("1_month"),
        ColumnDef::money("3_months"),
        ColumnDef::money("ytd"),
        ColumnDef::money("1_year"),
        ColumnDef::money("3_years"),
        ColumnDef::money("5_years"),
        ColumnDef::text("10_years"),
        ColumnDef::money("inception"),
        ColumnDef::integer("sort_index"),
    ],
};

pub const ACCOUNTS: TableDef = TableDef {
    name: "accounts",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::integer("date_of_date"),
        ColumnDef::serial("account_id").primary_key().omit_on_insert(),
        ColumnDef::text("account_name"),
        ColumnDef::text("account_type"),
        ColumnDef::money("account_cost_basis"),
        ColumnDef::money("account_total_value"),
        ColumnDef::money("account_unrealized_gl"),
        ColumnDef::money("account_income_on_current_positions"),
        ColumnDef::integer("account_opening_date"),
        ColumnDef::integer("account_inception_date"),
        ColumnDef::text("fee_plans"),
    ],
};

pub const HHPERFORMANCE: TableDef = TableDef {
    name: "hhperformance",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::text("household_name"),
        ColumnDef::text("period"),
        ColumnDef::numeric("return").primary_key().omit_on_insert(),
    ],
};

pub const HOUSEHOLD: TableDef = TableDef {
    name: "household",
    columns: &[
        ColumnDef::text("hh_id").primary_key().omit_on_insert(),
        ColumnDef::text("household_name"),
        ColumnDef::money("hh_cost_basis"),
        ColumnDef::money("hh_unrealized_gl"),
        ColumnDef::money("hh_income_on_current_positions"),
        ColumnDef::money("hh_total_value"),
    ],
};

pub const HHMASTER: TableDef = TableDef {
    name: "hhmaster",
    columns: &[
        ColumnDef::text("hh_id").primary_key().omit_on_insert(),
        ColumnDef::text("household_name"),
        ColumnDef::text("address"),
        ColumnDef::text("city"),
        ColumnDef::text("state"),
        ColumnDef::timestamp("zip_code"),
        ColumnDef::text("phone"),
        ColumnDef::text("email"),
    ],
};

pub const HHMONTHLYPERFORMANCE: TableDef = TableDef {
    name: "hhmonthlyperformance",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::text("household_name"),
        ColumnDef::integer("period"),
        ColumnDef::money("return"),
        ColumnDef::money("ending_value"),
    ],
};

pub const HHTRANSACTIONS: TableDef = TableDef {
    name: "hhtransactions",
    columns: &[
        ColumnDef::text("hh_id"),
        ColumnDef::text("household_name"),
        ColumnDef::integer("account_id"),
        ColumnDef::text("account_name"),
        ColumnDef::text("activity_type"),
        ColumnDef::text("description"),
        ColumnDef::text("gainloss_"),
        ColumnDef::integer("process_date"),
        ColumnDef::text("quantity"),
        ColumnDef::text("security_description").nullable(),
        ColumnDef::text("symbol_cusip_or_code").nullable(),
        ColumnDef::money("total_amount"),
        ColumnDef::integer("trade_date"),
        ColumnDef::text("unit_price"),
    ],
};

pub static CATALOG: &[&TableDef] = &[
    &POSITIONS,
    &HHFLOWS,
    &ACCOUNTS,
    &HHPERFORMANCE,
    &HOUSEHOLD,
    &HHMASTER,
    &HHMONTHLYPERFORMANCE,
    &HHTRANSACTIONS,
];

pub fn table(name: &str) -> Option<&'static TableDef> {
    CATALOG.iter().copied().find(|t| t.name == name)
}

pub fn table_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.name)
}
