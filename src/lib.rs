//! Schema catalog for household portfolio reporting.
//!
//! Eight tables (households, household profiles, flows, performance, monthly
//! performance, accounts, positions, transactions) are declared once in
//! [`schema::catalog`]. Each has a full row type and an insert type in
//! [`models`], and insert candidates are checked by [`validation`].

pub mod cli;
pub mod errors;
pub mod logging;
pub mod models;
pub mod schema;
pub mod services;
pub mod validation;

pub use errors::AppError;
pub use schema::{InsertRecord, TableRow};
pub use validation::ValidationError;
