//! Command-line surface of `hhcatalog`.
//!
//! Parsing and dispatch live here so the commands can be driven with
//! in-memory input and output.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use crate::schema::{self, ddl};
use crate::services::catalog_service;

/// Inspect the household reporting tables and validate records against them
#[derive(Parser, Debug)]
#[command(name = "hhcatalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tables with their primary key and insertable columns
    Tables,

    /// Print CREATE TABLE statements
    Ddl {
        /// Only this table
        #[arg(long)]
        table: Option<String>,
    },

    /// Validate insert candidates (an object or an array of objects)
    Validate {
        table: String,
        /// JSON file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },

    /// Report duplicate primary keys among full rows
    CheckKeys {
        table: String,
        /// JSON file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
}

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// Some record was rejected or some key was duplicated.
    Flagged,
}

fn read_json(file: Option<&PathBuf>, stdin: &mut dyn Read) -> anyhow::Result<Value> {
    let mut raw = String::new();
    match file {
        Some(path) if path.as_os_str() != "-" => {
            raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        _ => {
            stdin.read_to_string(&mut raw).context("Failed to read stdin")?;
        }
    }
    serde_json::from_str(&raw).context("Input is not valid JSON")
}

pub fn run(
    cli: Cli,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    match cli.command {
        Command::Tables => {
            for table in schema::CATALOG {
                let key = table.primary_key().map(|c| c.name).unwrap_or("-");
                let insertable: Vec<&str> = table.insert_columns().map(|c| c.name).collect();
                writeln!(out, "{}\tkey={}\tinsert=[{}]", table.name, key, insertable.join(", "))?;
            }
            Ok(Outcome::Clean)
        }
        Command::Ddl { table } => {
            let sql = match table {
                Some(name) => ddl::create_table_sql(catalog_service::describe_table(&name)?),
                None => ddl::catalog_sql(),
            };
            writeln!(out, "{}", sql)?;
            Ok(Outcome::Clean)
        }
        Command::Validate { table, file } => {
            let input = read_json(file.as_ref(), stdin)?;
            let outcomes = catalog_service::validate_batch(&table, &input)?;
            let mut rejected = 0;
            for outcome in outcomes {
                match outcome.result {
                    Ok(accepted) => writeln!(out, "{}", serde_json::to_string(&accepted)?)?,
                    Err(e) => {
                        rejected += 1;
                        writeln!(err, "record {}: {}", outcome.index, e)?;
                    }
                }
            }
            info!("{} record(s) rejected", rejected);
            Ok(if rejected == 0 { Outcome::Clean } else { Outcome::Flagged })
        }
        Command::CheckKeys { table, file } => {
            let rows = read_json(file.as_ref(), stdin)?;
            let duplicates = catalog_service::check_primary_keys(&table, &rows)?;
            for dup in &duplicates {
                writeln!(out, "{}\t{:?}", dup.key, dup.rows)?;
            }
            Ok(if duplicates.is_empty() { Outcome::Clean } else { Outcome::Flagged })
        }
    }
}
