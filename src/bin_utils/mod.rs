//! Bootstraps [`bank_ledger`](crate) from a CSV table of staged operations.
//! Shared by the binary and the integration tests.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;
use tracing::info;

use crate::{account::Account, amount::parse_amount};
use csv_parser::{CsvScenarioParser, Operation};
pub mod csv_parser;

/// Result row. The balance is written in plain notation, never exponent form.
#[derive(Debug, Serialize)]
struct Outcome<'a> {
    line: u64,
    owner: &'a str,
    balance: String,
    outcome: String,
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    /// Re-stages a single fixture account for every row through the unchecked
    /// setters, applies the row's operation and writes the resulting balance.
    pub fn run(self) -> Result<()> {
        let parser =
            CsvScenarioParser::new(self.input).context("Failed to read scenario headers")?;
        let mut writer = Writer::from_writer(self.output);
        let mut account = Account::default();
        let mut rows = 0;

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed scenario at line {line}"))?;
            let balance = parse_amount(&row.balance)
                .with_context(|| format!("Invalid balance at line {line}"))?;
            let amount = parse_amount(&row.amount)
                .with_context(|| format!("Invalid amount at line {line}"))?;

            account.set_owner(row.owner);
            account.set_balance(balance);
            let result = match row.op {
                Operation::Debit => account.debit(&amount),
                Operation::Credit => {
                    account.credit(&amount);
                    Ok(())
                }
            };

            writer
                .serialize(Outcome {
                    line,
                    owner: account.owner(),
                    balance: account.balance().to_plain_string(),
                    outcome: match result {
                        Ok(()) => "ok".to_string(),
                        Err(err) => err.to_string(),
                    },
                })
                .with_context(|| format!("Failed to write outcome for line {line}"))?;
            rows += 1;
        }

        writer.flush().context("Failed to flush CSV writer")?;
        info!(rows, "scenarios processed");
        Ok(())
    }
}
