use std::io::Read;

use csv::{StringRecord, StringRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Debit,
    Credit,
}

/// One staged operation. Amounts stay as text here and are parsed exactly by
/// the caller, so no value goes through a float.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub op: Operation,
    pub owner: String,
    pub balance: String,
    pub amount: String,
}

/// Reads scenario rows in CSV format, yielding each with its line number.
pub struct CsvScenarioParser<R> {
    headers: StringRecord,
    iter: StringRecordsIntoIter<R>,
}

impl<R> CsvScenarioParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> csv::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);
        let headers = reader.headers()?.clone();

        Ok(Self {
            headers,
            iter: reader.into_records(),
        })
    }
}

impl<R> Iterator for CsvScenarioParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Scenario>);

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.iter.next()? {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map_or(0, |pos| pos.line());
                return Some((line, Err(err)));
            }
        };
        let line = record.position().map_or(0, |pos| pos.line());
        Some((line, record.deserialize(Some(&self.headers))))
    }
}
