//! One record per line: `category,label,amount`.
//!
//! No header and no quoting. A label containing a comma shifts the fields on
//! reload; such lines are reported and skipped, never guessed at. Amounts are
//! read with [`parse_file_amount`], so files written with six-digit or
//! exponent amounts still load.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Read, Write},
    path::PathBuf,
};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use engine::{Category, Persistence, Record, ResultEngine};
use serde::Deserialize;

use crate::{amount::parse_file_amount, error::Result};

const FIELDS: usize = 3;

#[derive(Deserialize)]
struct FileRow {
    category: Category,
    label: String,
    amount: String,
}

impl FileRow {
    fn into_record(self) -> ResultEngine<Record> {
        let amount = parse_file_amount(&self.amount)?;
        Record::new(self.category, self.label, amount)
    }
}

#[derive(Debug, Clone)]
pub struct FlatFile {
    path: PathBuf,
}

impl FlatFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every well-formed line. A missing file reads as no records.
    pub fn read(&self) -> Result<Vec<Record>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        decode(file)
    }

    /// Replaces the file with `records`, in order.
    ///
    /// Writes a sibling `.tmp` file first and renames it over the target.
    pub fn write(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        let file = File::create(&tmp)?;
        encode(file, records)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(
            "saved {} transactions to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Persistence for FlatFile {
    fn load(&self) -> ResultEngine<Vec<Record>> {
        Ok(self.read()?)
    }

    fn store(&self, records: &[Record]) -> ResultEngine<()> {
        Ok(self.write(records)?)
    }
}

/// Decodes records from `reader`, skipping malformed lines with a warning.
pub fn decode<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                tracing::warn!("skipping unreadable line: {err}");
                skipped += 1;
                continue;
            }
        };
        let line = row.position().map_or(0, |pos| pos.line());

        if row.len() != FIELDS {
            tracing::warn!(
                "skipping line {line}: expected {FIELDS} fields, found {}",
                row.len()
            );
            skipped += 1;
            continue;
        }

        let record = match row.deserialize::<FileRow>(None) {
            Ok(file_row) => file_row.into_record(),
            Err(err) => {
                tracing::warn!("skipping line {line}: {err}");
                skipped += 1;
                continue;
            }
        };
        match record {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!("skipping line {line}: {err}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("{skipped} malformed lines were skipped");
    }
    Ok(records)
}

/// Encodes `records` to `writer`, one line each.
pub fn encode<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use engine::{Category, MoneyCents};

    use super::*;

    fn record(category: Category, label: &str, cents: i64) -> Record {
        Record::new(category, label, MoneyCents::new(cents)).unwrap()
    }

    #[test]
    fn encode_writes_plain_lines() {
        let mut out = Vec::new();
        encode(
            &mut out,
            &[
                record(Category::Income, "Salary", 100_000),
                record(Category::Expense, "Rent \"flat\"", 40_050),
            ],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Income,Salary,1000.00\nExpense,Rent \"flat\",400.50\n"
        );
    }

    #[test]
    fn decode_accepts_amounts_without_cents() {
        let input = "Income,Salary,1000\nExpense,Coffee,3.5\n";

        let records = decode(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                record(Category::Income, "Salary", 100_000),
                record(Category::Expense, "Coffee", 350),
            ]
        );
    }

    #[test]
    fn decode_skips_malformed_lines() {
        let input = "Income,Salary,1000\n\
                     Expense,Dinner, drinks,45\n\
                     Expense,Taxi,abc\n\
                     Expense,Refund,-3\n\
                     \n\
                     Expense,Rent,400\n";

        let records = decode(input.as_bytes()).unwrap();

        let labels: Vec<_> = records.iter().map(Record::label).collect();
        assert_eq!(labels, vec!["Salary", "Rent"]);
    }

    #[test]
    fn decode_rounds_amounts_written_with_six_digits() {
        let input = "Income,Salary,1.5e+06\nExpense,Split,0.333333\nExpense,Rent,400\n";

        let records = decode(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                record(Category::Income, "Salary", 150_000_000),
                record(Category::Expense, "Split", 33),
                record(Category::Expense, "Rent", 40_000),
            ]
        );
    }

    #[test]
    fn decode_keeps_unknown_categories() {
        let records = decode("Transfer,Savings,10.00\n".as_bytes()).unwrap();

        assert_eq!(records[0].category(), &Category::Other("Transfer".into()));
    }

    #[test]
    fn decode_accepts_crlf_and_empty_labels() {
        let records = decode("Income,,5.00\r\nExpense,Tea,1.20\r\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label(), "");
        assert_eq!(records[1].amount(), MoneyCents::new(120));
    }
}
