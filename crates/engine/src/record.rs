//! Record primitives.
//!
//! A `Record` is one income or expense entry. It is built once, validated on
//! construction and never changed afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Income,
    Expense,
    /// A category the ledger does not aggregate into the report. Only found
    /// in data files written by hand or by older tools.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            _ => Self::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ledger entry.
///
/// Fields are private so a record cannot change once it is in the store.
/// The serde representation is the positional row `category,label,amount`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordRow", into = "RecordRow")]
pub struct Record {
    category: Category,
    label: String,
    amount: MoneyCents,
}

impl Record {
    /// Build a record, rejecting negative amounts.
    pub fn new(
        category: Category,
        label: impl Into<String>,
        amount: MoneyCents,
    ) -> ResultEngine<Self> {
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be >= 0, got {amount}"
            )));
        }
        Ok(Self {
            category,
            label: label.into(),
            amount,
        })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> MoneyCents {
        self.amount
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.category, self.label, self.amount)
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct RecordRow {
    category: Category,
    label: String,
    amount: MoneyCents,
}

impl TryFrom<RecordRow> for Record {
    type Error = EngineError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Record::new(row.category, row.label, row.amount)
    }
}

impl From<Record> for RecordRow {
    fn from(record: Record) -> Self {
        Self {
            category: record.category,
            label: record.label,
            amount: record.amount,
        }
    }
}

/// Keys the history can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Amount,
    Label,
}
