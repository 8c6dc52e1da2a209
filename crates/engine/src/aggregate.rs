//! Running totals per category.

use std::collections::HashMap;

use crate::{Category, EngineError, MoneyCents, ResultEngine};

/// Income, expense and what is left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub balance: MoneyCents,
}

#[derive(Clone, Debug, Default)]
pub struct AggregateIndex {
    totals: HashMap<Category, MoneyCents>,
}

impl AggregateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the category total. On overflow nothing changes.
    pub fn add(&mut self, category: &Category, amount: MoneyCents) -> ResultEngine<()> {
        let total = self
            .total(category)
            .checked_add(amount)
            .ok_or_else(|| {
                EngineError::InvalidAmount(format!("{category} total would overflow"))
            })?;
        self.totals.insert(category.clone(), total);
        Ok(())
    }

    /// Takes back an amount previously added, so the total cannot underflow.
    pub fn subtract(&mut self, category: &Category, amount: MoneyCents) {
        *self.totals.entry(category.clone()).or_default() -= amount;
    }

    pub fn totals(&self) -> &HashMap<Category, MoneyCents> {
        &self.totals
    }

    pub fn total(&self, category: &Category) -> MoneyCents {
        self.totals.get(category).copied().unwrap_or_default()
    }

    /// Only `Income` and `Expense` count; other categories are left out.
    pub fn report(&self) -> Report {
        let total_income = self.total(&Category::Income);
        let total_expense = self.total(&Category::Expense);
        Report {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}
