//! The interactive menu loop.
//!
//! Reads one choice per line and drives the store. Every store error is
//! informational here: it is printed and the loop goes on.

use std::io::{self, BufRead, Write};

use engine::{Category, EngineError, MoneyCents, Record, SortKey, TransactionStore};

use crate::menu::{MENU, MenuChoice, parse_choice};

pub struct Session<'a, R, W> {
    store: &'a mut TransactionStore,
    input: R,
    output: W,
    symbol: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut TransactionStore, input: R, output: W, symbol: &str) -> Self {
        Self {
            store,
            input,
            output,
            symbol: symbol.to_string(),
        }
    }

    /// Runs until the user picks Exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let Some(choice) = parse_choice(&line) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }
            if !self.dispatch(choice)? {
                break;
            }
        }
        self.output.flush()
    }

    /// Returns `false` when the input ran out mid-command.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::AddIncome => return self.add(Category::Income),
            MenuChoice::AddExpense => return self.add(Category::Expense),
            MenuChoice::View => self.view()?,
            MenuChoice::Report => self.report()?,
            MenuChoice::Undo => match self.store.undo() {
                Ok(record) => {
                    let line = self.format(&record);
                    writeln!(self.output, "Undone: {line}")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            },
            MenuChoice::Redo => match self.store.redo() {
                Ok(record) => {
                    let line = self.format(&record);
                    writeln!(self.output, "Redone: {line}")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            },
            MenuChoice::ProcessQueue => self.process_queue()?,
            MenuChoice::Highest => match self.store.peek_max() {
                Ok(record) => {
                    let line = self.format(record);
                    writeln!(self.output, "Highest transaction: {line}")?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            },
            MenuChoice::Lowest => match self.store.min_record() {
                Ok(record) => {
                    let line = self.format(record);
                    writeln!(self.output, "Lowest transaction: {line}")?;
                }
                Err(_) => writeln!(self.output, "{}", EngineError::EmptyStructure)?,
            },
            MenuChoice::SortByAmount => {
                self.store.sort_by(SortKey::Amount);
                writeln!(self.output, "Transactions sorted by amount.")?;
            }
            MenuChoice::SortByLabel => {
                self.store.sort_by(SortKey::Label);
                writeln!(self.output, "Transactions sorted by description.")?;
            }
            MenuChoice::SearchByLabel => {
                let Some(text) = self.prompt("Enter description to search: ")? else {
                    return Ok(false);
                };
                let found = self.store.find_by_label_substring(&text);
                self.print_matches(found)?;
            }
            MenuChoice::SearchByAmount => {
                let Some(raw) = self.prompt("Enter amount to search: ")? else {
                    return Ok(false);
                };
                match raw.parse::<MoneyCents>() {
                    Ok(amount) => match self.store.find_by_amount(amount) {
                        Err(EngineError::NotFound(_)) => writeln!(
                            self.output,
                            "No transactions found with amount: {}{amount}",
                            self.symbol
                        )?,
                        found => self.print_matches(found)?,
                    },
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn add(&mut self, category: Category) -> io::Result<bool> {
        let Some(label) = self.prompt("Enter description: ")? else {
            return Ok(false);
        };
        let Some(raw) = self.prompt("Enter amount: ")? else {
            return Ok(false);
        };

        let added = raw
            .parse::<MoneyCents>()
            .and_then(|amount| self.store.add(category, &label, amount));
        match added {
            Ok(record) => {
                let line = self.format(&record);
                writeln!(self.output, "Added: {line}")?;
            }
            Err(err) => {
                tracing::debug!("rejected input: {err}");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(true)
    }

    /// An empty ledger prints nothing.
    fn view(&mut self) -> io::Result<()> {
        let lines: Vec<String> = self
            .store
            .list_all()
            .iter()
            .map(|r| self.format(r))
            .collect();
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn report(&mut self) -> io::Result<()> {
        let report = self.store.report();
        let symbol = &self.symbol;
        writeln!(self.output, "Total Income: {symbol}{}", report.total_income)?;
        writeln!(self.output, "Total Expenses: {symbol}{}", report.total_expense)?;
        writeln!(self.output, "Remaining Balance: {symbol}{}", report.balance)
    }

    fn process_queue(&mut self) -> io::Result<()> {
        let drained = self.store.drain_queue();
        if drained.is_empty() {
            return writeln!(self.output, "No pending transactions.");
        }
        for record in &drained {
            let line = self.format(record);
            writeln!(self.output, "Processing transaction: {line}")?;
        }
        Ok(())
    }

    fn print_matches(&mut self, found: Result<Vec<Record>, EngineError>) -> io::Result<()> {
        match found {
            Ok(records) => {
                for record in &records {
                    let line = self.format(record);
                    writeln!(self.output, "{line}")?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{}: {} - {}{}",
            record.category(),
            record.label(),
            self.symbol,
            record.amount()
        )
    }

    /// Prints `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
