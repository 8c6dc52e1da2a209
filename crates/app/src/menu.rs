//! Numbered menu entries.

pub const MENU: &str = "\
Personal Budget Tracker
1. Add Income
2. Add Expense
3. View Transactions
4. Generate Report
5. Undo Last Transaction
6. Redo Last Transaction
7. Process Transaction Queue
8. Print Highest Transaction
9. Print Lowest Transaction
10. Sort Transactions by Amount
11. Sort Transactions by Description
12. Search Transactions by Description
13. Search Transactions by Amount
14. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    View,
    Report,
    Undo,
    Redo,
    ProcessQueue,
    Highest,
    Lowest,
    SortByAmount,
    SortByLabel,
    SearchByLabel,
    SearchByAmount,
    Exit,
}

/// Maps a typed line to a menu entry. Surrounding whitespace is ignored.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    let choice = match input.trim().parse::<u8>().ok()? {
        1 => MenuChoice::AddIncome,
        2 => MenuChoice::AddExpense,
        3 => MenuChoice::View,
        4 => MenuChoice::Report,
        5 => MenuChoice::Undo,
        6 => MenuChoice::Redo,
        7 => MenuChoice::ProcessQueue,
        8 => MenuChoice::Highest,
        9 => MenuChoice::Lowest,
        10 => MenuChoice::SortByAmount,
        11 => MenuChoice::SortByLabel,
        12 => MenuChoice::SearchByLabel,
        13 => MenuChoice::SearchByAmount,
        14 => MenuChoice::Exit,
        _ => return None,
    };
    Some(choice)
}
