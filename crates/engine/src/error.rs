//! The module contains the errors the engine can return.
//!
//! None of them is fatal: every one describes a request the store could not
//! satisfy and left its state untouched.
//!
//! - [`EmptyLog`] returned when there is nothing to undo.
//! - [`NothingToRedo`] returned when there is nothing to redo.
//! - [`EmptyStructure`] returned when the maximum is requested with no records.
//! - [`NotFound`] returned when a search or the minimum finds nothing.
//!
//!  [`EmptyLog`]: EngineError::EmptyLog
//!  [`NothingToRedo`]: EngineError::NothingToRedo
//!  [`EmptyStructure`]: EngineError::EmptyStructure
//!  [`NotFound`]: EngineError::NotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Nothing to undo.")]
    EmptyLog,
    #[error("Nothing to redo.")]
    NothingToRedo,
    #[error("No transactions to display.")]
    EmptyStructure,
    #[error("No transactions found {0}")]
    NotFound(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid label: {0}")]
    InvalidLabel(String),
    #[error("Persistence failure: {0}")]
    Persistence(String),
}
