// Tue Jan 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid data: contains no case data")]
    MissingCases,
    #[error("Invalid data: {0} is null")]
    NullField(String),
    #[error("Invalid data: {0} is not a number")]
    NotANumber(String),
    #[error("Invalid data: cases is not numeric ({0})")]
    NonNumericCases(String),
    #[error("Invalid data: cases is negative ({0})")]
    NegativeCases(f64),
    #[error("Invalid data: cases is not a whole count ({0})")]
    FractionalCases(f64),
}
