//! Terminal boundary: prompting for inputs and printing results.

pub mod prompt;
pub mod report;
