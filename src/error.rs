//! Process exit codes for each failure kind.
//!
//! Typed errors live next to the code that raises them; the driver carries
//! them inside `anyhow::Error` with stage context, and this module maps the
//! underlying error back to a distinct exit code.

use std::process;

use crate::app::EstimateError;
use crate::calc::CalcError;
use crate::data::loader::LoadError;
use crate::data::lookup::LookupError;
use crate::data::nearest::EmptyRange;
use crate::ui::prompt::InputError;

pub const EXIT_GENERAL: i32 = 1;
pub const EXIT_IO: i32 = 3;
pub const EXIT_STRUCTURE: i32 = 4;
pub const EXIT_EMPTY_RANGE: i32 = 5;
pub const EXIT_NOT_FOUND: i32 = 6;
pub const EXIT_DIVISION: i32 = 7;
pub const EXIT_INPUT_FORMAT: i32 = 8;

/// Exit code for the first typed error found in the chain.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<LoadError>() {
            return match e {
                LoadError::Io { .. } => EXIT_IO,
                LoadError::Json(_)
                | LoadError::Csv(_)
                | LoadError::Structure { .. }
                | LoadError::UnsupportedExtension(_) => EXIT_STRUCTURE,
            };
        }
        if let Some(e) = cause.downcast_ref::<EstimateError>() {
            return match e {
                EstimateError::Lookup(_) => EXIT_NOT_FOUND,
                EstimateError::FlightTime(_) => EXIT_DIVISION,
            };
        }
        if cause.downcast_ref::<LookupError>().is_some() {
            return EXIT_NOT_FOUND;
        }
        if cause.downcast_ref::<CalcError>().is_some() {
            return EXIT_DIVISION;
        }
        if cause.downcast_ref::<EmptyRange>().is_some() {
            return EXIT_EMPTY_RANGE;
        }
        if let Some(e) = cause.downcast_ref::<InputError>() {
            return match e {
                InputError::Io(_) => EXIT_IO,
                InputError::Format { .. } | InputError::EndOfInput { .. } => EXIT_INPUT_FORMAT,
            };
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return EXIT_IO;
        }
    }
    EXIT_GENERAL
}

/// Report the failure with its stage context and terminate.
pub fn exit(err: &anyhow::Error) -> ! {
    log::debug!("failure chain: {err:?}");
    eprintln!("Error: {err:#}");
    process::exit(exit_code(err))
}
