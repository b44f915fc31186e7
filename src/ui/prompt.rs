use std::io::{BufRead, Write};

use crate::query::{FlightQuery, PartialQuery};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("'{text}' is not a valid number for {field}")]
    Format { field: &'static str, text: String },
    #[error("input ended before {field} was entered")]
    EndOfInput { field: &'static str },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One numeric question put to the operator.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub field: &'static str,
    pub prompt: &'static str,
}

pub const WEIGHT: Question = Question {
    field: "weight",
    prompt: "Enter weight (lbs): ",
};
pub const ALTITUDE: Question = Question {
    field: "altitude",
    prompt: "Enter altitude (ft): ",
};
pub const TEMPERATURE: Question = Question {
    field: "temperature",
    prompt: "Enter temperature (°C): ",
};
pub const DISTANCE: Question = Question {
    field: "distance",
    prompt: "Enter the total distance (nautical miles): ",
};

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

/// Line-oriented numeric prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    retry: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            retry: false,
        }
    }

    /// Ask again after an unparsable answer instead of failing.
    pub fn retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    /// Ask one question until a finite number is entered (or once, without retry).
    pub fn ask_number(&mut self, question: &Question) -> Result<f64, InputError> {
        loop {
            write!(self.output, "{}", question.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput {
                    field: question.field,
                });
            }

            let text = line.trim();
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => {
                    let err = InputError::Format {
                        field: question.field,
                        text: text.to_string(),
                    };
                    if !self.retry {
                        return Err(err);
                    }
                    log::debug!("rejected input: {err}");
                    writeln!(self.output, "{err}, please try again.")?;
                }
            }
        }
    }
}

/// Fill in whatever the command line left out by prompting, in the fixed
/// order weight, altitude, temperature, distance. Preset values must be
/// finite, same as typed answers.
pub fn resolve_query<R: BufRead, W: Write>(
    partial: PartialQuery,
    prompter: &mut Prompter<R, W>,
) -> Result<FlightQuery, InputError> {
    let mut ask = |preset: Option<f64>, question: &Question| match preset {
        Some(value) if value.is_finite() => Ok(value),
        Some(value) => Err(InputError::Format {
            field: question.field,
            text: value.to_string(),
        }),
        None => prompter.ask_number(question),
    };

    Ok(FlightQuery {
        weight_lbs: ask(partial.weight_lbs, &WEIGHT)?,
        altitude_ft: ask(partial.altitude_ft, &ALTITUDE)?,
        disa_c: ask(partial.disa_c, &TEMPERATURE)?,
        distance_nm: ask(partial.distance_nm, &DISTANCE)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_resolves_all_four_in_order() {
        let mut p = prompter("9500\n7000\n1\n300\n");
        let query = resolve_query(PartialQuery::default(), &mut p).unwrap();

        assert_eq!(
            query,
            FlightQuery {
                weight_lbs: 9500.0,
                altitude_ft: 7000.0,
                disa_c: 1.0,
                distance_nm: 300.0,
            }
        );
        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(
            shown,
            "Enter weight (lbs): Enter altitude (ft): Enter temperature (°C): \
             Enter the total distance (nautical miles): "
        );
    }

    #[test]
    fn test_preset_values_are_not_prompted() {
        let mut p = prompter("  -5.5 \n");
        let partial = PartialQuery {
            weight_lbs: Some(3400.0),
            altitude_ft: Some(8000.0),
            disa_c: None,
            distance_nm: Some(120.0),
        };
        let query = resolve_query(partial, &mut p).unwrap();

        assert_eq!(query.disa_c, -5.5);
        assert_eq!(String::from_utf8(p.output).unwrap(), "Enter temperature (°C): ");
    }

    #[test]
    fn test_non_finite_preset_is_rejected() {
        let mut p = prompter("").retry(true);
        let partial = PartialQuery {
            weight_lbs: Some(3400.0),
            altitude_ft: Some(8000.0),
            disa_c: Some(0.0),
            distance_nm: Some(f64::NAN),
        };
        let err = resolve_query(partial, &mut p).unwrap_err();
        assert!(matches!(
            err,
            InputError::Format { field: "distance", ref text } if text == "NaN"
        ));

        let partial = PartialQuery {
            weight_lbs: Some(f64::INFINITY),
            ..partial
        };
        let err = resolve_query(partial, &mut p).unwrap_err();
        assert!(matches!(err, InputError::Format { field: "weight", .. }));
        assert!(p.output.is_empty());
    }

    #[test]
    fn test_unparsable_answer_fails_without_retry() {
        let mut p = prompter("heavy\n");
        let err = p.ask_number(&WEIGHT).unwrap_err();
        assert!(matches!(
            err,
            InputError::Format { field: "weight", ref text } if text == "heavy"
        ));
    }

    #[test]
    fn test_retry_asks_again() {
        let mut p = prompter("abc\nNaN\n3400\n").retry(true);
        assert_eq!(p.ask_number(&WEIGHT).unwrap(), 3400.0);

        let shown = String::from_utf8(p.output).unwrap();
        assert_eq!(shown.matches("Enter weight (lbs): ").count(), 3);
        assert!(shown.contains("'abc' is not a valid number for weight, please try again."));
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("9500\n").retry(true);
        let err = resolve_query(PartialQuery::default(), &mut p).unwrap_err();
        assert!(matches!(err, InputError::EndOfInput { field: "altitude" }));
    }
}
