use serde::Serialize;

use crate::data::model::CruisePoint;

// ---------------------------------------------------------------------------
// Flight query – validated operator inputs
// ---------------------------------------------------------------------------

/// The four inputs of one estimate, all present and numeric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightQuery {
    pub weight_lbs: f64,
    pub altitude_ft: f64,
    /// Temperature deviation from ISA in °C.
    pub disa_c: f64,
    pub distance_nm: f64,
}

/// Inputs known before prompting (from the command line). Missing values are
/// asked for interactively.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialQuery {
    pub weight_lbs: Option<f64>,
    pub altitude_ft: Option<f64>,
    pub disa_c: Option<f64>,
    pub distance_nm: Option<f64>,
}

// ---------------------------------------------------------------------------
// Estimate – the result of one query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub model_name: String,
    pub query: FlightQuery,
    pub cruise_point: CruisePoint,
    pub flight_time_hours: f64,
}
