use std::fmt;

use super::model::{AircraftModel, CruisePoint, PerformanceTable};
use super::nearest::nearest;

/// Nesting level at which a lookup ran out of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Model,
    Weight,
    Temperature,
    Altitude,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Model => write!(f, "aircraft model"),
            Level::Weight => write!(f, "weight"),
            Level::Temperature => write!(f, "temperature deviation"),
            Level::Altitude => write!(f, "altitude"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("no cruise point found: no {level} entries to match")]
    NotFound { level: Level },
    #[error("aircraft model '{0}' not found in performance data")]
    UnknownModel(String),
}

fn not_found(level: Level) -> LookupError {
    LookupError::NotFound { level }
}

/// Resolve a cruise point from the FIRST model of the table.
///
/// Model selection by name is a separate step (see [`PerformanceTable::model`]);
/// this entry point keeps the single-model behavior.
pub fn find_cruise_point(
    table: &PerformanceTable,
    weight_lbs: f64,
    altitude_ft: f64,
    disa_c: f64,
) -> Result<CruisePoint, LookupError> {
    let model = table.models.first().ok_or(not_found(Level::Model))?;
    find_cruise_point_in(model, weight_lbs, altitude_ft, disa_c)
}

/// Walk one model's table: nearest weight, then nearest temperature
/// deviation within it, then nearest altitude within that. At each level the
/// first entry equal to the nearest value is taken.
pub fn find_cruise_point_in(
    model: &AircraftModel,
    weight_lbs: f64,
    altitude_ft: f64,
    disa_c: f64,
) -> Result<CruisePoint, LookupError> {
    let closest_weight = nearest(model.weights.iter().map(|w| w.weight_lbs), weight_lbs)
        .map_err(|_| not_found(Level::Weight))?;
    let weight = model
        .weights
        .iter()
        .find(|w| w.weight_lbs == closest_weight)
        .ok_or(not_found(Level::Weight))?;
    log::debug!(
        "{}: nearest weight {closest_weight} lbs (target {weight_lbs})",
        model.model_name
    );

    let closest_disa = nearest(weight.temperatures.iter().map(|t| t.disa_c), disa_c)
        .map_err(|_| not_found(Level::Temperature))?;
    let temperature = weight
        .temperatures
        .iter()
        .find(|t| t.disa_c == closest_disa)
        .ok_or(not_found(Level::Temperature))?;
    log::debug!(
        "{}: nearest ISA deviation {closest_disa} °C (target {disa_c})",
        model.model_name
    );

    let closest_altitude = nearest(
        temperature.cruise_points.iter().map(|c| c.altitude_ft),
        altitude_ft,
    )
    .map_err(|_| not_found(Level::Altitude))?;
    let point = temperature
        .cruise_points
        .iter()
        .find(|c| c.altitude_ft == closest_altitude)
        .copied()
        .ok_or(not_found(Level::Altitude))?;
    log::debug!(
        "{}: nearest altitude {closest_altitude} ft (target {altitude_ft})",
        model.model_name
    );

    Ok(point)
}
