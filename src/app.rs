use crate::calc::{flight_time_hours, CalcError};
use crate::data::lookup::{find_cruise_point, find_cruise_point_in, Level, LookupError};
use crate::data::model::{AircraftModel, PerformanceTable};
use crate::query::{Estimate, FlightQuery};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    FlightTime(#[from] CalcError),
}

// ---------------------------------------------------------------------------
// Planner – owns the loaded table and answers queries against it
// ---------------------------------------------------------------------------

pub struct Planner {
    table: PerformanceTable,
    /// Explicit model choice; `None` means the first model in the table.
    model_name: Option<String>,
}

impl Planner {
    pub fn new(table: PerformanceTable) -> Self {
        Self {
            table,
            model_name: None,
        }
    }

    /// Select the aircraft model by name instead of using the first one.
    pub fn with_model(mut self, model_name: Option<String>) -> Self {
        self.model_name = model_name;
        self
    }

    pub fn table(&self) -> &PerformanceTable {
        &self.table
    }

    /// The model queries run against.
    pub fn model(&self) -> Result<&AircraftModel, LookupError> {
        match &self.model_name {
            Some(name) => self
                .table
                .model(name)
                .ok_or_else(|| LookupError::UnknownModel(name.clone())),
            None => {
                let first = self
                    .table
                    .models
                    .first()
                    .ok_or(LookupError::NotFound { level: Level::Model })?;
                if self.table.len() > 1 {
                    log::warn!(
                        "{} models in performance data, using the first ('{}'); pass --model to choose",
                        self.table.len(),
                        first.model_name
                    );
                }
                Ok(first)
            }
        }
    }

    /// Resolve the nearest cruise point and derive the flight time.
    pub fn estimate(&self, query: &FlightQuery) -> Result<Estimate, EstimateError> {
        let model = self.model()?;
        let FlightQuery {
            weight_lbs,
            altitude_ft,
            disa_c,
            distance_nm,
        } = *query;
        let cruise_point = match self.model_name {
            Some(_) => find_cruise_point_in(model, weight_lbs, altitude_ft, disa_c)?,
            None => find_cruise_point(&self.table, weight_lbs, altitude_ft, disa_c)?,
        };
        let flight_time_hours = flight_time_hours(distance_nm, cruise_point.speed_ktas)?;

        log::info!(
            "{}: {} pph at {} KTAS, {flight_time_hours:.3} h for {} nm",
            model.model_name,
            cruise_point.fuel_flow_pph,
            cruise_point.speed_ktas,
            distance_nm
        );

        Ok(Estimate {
            model_name: model.model_name.clone(),
            query: *query,
            cruise_point,
            flight_time_hours,
        })
    }
}
