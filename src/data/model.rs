use serde::Serialize;

// ---------------------------------------------------------------------------
// CruisePoint – one row of the manufacturer's cruise table
// ---------------------------------------------------------------------------

/// A single tabulated cruise condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CruisePoint {
    pub altitude_ft: f64,
    /// True airspeed in knots.
    pub speed_ktas: f64,
    /// Fuel flow in pounds per hour.
    #[serde(rename = "fuelFlow_pph")]
    pub fuel_flow_pph: f64,
}

// ---------------------------------------------------------------------------
// Nesting levels: model → weight → temperature deviation → cruise points
// ---------------------------------------------------------------------------

/// Cruise points tabulated for one ISA temperature deviation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureEntry {
    /// Deviation from standard atmosphere in °C.
    pub disa_c: f64,
    #[serde(rename = "cruisePoints")]
    pub cruise_points: Vec<CruisePoint>,
}

/// Temperature entries tabulated for one gross weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightEntry {
    pub weight_lbs: f64,
    pub temperatures: Vec<TemperatureEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftModel {
    #[serde(rename = "modelName")]
    pub model_name: String,
    pub weights: Vec<WeightEntry>,
}

// ---------------------------------------------------------------------------
// PerformanceTable – the complete loaded document
// ---------------------------------------------------------------------------

/// The full parsed performance document. Built once by the loader and only
/// read afterwards; input ordering is preserved at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceTable {
    #[serde(rename = "cruise")]
    pub models: Vec<AircraftModel>,
}

impl PerformanceTable {
    /// Model names in table order.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.model_name.as_str()).collect()
    }

    /// Find a model by name: exact match first, then case-insensitive.
    pub fn model(&self, name: &str) -> Option<&AircraftModel> {
        self.models
            .iter()
            .find(|m| m.model_name == name)
            .or_else(|| {
                self.models
                    .iter()
                    .find(|m| m.model_name.eq_ignore_ascii_case(name))
            })
    }

    /// Total number of tabulated cruise points across all models.
    pub fn cruise_point_count(&self) -> usize {
        self.models
            .iter()
            .flat_map(|m| &m.weights)
            .flat_map(|w| &w.temperatures)
            .map(|t| t.cruise_points.len())
            .sum()
    }

    /// Number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the table holds no models at all.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
