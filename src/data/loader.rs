use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::model::{AircraftModel, CruisePoint, PerformanceTable, TemperatureEntry, WeightEntry};

/// Error type for loading a performance table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed performance data at `{path}`: {reason}")]
    Structure { path: String, reason: String },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

fn structure(path: impl Into<String>, reason: impl Into<String>) -> LoadError {
    LoadError::Structure {
        path: path.into(),
        reason: reason.into(),
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a performance table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – nested `{ "cruise": [ { "modelName", "weights": [...] } ] }` document
/// * `.csv`  – flat export, one row per cruise point
pub fn load_file(path: &Path) -> Result<PerformanceTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            from_json_str(&text)?
        }
        "csv" => {
            let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            from_csv_reader(file)?
        }
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    if table.is_empty() {
        log::warn!("No aircraft models in {}", path.display());
    }
    log::info!(
        "Loaded {} model(s), {} cruise point(s) from {}",
        table.len(),
        table.cruise_point_count(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a JSON document into a [`PerformanceTable`].
pub fn from_json_str(text: &str) -> Result<PerformanceTable, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    from_json_value(&root)
}

/// Expected JSON schema:
///
/// ```json
/// {
///   "cruise": [
///     {
///       "modelName": "Cirrus SR22 G1",
///       "weights": [
///         {
///           "weight_lbs": 3400,
///           "temperatures": [
///             {
///               "disa_c": 0,
///               "cruisePoints": [
///                 { "altitude_ft": 8000, "speed_ktas": 180, "fuelFlow_pph": 84 }
///               ]
///             }
///           ]
///         }
///       ]
///     }
///   ]
/// }
/// ```
///
/// Every key is required. Arrays may be empty; the lookup reports that.
pub fn from_json_value(root: &JsonValue) -> Result<PerformanceTable, LoadError> {
    let root = as_object(root, "$")?;
    let models = array_field(root, "cruise", "")?
        .iter()
        .enumerate()
        .map(|(i, m)| parse_model(m, &format!("cruise[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PerformanceTable { models })
}

fn parse_model(val: &JsonValue, path: &str) -> Result<AircraftModel, LoadError> {
    let obj = as_object(val, path)?;
    let model_name = string_field(obj, "modelName", path)?;
    let weights = array_field(obj, "weights", path)?
        .iter()
        .enumerate()
        .map(|(i, w)| parse_weight(w, &format!("{path}.weights[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AircraftModel {
        model_name,
        weights,
    })
}

fn parse_weight(val: &JsonValue, path: &str) -> Result<WeightEntry, LoadError> {
    let obj = as_object(val, path)?;
    let weight_lbs = number_field(obj, "weight_lbs", path)?;
    let temperatures = array_field(obj, "temperatures", path)?
        .iter()
        .enumerate()
        .map(|(i, t)| parse_temperature(t, &format!("{path}.temperatures[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeightEntry {
        weight_lbs,
        temperatures,
    })
}

fn parse_temperature(val: &JsonValue, path: &str) -> Result<TemperatureEntry, LoadError> {
    let obj = as_object(val, path)?;
    let disa_c = number_field(obj, "disa_c", path)?;
    let cruise_points = array_field(obj, "cruisePoints", path)?
        .iter()
        .enumerate()
        .map(|(i, cp)| parse_cruise_point(cp, &format!("{path}.cruisePoints[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TemperatureEntry {
        disa_c,
        cruise_points,
    })
}

fn parse_cruise_point(val: &JsonValue, path: &str) -> Result<CruisePoint, LoadError> {
    let obj = as_object(val, path)?;
    Ok(CruisePoint {
        altitude_ft: number_field(obj, "altitude_ft", path)?,
        speed_ktas: number_field(obj, "speed_ktas", path)?,
        fuel_flow_pph: number_field(obj, "fuelFlow_pph", path)?,
    })
}

// -- JSON helpers --

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn as_object<'a>(val: &'a JsonValue, path: &str) -> Result<&'a Map<String, JsonValue>, LoadError> {
    val.as_object()
        .ok_or_else(|| structure(path, "expected an object"))
}

fn field<'a>(
    obj: &'a Map<String, JsonValue>,
    key: &str,
    path: &str,
) -> Result<&'a JsonValue, LoadError> {
    obj.get(key)
        .ok_or_else(|| structure(join(path, key), "missing required field"))
}

fn number_field(obj: &Map<String, JsonValue>, key: &str, path: &str) -> Result<f64, LoadError> {
    field(obj, key, path)?
        .as_f64()
        .ok_or_else(|| structure(join(path, key), "expected a number"))
}

fn string_field(obj: &Map<String, JsonValue>, key: &str, path: &str) -> Result<String, LoadError> {
    field(obj, key, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| structure(join(path, key), "expected a string"))
}

fn array_field<'a>(
    obj: &'a Map<String, JsonValue>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<JsonValue>, LoadError> {
    field(obj, key, path)?
        .as_array()
        .ok_or_else(|| structure(join(path, key), "expected an array"))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

const CSV_COLUMNS: [&str; 6] = [
    "modelName",
    "weight_lbs",
    "disa_c",
    "altitude_ft",
    "speed_ktas",
    "fuelFlow_pph",
];

/// CSV layout: header row naming [`CSV_COLUMNS`] (any order, extra columns
/// ignored), one row per cruise point. Rows are grouped back into the nested
/// table in order of first appearance at every level.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<PerformanceTable, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut idx = [0usize; 6];
    for (slot, name) in idx.iter_mut().zip(CSV_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| structure(format!("header.{name}"), "missing required column"))?;
    }

    let mut table = PerformanceTable::default();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(row_no as u64 + 2, |p| p.line());

        let model_name = record.get(idx[0]).unwrap_or("").trim();
        if model_name.is_empty() {
            return Err(structure(
                format!("line {line}.modelName"),
                "expected a model name",
            ));
        }
        let mut numbers = [0.0f64; 5];
        for (k, value) in numbers.iter_mut().enumerate() {
            let col = CSV_COLUMNS[k + 1];
            let text = record.get(idx[k + 1]).unwrap_or("").trim();
            *value = text.parse::<f64>().map_err(|_| {
                structure(format!("line {line}.{col}"), format!("'{text}' is not a number"))
            })?;
        }
        let [weight_lbs, disa_c, altitude_ft, speed_ktas, fuel_flow_pph] = numbers;

        let m = match table.models.iter().position(|m| m.model_name == model_name) {
            Some(i) => i,
            None => {
                table.models.push(AircraftModel {
                    model_name: model_name.to_string(),
                    weights: Vec::new(),
                });
                table.models.len() - 1
            }
        };
        let weights = &mut table.models[m].weights;
        let w = match weights.iter().position(|w| w.weight_lbs == weight_lbs) {
            Some(i) => i,
            None => {
                weights.push(WeightEntry {
                    weight_lbs,
                    temperatures: Vec::new(),
                });
                weights.len() - 1
            }
        };
        let temperatures = &mut weights[w].temperatures;
        let t = match temperatures.iter().position(|t| t.disa_c == disa_c) {
            Some(i) => i,
            None => {
                temperatures.push(TemperatureEntry {
                    disa_c,
                    cruise_points: Vec::new(),
                });
                temperatures.len() - 1
            }
        };
        temperatures[t].cruise_points.push(CruisePoint {
            altitude_ft,
            speed_ktas,
            fuel_flow_pph,
        });
    }

    Ok(table)
}
