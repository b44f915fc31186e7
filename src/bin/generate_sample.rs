use anyhow::{Context, Result};
use serde_json::{json, Value};

const MODEL_NAME: &str = "Cirrus SR22 G1";
const WEIGHTS_LBS: [f64; 2] = [2900.0, 3400.0];
const DISA_C: [f64; 3] = [-10.0, 0.0, 10.0];
const ALTITUDES_FT: [f64; 7] = [2000.0, 4000.0, 6000.0, 8000.0, 10000.0, 12000.0, 14000.0];

/// Avgas weight, lbs per US gallon.
const AVGAS_LBS_PER_GAL: f64 = 6.0;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Smooth stand-in for a POH cruise chart: speed rises with altitude and
/// falls with weight, fuel flow falls as power drops off with altitude.
fn cruise_point(weight_lbs: f64, disa_c: f64, altitude_ft: f64) -> Value {
    let alt_k = altitude_ft / 1000.0;
    let speed_ktas = 168.0 + 1.6 * alt_k - (weight_lbs - 2900.0) / 100.0 + 0.1 * disa_c;
    let fuel_gph = 15.5 - 0.45 * alt_k - 0.02 * disa_c;

    json!({
        "altitude_ft": altitude_ft,
        "speed_ktas": round1(speed_ktas),
        "fuelFlow_pph": round1(fuel_gph * AVGAS_LBS_PER_GAL),
    })
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_performance.json".to_string());

    let weights: Vec<Value> = WEIGHTS_LBS
        .iter()
        .map(|&weight_lbs| {
            let temperatures: Vec<Value> = DISA_C
                .iter()
                .map(|&disa_c| {
                    let points: Vec<Value> = ALTITUDES_FT
                        .iter()
                        .map(|&alt| cruise_point(weight_lbs, disa_c, alt))
                        .collect();
                    json!({ "disa_c": disa_c, "cruisePoints": points })
                })
                .collect();
            json!({ "weight_lbs": weight_lbs, "temperatures": temperatures })
        })
        .collect();

    let document = json!({
        "cruise": [{ "modelName": MODEL_NAME, "weights": weights }]
    });

    let text = serde_json::to_string_pretty(&document).context("serializing sample table")?;
    std::fs::write(&output_path, text + "\n")
        .with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {} cruise points for {MODEL_NAME} to {output_path}",
        WEIGHTS_LBS.len() * DISA_C.len() * ALTITUDES_FT.len()
    );
    Ok(())
}
