use std::io::{self, Write};

use crate::data::model::PerformanceTable;
use crate::query::Estimate;

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

/// Print the inputs and the resolved cruise figures, flight time to 2 decimals
/// (ties round to even).
pub fn write_text<W: Write>(out: &mut W, estimate: &Estimate) -> io::Result<()> {
    let q = &estimate.query;
    let cp = &estimate.cruise_point;
    writeln!(
        out,
        "with weight: {:?}, altitude: {:?}, temperature: {:?} and distance: {:?}",
        q.weight_lbs, q.altitude_ft, q.disa_c, q.distance_nm
    )?;
    writeln!(out, "Closest Fuel Flow (pph): {}", cp.fuel_flow_pph)?;
    writeln!(out, "Closest True Airspeed (knots): {}", cp.speed_ktas)?;
    writeln!(
        out,
        "Estimated Flight Time (hours): {:.2}",
        estimate.flight_time_hours
    )
}

/// One JSON object per estimate, flight time unrounded.
pub fn write_json<W: Write>(out: &mut W, estimate: &Estimate) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, estimate)?;
    writeln!(out)
}

/// Model names in table order, one per line.
pub fn write_model_list<W: Write>(out: &mut W, table: &PerformanceTable) -> io::Result<()> {
    for name in table.model_names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CruisePoint;
    use crate::query::FlightQuery;

    fn estimate() -> Estimate {
        Estimate {
            model_name: "Cirrus SR22 G1".to_string(),
            query: FlightQuery {
                weight_lbs: 9500.0,
                altitude_ft: 7000.0,
                disa_c: 1.0,
                distance_nm: 300.0,
            },
            cruise_point: CruisePoint {
                altitude_ft: 8000.0,
                speed_ktas: 160.0,
                fuel_flow_pph: 13.0,
            },
            flight_time_hours: 1.875,
        }
    }

    #[test]
    fn test_text_report_lines() {
        let mut out = Vec::new();
        write_text(&mut out, &estimate()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "with weight: 9500.0, altitude: 7000.0, temperature: 1.0 and distance: 300.0",
                "Closest Fuel Flow (pph): 13",
                "Closest True Airspeed (knots): 160",
                "Estimated Flight Time (hours): 1.88",
            ]
        );
    }

    #[test]
    fn test_flight_time_ties_round_to_even() {
        let text_for = |distance_nm: f64, speed_ktas: f64| {
            let mut e = estimate();
            e.flight_time_hours = distance_nm / speed_ktas;
            let mut out = Vec::new();
            write_text(&mut out, &e).unwrap();
            String::from_utf8(out).unwrap()
        };

        // 13 nm at 104 kt is exactly 0.125 h
        assert!(text_for(13.0, 104.0).ends_with("Estimated Flight Time (hours): 0.12\n"));
        // 9 nm at 120 kt is just below 0.075 h
        assert!(text_for(9.0, 120.0).ends_with("Estimated Flight Time (hours): 0.07\n"));
        assert!(text_for(300.0, 160.0).ends_with("Estimated Flight Time (hours): 1.88\n"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json(&mut out, &estimate()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["model_name"], "Cirrus SR22 G1");
        assert_eq!(value["flight_time_hours"], 1.875);
        assert_eq!(value["cruise_point"]["fuelFlow_pph"], 13.0);
        assert_eq!(value["query"]["distance_nm"], 300.0);
    }
}
