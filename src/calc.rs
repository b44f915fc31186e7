// ---------------------------------------------------------------------------
// Flight time from distance and true airspeed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("cannot compute flight time for {distance_nm} nm at zero airspeed")]
    ZeroSpeed { distance_nm: f64 },
}

/// Elapsed hours to cover `distance_nm` at `speed_ktas`. Unrounded.
pub fn flight_time_hours(distance_nm: f64, speed_ktas: f64) -> Result<f64, CalcError> {
    if speed_ktas == 0.0 {
        return Err(CalcError::ZeroSpeed { distance_nm });
    }
    Ok(distance_nm / speed_ktas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_time() {
        assert_eq!(flight_time_hours(300.0, 160.0), Ok(1.875));
        assert_eq!(flight_time_hours(0.0, 160.0), Ok(0.0));
    }

    #[test]
    fn test_zero_speed_is_an_error() {
        assert_eq!(
            flight_time_hours(300.0, 0.0),
            Err(CalcError::ZeroSpeed { distance_nm: 300.0 })
        );
        assert!(flight_time_hours(300.0, -0.0).is_err());
    }
}
