/// Returned when a nearest-value search is asked to choose from nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no candidate values to choose from")]
pub struct EmptyRange;

/// Return the candidate closest to `target` by absolute difference.
///
/// Ties go to the candidate seen first, so the result depends on input
/// order, not on magnitude.
pub fn nearest<I>(candidates: I, target: f64) -> Result<f64, EmptyRange>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(f64, f64)> = None;
    for value in candidates {
        let distance = (value - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            // NaN distances never replace an existing best.
            Some(_) if distance.is_nan() => {}
            _ => best = Some((value, distance)),
        }
    }
    best.map(|(value, _)| value).ok_or(EmptyRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates() {
        assert_eq!(nearest(Vec::new(), 10.0), Err(EmptyRange));
    }

    #[test]
    fn test_picks_closest() {
        assert_eq!(nearest([5000.0, 8000.0, 12000.0], 7000.0), Ok(8000.0));
        assert_eq!(nearest([-10.0, 0.0, 10.0], -6.0), Ok(-10.0));
    }

    #[test]
    fn test_exact_match_returns_candidate() {
        let candidates = [2900.0, 3100.0, 3400.0];
        for c in candidates {
            assert_eq!(nearest(candidates, c), Ok(c));
        }
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(nearest([10.0, 0.0], 5.0), Ok(10.0));
        assert_eq!(nearest([0.0, 10.0], 5.0), Ok(0.0));
    }

    #[test]
    fn test_result_is_member_and_minimal() {
        let candidates = [3.5, -2.0, 17.25, 9.0, 9.0, -40.0, 0.0];
        let mut target = -50.0;
        while target <= 50.0 {
            let found = nearest(candidates, target).unwrap();
            assert!(candidates.contains(&found));
            let best = (found - target).abs();
            assert!(candidates.iter().all(|c| (c - target).abs() >= best));
            target += 0.75;
        }
    }

    #[test]
    fn test_nan_candidate_is_not_preferred() {
        assert_eq!(nearest([f64::NAN, 4.0], 3.0), Ok(4.0));
        assert_eq!(nearest([4.0, f64::NAN], 3.0), Ok(4.0));
    }
}
