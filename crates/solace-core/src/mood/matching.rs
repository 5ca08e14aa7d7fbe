//! Mood-based compatibility scoring for connection suggestions.
//!
//! Two users are compared by the distance between their average mood
//! scores. The distance is scaled so that the full 1-5 mood range maps
//! past zero: a gap of ~2.9 points already yields 0%.

/// Points of compatibility lost per unit of average-mood distance.
const DISTANCE_SCALE: f64 = 35.0;

/// Compatibility percentage (0-100) between two average mood scores.
pub fn compatibility_score(my_average: f64, other_average: f64) -> u8 {
    let diff = (my_average - other_average).abs();
    let score = (100.0 - diff * DISTANCE_SCALE).max(0.0);
    score.round() as u8
}

/// Short explanation of why a match was suggested.
pub fn match_reason(score: u8) -> &'static str {
    if score >= 85 {
        "Very similar emotional wavelength"
    } else if score >= 70 {
        "Compatible vibes for meaningful connection"
    } else {
        "Close enough for interesting conversation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_averages_score_100() {
        assert_eq!(compatibility_score(3.0, 3.0), 100);
        assert_eq!(compatibility_score(4.2, 4.2), 100);
    }

    #[test]
    fn test_score_drops_with_distance() {
        // |4.0 - 3.0| * 35 = 35 -> 65%
        assert_eq!(compatibility_score(4.0, 3.0), 65);
        // |5.0 - 4.5| * 35 = 17.5 -> 82.5 rounds to 83
        assert_eq!(compatibility_score(5.0, 4.5), 83);
    }

    #[test]
    fn test_score_floors_at_zero() {
        // Max possible distance is 4.0 -> 100 - 140 clamps to 0
        assert_eq!(compatibility_score(5.0, 1.0), 0);
        assert_eq!(compatibility_score(1.0, 5.0), 0);
    }

    #[test]
    fn test_score_is_symmetric() {
        assert_eq!(
            compatibility_score(2.5, 4.0),
            compatibility_score(4.0, 2.5)
        );
    }

    #[test]
    fn test_match_reason_thresholds() {
        assert_eq!(match_reason(100), "Very similar emotional wavelength");
        assert_eq!(match_reason(85), "Very similar emotional wavelength");
        assert_eq!(match_reason(84), "Compatible vibes for meaningful connection");
        assert_eq!(match_reason(70), "Compatible vibes for meaningful connection");
        assert_eq!(match_reason(69), "Close enough for interesting conversation");
        assert_eq!(match_reason(0), "Close enough for interesting conversation");
    }
}
