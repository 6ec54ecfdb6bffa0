use crate::ranking::types::{DayScore, OverallScore};
use crate::ranking::utility::mean;

/// Folds per-day scores into one [`OverallScore`].
///
/// Each activity is the arithmetic mean over all days, rounded half away
/// from zero. An empty horizon yields all zeros.
pub fn aggregate_scores(days: &[DayScore]) -> OverallScore {
    if days.is_empty() {
        return OverallScore::default();
    }

    let average = |field: fn(&DayScore) -> u8| -> u8 {
        let series: Vec<f64> = days.iter().map(|d| f64::from(field(d))).collect();
        mean(&series).round() as u8
    };

    OverallScore {
        skiing: average(|d| d.skiing),
        surfing: average(|d| d.surfing),
        outdoor_sightseeing: average(|d| d.outdoor_sightseeing),
        indoor_sightseeing: average(|d| d.indoor_sightseeing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(skiing: u8, surfing: u8, outdoor: u8, indoor: u8) -> DayScore {
        DayScore {
            date: "2026-01-10".to_string(),
            skiing,
            surfing,
            outdoor_sightseeing: outdoor,
            indoor_sightseeing: indoor,
        }
    }

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(aggregate_scores(&[]), OverallScore::default());
    }

    #[test]
    fn test_single_day_is_identity() {
        let overall = aggregate_scores(&[score(90, 0, 40, 70)]);

        assert_eq!(overall.skiing, 90);
        assert_eq!(overall.surfing, 0);
        assert_eq!(overall.outdoor_sightseeing, 40);
        assert_eq!(overall.indoor_sightseeing, 70);
    }

    #[test]
    fn test_rounded_mean_per_activity() {
        let days = [
            score(90, 10, 40, 70),
            score(60, 20, 100, 50),
            score(0, 100, 85, 90),
        ];

        let overall = aggregate_scores(&days);

        // 150/3, 130/3, 225/3, 210/3
        assert_eq!(overall.skiing, 50);
        assert_eq!(overall.surfing, 43);
        assert_eq!(overall.outdoor_sightseeing, 75);
        assert_eq!(overall.indoor_sightseeing, 70);
    }

    #[test]
    fn test_ties_round_up() {
        let overall = aggregate_scores(&[score(1, 50, 0, 99), score(2, 51, 1, 100)]);

        assert_eq!(overall.skiing, 2);
        assert_eq!(overall.surfing, 51);
        assert_eq!(overall.outdoor_sightseeing, 1);
        assert_eq!(overall.indoor_sightseeing, 100);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut days = vec![score(10, 20, 30, 40), score(55, 65, 75, 85), score(0, 0, 100, 100)];
        let forward = aggregate_scores(&days);
        days.reverse();

        assert_eq!(aggregate_scores(&days), forward);
    }
}
