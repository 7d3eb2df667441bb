//! Minimum-sum contiguous window search

use tracing::debug;
use traffic_types::{LowTrafficWindow, Observation};

/// Number of consecutive half-hour intervals in the analysis window
/// (3 × 30 minutes = the 1.5-hour period of the report)
pub const WINDOW_WIDTH: usize = 3;

/// Find the contiguous window of `width` consecutive observations (by
/// timestamp) with the smallest total count.
///
/// The input need not be sorted; a copy is stable-sorted by timestamp
/// first, so observations sharing a timestamp keep their relative input
/// order. The scan keeps a running sum (subtract the observation
/// leaving the window, add the one entering) and uses a strict
/// less-than comparison, so ties resolve to the earliest-starting
/// window. The anchor is the timestamp of the middle observation of
/// the winning window.
///
/// Returns `None` when there are fewer than `width` observations or
/// `width` is zero.
pub fn find_minimum_window(
    observations: &[Observation],
    width: usize,
) -> Option<LowTrafficWindow> {
    if width == 0 || observations.len() < width {
        debug!(
            available = observations.len(),
            required = width,
            "insufficient observations for window analysis"
        );
        return None;
    }

    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|obs| obs.timestamp);

    let mut sum: u64 = sorted[..width].iter().map(|obs| u64::from(obs.count)).sum();
    let mut best_sum = sum;
    let mut best_start = 0;

    for start in 1..=sorted.len() - width {
        sum -= u64::from(sorted[start - 1].count);
        sum += u64::from(sorted[start + width - 1].count);
        if sum < best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    let anchor = sorted[best_start + width / 2].timestamp;
    debug!(%anchor, total = best_sum, "found minimum-traffic window");

    Some(LowTrafficWindow {
        anchor,
        total: best_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn obs(h: u32, m: u32, count: u32) -> Observation {
        Observation::new(ts(h, m), count)
    }

    #[test]
    fn test_finds_minimum_window() {
        // Windows: [10,5,8] = 23 and [5,8,15] = 28
        let data = vec![
            obs(10, 0, 10),
            obs(10, 30, 5),
            obs(11, 0, 8),
            obs(11, 30, 15),
        ];

        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        assert_eq!(window.anchor, ts(10, 30));
        assert_eq!(window.total, 23);
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let data = vec![
            obs(11, 30, 15),
            obs(10, 30, 5),
            obs(11, 0, 8),
            obs(10, 0, 10),
        ];

        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        assert_eq!(window.anchor, ts(10, 30));
        assert_eq!(window.total, 23);
    }

    #[test]
    fn test_tie_resolves_to_earliest_window() {
        // Both [5,5,5] windows sum to 15; the first one must win
        let data = vec![
            obs(10, 0, 5),
            obs(10, 30, 5),
            obs(11, 0, 5),
            obs(11, 30, 5),
        ];

        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        assert_eq!(window.anchor, ts(10, 30));
        assert_eq!(window.total, 15);
    }

    #[test]
    fn test_result_is_true_argmin() {
        let counts = [9, 2, 7, 1, 4, 8, 3, 6, 5, 2];
        let data: Vec<Observation> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| obs(i as u32 / 2, (i as u32 % 2) * 30, c))
            .collect();

        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        for start in 0..=data.len() - WINDOW_WIDTH {
            let sum: u64 = data[start..start + WINDOW_WIDTH]
                .iter()
                .map(|o| u64::from(o.count))
                .sum();
            assert!(window.total <= sum);
        }
        // window sums: 18,10,12,13,15,17,14,13 -> minimum [2,7,1] = 10
        assert_eq!(window.total, 10);
        assert_eq!(window.anchor, data[2].timestamp);
    }

    #[test]
    fn test_exactly_width_observations() {
        let data = vec![obs(10, 0, 1), obs(10, 30, 2), obs(11, 0, 3)];
        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        assert_eq!(window.total, 6);
        assert_eq!(window.anchor, ts(10, 30));
    }

    #[test]
    fn test_too_few_observations_returns_none() {
        let data = vec![obs(10, 0, 1), obs(10, 30, 2)];
        assert!(find_minimum_window(&data, WINDOW_WIDTH).is_none());
        assert!(find_minimum_window(&[], WINDOW_WIDTH).is_none());
    }

    #[test]
    fn test_zero_width_returns_none() {
        let data = vec![obs(10, 0, 1)];
        assert!(find_minimum_window(&data, 0).is_none());
    }

    #[test]
    fn test_zero_counts_window() {
        let data = vec![
            obs(10, 0, 4),
            obs(10, 30, 0),
            obs(11, 0, 0),
            obs(11, 30, 0),
            obs(12, 0, 4),
        ];
        let window = find_minimum_window(&data, WINDOW_WIDTH).unwrap();
        assert_eq!(window.total, 0);
        assert_eq!(window.anchor, ts(11, 0));
    }
}
