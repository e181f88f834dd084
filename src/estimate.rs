//! Wall-clock estimates for exhaustive search.
//!
//! Exact search over `n` waypoints scores roughly `(n-1)!` orders. These
//! helpers turn that into seconds and a short human description so a host
//! can ask for confirmation before forcing an exact run on a large instance.
//! They carry no algorithmic weight.

/// Baseline cost of scoring one visiting order, in seconds.
pub const SECONDS_PER_PERMUTATION: f64 = 0.0005;

/// Permutation count beyond which the estimate is reported as unbounded.
pub const PERMUTATION_CAP: f64 = 1e9;

/// Estimate reported for trivial instances.
const TRIVIAL_SECONDS: f64 = 0.05;

/// Estimated seconds for an exact search over `waypoints` locations.
///
/// Returns `f64::INFINITY` once `(n-1)!` exceeds [`PERMUTATION_CAP`].
///
/// # Examples
///
/// ```
/// use itinerary_engine::estimate::estimate_exact_seconds;
///
/// assert_eq!(estimate_exact_seconds(2), 0.05);
/// assert!((estimate_exact_seconds(5) - 24.0 * 0.0005).abs() < 1e-12);
/// assert!(estimate_exact_seconds(20).is_infinite());
/// ```
pub fn estimate_exact_seconds(waypoints: usize) -> f64 {
    if waypoints <= 2 {
        return TRIVIAL_SECONDS;
    }
    match capped_factorial(waypoints - 1) {
        Some(permutations) => permutations * SECONDS_PER_PERMUTATION,
        None => f64::INFINITY,
    }
}

/// `n!`, or `None` once it exceeds [`PERMUTATION_CAP`].
fn capped_factorial(n: usize) -> Option<f64> {
    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
        if result > PERMUTATION_CAP {
            return None;
        }
    }
    Some(result)
}

/// Formats an estimate in the largest sensible unit.
///
/// # Examples
///
/// ```
/// use itinerary_engine::estimate::format_duration_estimate;
///
/// assert_eq!(format_duration_estimate(0.2), "< 1 second");
/// assert_eq!(format_duration_estimate(90.0), "~2 minutes");
/// assert_eq!(format_duration_estimate(f64::INFINITY), "> several days");
/// ```
pub fn format_duration_estimate(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "> several days".to_string();
    }
    if seconds < 1.0 {
        return "< 1 second".to_string();
    }
    if seconds < 60.0 {
        return approx(seconds, "second", "seconds");
    }
    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return approx(minutes, "minute", "minutes");
    }
    let hours = minutes / 60.0;
    if hours < 24.0 {
        return approx(hours, "hour", "hours");
    }
    approx(hours / 24.0, "day", "days")
}

fn approx(value: f64, singular: &str, plural: &str) -> String {
    let rounded = value.round().max(1.0) as u64;
    let unit = if rounded == 1 { singular } else { plural };
    format!("~{rounded} {unit}")
}

/// Describes the expected exact-search time for `waypoints` locations.
pub fn describe_exact_estimate(waypoints: usize) -> String {
    format_duration_estimate(estimate_exact_seconds(waypoints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_sizes() {
        assert_eq!(estimate_exact_seconds(0), 0.05);
        assert_eq!(estimate_exact_seconds(1), 0.05);
        assert_eq!(estimate_exact_seconds(2), 0.05);
    }

    #[test]
    fn test_factorial_growth() {
        // 8! = 40320 orders for 9 waypoints.
        assert!((estimate_exact_seconds(9) - 40320.0 * 0.0005).abs() < 1e-9);
        // 12! = 479001600 is still under the cap.
        assert!(estimate_exact_seconds(13).is_finite());
        // 13! exceeds it.
        assert!(estimate_exact_seconds(14).is_infinite());
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_duration_estimate(1.0), "~1 second");
        assert_eq!(format_duration_estimate(59.4), "~59 seconds");
        assert_eq!(format_duration_estimate(60.0), "~1 minute");
        assert_eq!(format_duration_estimate(7200.0), "~2 hours");
        assert_eq!(format_duration_estimate(86400.0), "~1 day");
        assert_eq!(format_duration_estimate(3.0 * 86400.0), "~3 days");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe_exact_estimate(3), "< 1 second");
        // 8! * 0.5ms = 20.16s
        assert_eq!(describe_exact_estimate(9), "~20 seconds");
        assert_eq!(describe_exact_estimate(11), "~30 minutes");
        assert_eq!(describe_exact_estimate(40), "> several days");
    }
}
