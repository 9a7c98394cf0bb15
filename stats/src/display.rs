//! Display rounding for table cells.

/// Round a value for display against a kind-specific limit.
///
/// Below the limit the value keeps one decimal place; at or above it the
/// value is rounded to the nearest integer with no decimal point. Each
/// table column picks its own limit (means, errors and log-ratios all
/// differ), so small values stay readable and big ones stay short.
///
/// ```rust
/// # use savbench_stats::round_limited;
/// assert_eq!(round_limited(3.14159, 100.0), "3.1");
/// assert_eq!(round_limited(99.96, 100.0), "100.0");
/// assert_eq!(round_limited(100.0, 100.0), "100");
/// assert_eq!(round_limited(1234.4, 1000.0), "1234");
/// ```
pub fn round_limited(value: f64, limit: f64) -> String {
    if value >= limit {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
