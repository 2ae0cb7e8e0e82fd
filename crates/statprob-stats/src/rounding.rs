//! Decimal rounding for display values
//!
//! Rounding here is presentation only. Tables keep full-precision values and
//! derive rounded columns from them, never the other way around.

/// Number of decimal places shown in PDF/CDF trace strings.
pub const TRACE_DECIMALS: usize = 4;

/// Number of decimal places kept in percentage columns.
pub const PERCENTAGE_DECIMALS: i32 = 2;

/// Rounds `value` to `decimals` places, resolving ties to the even neighbour.
///
/// The value is scaled by `10^decimals`, rounded half-to-even and scaled back,
/// which is the usual behaviour of array-oriented numeric libraries.
///
/// # Examples
///
/// ```
/// # use statprob_stats::rounding::round_half_even;
/// assert_eq!(round_half_even(12.345_678, 2), 12.35);
/// assert_eq!(round_half_even(0.125, 2), 0.12);
/// assert_eq!(round_half_even(40.0, 2), 40.0);
/// ```
#[must_use]
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Converts a probability into a percentage rounded for display.
///
/// # Examples
///
/// ```
/// # use statprob_stats::rounding::percentage;
/// assert_eq!(percentage(0.35), 35.0);
/// assert_eq!(percentage(1.0 / 3.0), 33.33);
/// ```
#[must_use]
pub fn percentage(probability: f64) -> f64 {
    round_half_even(probability * 100.0, PERCENTAGE_DECIMALS)
}

/// Formats a value with [`TRACE_DECIMALS`] fixed decimal places.
#[must_use]
pub fn format_trace_value(value: f64) -> String {
    let decimals = TRACE_DECIMALS;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
        assert_eq!(round_half_even(-2.5, 0), -2.0);
    }

    #[test]
    fn test_percentage_of_exact_fractions() {
        assert_eq!(percentage(0.4), 40.0);
        assert_eq!(percentage(0.25), 25.0);
        assert_eq!(percentage(0.15), 15.0);
        assert_eq!(percentage(1.0), 100.0);
        assert_eq!(percentage(0.0), 0.0);
    }

    #[test]
    fn test_percentage_of_repeating_fractions() {
        assert_eq!(percentage(2.0 / 3.0), 66.67);
        assert_eq!(percentage(1.0 / 7.0), 14.29);
    }

    #[test]
    fn test_format_trace_value() {
        assert_eq!(format_trace_value(0.4), "0.4000");
        assert_eq!(format_trace_value(1.0), "1.0000");
        assert_eq!(format_trace_value(1.0 / 3.0), "0.3333");
        assert_eq!(format_trace_value(0.0), "0.0000");
    }
}
