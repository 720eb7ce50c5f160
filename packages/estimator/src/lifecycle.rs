//! Lifecycle descriptor parsing.
//!
//! A lifecycle descriptor encodes how often a service recurs per
//! housing unit: "N-M months", the literal "Annually", or "N-M years".
//! Only the first number of a range drives the annualized frequency.
//!
//! An unrecognized descriptor yields zero jobs per year instead of an
//! error. That silently zeroes the service's revenue contribution, so a
//! warning is logged to make the under-count detectable.

/// Converts a lifecycle descriptor to jobs per year.
///
/// - "N-M months" -> `12 / N`
/// - "Annually" -> `1`
/// - "N-M years" -> `1 / N`
/// - anything else -> `0` (logged)
#[must_use]
pub fn jobs_per_year(lifecycle: &str) -> f64 {
    if lifecycle.contains("months") {
        match leading_number(lifecycle) {
            Some(months) => 12.0 / months,
            None => unrecognized(lifecycle),
        }
    } else if lifecycle == "Annually" {
        1.0
    } else if lifecycle.contains("years") {
        match leading_number(lifecycle) {
            Some(years) => 1.0 / years,
            None => unrecognized(lifecycle),
        }
    } else {
        unrecognized(lifecycle)
    }
}

/// Extracts the first number of a "N-M ..." range descriptor.
/// Returns `None` for zero to avoid a nonsensical infinite frequency.
fn leading_number(lifecycle: &str) -> Option<f64> {
    let head = lifecycle.split('-').next().unwrap_or("");
    let digits: String = head.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<f64>().ok().filter(|n| *n > 0.0)
}

fn unrecognized(lifecycle: &str) -> f64 {
    log::warn!("Unrecognized lifecycle descriptor \"{lifecycle}\"; treating as zero jobs/year");
    0.0
}
