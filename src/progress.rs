//! Progress bar arithmetic.

/// Rounded percentage of `current` out of `total`.
///
/// A zero, negative or non-finite `total` reads as 0%. Values past 100 are
/// not clamped, so an overshooting caller stays visible.
pub fn progress_percent(current: f64, total: f64) -> u32 {
    if !total.is_finite() || total <= 0.0 {
        return 0;
    }
    let percent = (current / total * 100.0).round();
    if percent.is_finite() {
        // Saturating cast: negatives become 0.
        percent as u32
    } else {
        0
    }
}

pub fn percent_label(percent: u32) -> String {
    format!("{percent}%")
}
