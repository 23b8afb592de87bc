//! Playback time formatting

/// Format a playback time in seconds as `MM:SS`, or `H:MM:SS` past one hour.
///
/// Fractional seconds are truncated. Negative and non-finite inputs (a
/// duration read before metadata has loaded) render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_an_hour() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(9.99), "00:09");
        assert_eq!(format_time(83.4), "01:23");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn past_an_hour() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3725.0), "1:02:05");
        assert_eq!(format_time(36_000.0 + 61.0), "10:01:01");
    }

    #[test]
    fn invalid_input_renders_zero() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-4.0), "00:00");
    }
}
