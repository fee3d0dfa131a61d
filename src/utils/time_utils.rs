use std::time::Duration;

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    /// Coarse "Ns ago" label used by the live feed.
    pub fn format_age(age: Duration) -> String {
        let secs = age.as_secs();
        if secs == 0 {
            return "just now".to_string();
        }
        if secs < 60 {
            return format!("{}s ago", secs);
        }
        let mins = secs / 60;
        if mins < 60 {
            return format!("{}m ago", mins);
        }
        format!("{}h ago", mins / 60)
    }

    /// Fastest the demo clock may run relative to the wall clock.
    pub const MAX_TIME_SCALE: f32 = 1000.0;

    /// Scales a wall-clock duration by the demo time scale (2.0 plays twice as fast).
    /// Non-finite or non-positive factors mean 1x; larger factors are capped at `MAX_TIME_SCALE`.
    pub fn scale(elapsed: Duration, time_scale: f32) -> Duration {
        if time_scale <= 0.0 || !time_scale.is_finite() {
            return elapsed;
        }
        let factor = f64::from(time_scale.min(Self::MAX_TIME_SCALE));
        Duration::try_from_secs_f64(elapsed.as_secs_f64() * factor).unwrap_or(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_labels() {
        assert_eq!(TimeUtils::format_age(Duration::from_millis(400)), "just now");
        assert_eq!(TimeUtils::format_age(Duration::from_secs(10)), "10s ago");
        assert_eq!(TimeUtils::format_age(Duration::from_secs(125)), "2m ago");
        assert_eq!(TimeUtils::format_age(Duration::from_secs(7300)), "2h ago");
    }

    #[test]
    fn scale_ignores_nonsense_factors() {
        let d = Duration::from_secs(2);
        assert_eq!(TimeUtils::scale(d, 2.0), Duration::from_secs(4));
        assert_eq!(TimeUtils::scale(d, 0.0), d);
        assert_eq!(TimeUtils::scale(d, f32::NAN), d);
    }

    #[test]
    fn scale_caps_huge_factors() {
        let d = Duration::from_secs(2);
        let cap = Duration::from_secs(2 * TimeUtils::MAX_TIME_SCALE as u64);
        assert_eq!(TimeUtils::scale(d, 1e20), cap);
        assert_eq!(TimeUtils::scale(d, f32::MAX), cap);
        let huge = Duration::from_secs(u64::MAX / 2);
        assert_eq!(TimeUtils::scale(huge, 1e20), huge);
    }
}
