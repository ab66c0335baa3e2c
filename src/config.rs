use std::time::Duration;

use chrono::{DateTime, Datelike};

/// Stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Fixed delays driving the splash, popup and navigation effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long the loading splash stays up.
    pub splash: Duration,
    /// Upper bound on the splash if the splash timer never fires.
    pub safety: Duration,
    /// Delay between the page appearing and the welcome popup.
    pub welcome: Duration,
    /// Wait after navigating home before scrolling, so the sections exist.
    pub scroll_after_nav: Duration,
    /// Per-character delay of the splash typing effect.
    pub type_tick: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            splash: Duration::from_millis(1500),
            safety: Duration::from_millis(4000),
            welcome: Duration::from_millis(1200),
            scroll_after_nav: Duration::from_millis(100),
            type_tick: Duration::from_millis(50),
        }
    }
}

pub fn build_year() -> Option<i32> {
    parse_year(BUILD_TIME)
}

fn parse_year(rfc3339: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|dt| dt.year())
}

/// Year range for the footer copyright line.
pub fn copyright_span(since: i32, year: Option<i32>) -> String {
    match year {
        Some(y) if y > since => format!("{since}-{y}"),
        _ => since.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.splash.as_millis(), 1500);
        assert_eq!(t.welcome.as_millis(), 1200);
        assert_eq!(t.scroll_after_nav.as_millis(), 100);
        // the safety net only matters if it outlasts the normal splash
        assert!(t.safety > t.splash);
    }

    #[test]
    fn test_build_year_is_stamped() {
        let year = build_year().expect("BUILD_TIME should be RFC 3339");
        assert!(year >= 2024);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2026-10-17T08:30:00+00:00"), Some(2026));
        assert_eq!(parse_year("yesterday"), None);
    }

    #[test]
    fn test_copyright_span() {
        assert_eq!(copyright_span(2024, Some(2024)), "2024");
        assert_eq!(copyright_span(2024, Some(2026)), "2024-2026");
        assert_eq!(copyright_span(2024, None), "2024");
        // clock skew on the build machine shouldn't produce "2024-2023"
        assert_eq!(copyright_span(2024, Some(2023)), "2024");
    }
}
