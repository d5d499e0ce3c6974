/// Pixels the page must be scrolled before the header switches style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Raw scroll position reported by the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_top > SCROLL_THRESHOLD
    }

    /// Percentage of the scrollable distance covered, always within `0..=100`.
    ///
    /// Pages that do not scroll report `0`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        if scrollable.is_nan() || scrollable <= 0.0 {
            return 0.0;
        }

        let progress = self.scroll_top / scrollable * 100.0;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_stays_within_bounds() {
        let values = [-500.0, -1.0, 0.0, 1.0, 19.0, 20.0, 21.0, 450.0, 1_000.0, 1e9];
        for scroll_top in values {
            for scroll_height in values {
                for viewport_height in values {
                    let progress =
                        ScrollMetrics::new(scroll_top, scroll_height, viewport_height).progress();
                    assert!((0.0..=100.0).contains(&progress));
                    if scroll_height <= viewport_height {
                        assert_eq!(progress, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn progress_is_relative_to_scrollable_distance() {
        assert_eq!(ScrollMetrics::new(250.0, 1_100.0, 100.0).progress(), 25.0);
        assert_eq!(ScrollMetrics::new(5_000.0, 1_100.0, 100.0).progress(), 100.0);
    }

    #[test]
    fn non_finite_input_reads_as_top_of_page() {
        assert_eq!(ScrollMetrics::new(f64::NAN, 1_000.0, 100.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, f64::NAN, 100.0).progress(), 0.0);
    }

    #[test]
    fn scrolled_past_threshold_only() {
        assert!(!ScrollMetrics::new(20.0, 1_000.0, 100.0).is_scrolled());
        assert!(ScrollMetrics::new(20.5, 1_000.0, 100.0).is_scrolled());
    }
}
