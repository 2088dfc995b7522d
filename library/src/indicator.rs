//! Current-time marker for the grid: today's Monday-based column and the
//! decimal hour, derived from local wall-clock time. Purely a rendering
//! input; the app recomputes it on a once-per-minute repaint tick.

use chrono::{Datelike, Local, Timelike};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarker {
    /// 0 = Monday .. 6 = Sunday.
    pub day_index: usize,
    pub hour: f32,
}

impl NowMarker {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<T: Datelike + Timelike>(datetime: &T) -> Self {
        Self {
            day_index: datetime.weekday().num_days_from_monday() as usize,
            hour: datetime.hour() as f32 + datetime.minute() as f32 / 60.0,
        }
    }

    /// The marker only shows inside the displayed day range.
    pub fn visible_within(&self, day_start_hour: f32, day_end_hour: f32) -> bool {
        self.hour >= day_start_hour && self.hour <= day_end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn weekday_is_monday_based() {
        // 2026-08-23 is a Sunday, 2026-08-24 a Monday.
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(NowMarker::from_datetime(&sunday).day_index, 6);

        let monday = NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        let marker = NowMarker::from_datetime(&monday);
        assert_eq!(marker.day_index, 0);
        assert_eq!(marker.hour, 7.75);
    }

    #[test]
    fn visibility_respects_day_range() {
        let early = NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        assert!(!NowMarker::from_datetime(&early).visible_within(6.0, 24.0));

        let midday = NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(13, 15, 0)
            .unwrap();
        assert!(NowMarker::from_datetime(&midday).visible_within(6.0, 24.0));
    }
}
