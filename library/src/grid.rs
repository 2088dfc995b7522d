//! Bidirectional mapping between screen-space pixel offsets and calendar
//! hours, plus the 15-minute snapping quantum shared by creation, move and
//! resize.

/// Commonly-used grid layout parameters, bundled to avoid passing many
/// individual arguments through the planner function chain.
#[derive(Clone, Copy, Debug)]
pub struct GridGeometry {
    pub pixels_per_hour: f32,
    pub day_start_hour: f32,
    pub day_end_hour: f32,
}

impl GridGeometry {
    /// Vertical pixel offset (from the top of the grid) to a raw decimal hour.
    pub fn pixel_offset_to_hour(&self, offset_y: f32) -> f32 {
        self.day_start_hour + offset_y / self.pixels_per_hour
    }

    /// Inverse of [`Self::pixel_offset_to_hour`]; rendering only.
    pub fn hour_to_pixel_offset(&self, hour: f32) -> f32 {
        (hour - self.day_start_hour) * self.pixels_per_hour
    }

    /// A block never begins before the configured day start.
    pub fn clamp_to_day_start(&self, hour: f32) -> f32 {
        hour.max(self.day_start_hour)
    }

    /// Snapped, clamped hour under a pixel offset. The common path for drop
    /// targets and selection updates.
    pub fn snapped_hour_at(&self, offset_y: f32) -> f32 {
        self.clamp_to_day_start(snap_to_quarter_hour(self.pixel_offset_to_hour(offset_y)))
    }

    pub fn day_span_hours(&self) -> f32 {
        self.day_end_hour - self.day_start_hour
    }

    /// Total grid height in pixels.
    pub fn grid_height(&self) -> f32 {
        self.day_span_hours() * self.pixels_per_hour
    }
}

/// Quantize a decimal hour to the nearest 15-minute boundary.
pub fn snap_to_quarter_hour(raw_hour: f32) -> f32 {
    (raw_hour * 4.0).round() / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry {
            pixels_per_hour: 80.0,
            day_start_hour: 6.0,
            day_end_hour: 24.0,
        }
    }

    #[test]
    fn snapping_is_idempotent() {
        for i in 0..1000 {
            let x = i as f32 * 0.017 + 5.3;
            let once = snap_to_quarter_hour(x);
            assert_eq!(once, snap_to_quarter_hour(once));
        }
    }

    #[test]
    fn snapping_lands_on_quarter_boundaries() {
        assert_eq!(snap_to_quarter_hour(9.1), 9.0);
        assert_eq!(snap_to_quarter_hour(9.13), 9.25);
        assert_eq!(snap_to_quarter_hour(9.4), 9.5);
        assert_eq!(snap_to_quarter_hour(9.9), 10.0);
    }

    #[test]
    fn pixel_hour_round_trip() {
        let geo = geometry();
        let mut h = geo.day_start_hour;
        while h <= geo.day_end_hour {
            let offset = geo.hour_to_pixel_offset(h);
            let back = snap_to_quarter_hour(geo.pixel_offset_to_hour(offset));
            assert_eq!(back, snap_to_quarter_hour(h));
            h += 0.25;
        }
    }

    #[test]
    fn clamps_to_day_start() {
        let geo = geometry();
        assert_eq!(geo.clamp_to_day_start(4.5), 6.0);
        assert_eq!(geo.clamp_to_day_start(6.0), 6.0);
        assert_eq!(geo.clamp_to_day_start(11.25), 11.25);
        // Negative offsets (pointer above the grid top) clamp as well.
        assert_eq!(geo.snapped_hour_at(-50.0), 6.0);
    }

    #[test]
    fn grid_height_covers_full_day_span() {
        let geo = geometry();
        assert_eq!(geo.day_span_hours(), 18.0);
        assert_eq!(geo.grid_height(), 1440.0);
    }
}
