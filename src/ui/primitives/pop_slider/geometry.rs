//! Slider layout math
//!
//! Everything here is a pure function of value, range, frame and tracking
//! state. Coordinates are local to the slider's frame.

use iced::{Point, Rectangle, Size};

/// Horizontal inset of the track on each side
pub const TRACK_INSET: f32 = 10.0;
/// Track thickness
pub const TRACK_HEIGHT: f32 = 4.0;
/// Thumb diameter while tracking
pub const MAXIMUM_THUMB_DIAMETER: f32 = 28.0;
/// Thumb diameter at rest
pub const MINIMUM_THUMB_DIAMETER: f32 = 8.0;
/// Height the slider asks its host for
pub const PREFERRED_HEIGHT: f32 = 36.0;

/// Thumb diameter for the given tracking state
pub fn thumb_diameter(tracking: bool) -> f32 {
    if tracking {
        MAXIMUM_THUMB_DIAMETER
    } else {
        MINIMUM_THUMB_DIAMETER
    }
}

/// Fraction of the range covered by `value`
///
/// A degenerate range (`minimum >= maximum`) yields 0.0.
pub fn percent_along_track(value: f32, minimum: f32, maximum: f32) -> f32 {
    if minimum >= maximum {
        return 0.0;
    }
    (value - minimum) / (maximum - minimum)
}

/// Track rectangle for a frame of the given size
pub fn track_rect(frame: Size) -> Rectangle {
    Rectangle {
        x: TRACK_INSET,
        y: (frame.height - TRACK_HEIGHT) * 0.5,
        width: (frame.width - TRACK_INSET * 2.0).max(0.0),
        height: TRACK_HEIGHT,
    }
}

/// Map a pointer x coordinate back to a value
///
/// The result is not clamped. A track no wider than the thumb maps every
/// location to `minimum`.
pub fn location_to_value(x: f32, track: Rectangle, diameter: f32, minimum: f32, maximum: f32) -> f32 {
    let offset = x - track.x - diameter * 0.5;
    let distance = track.width - diameter;
    let percentage = if distance > 0.0 { offset / distance } else { 0.0 };
    percentage * (maximum - minimum) + minimum
}

/// Expand `rect` by `amount` on every side
pub fn outset(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: rect.x - amount,
        y: rect.y - amount,
        width: rect.width + amount * 2.0,
        height: rect.height + amount * 2.0,
    }
}

/// Result of one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    pub track: Rectangle,
    pub corner_radius: f32,
    pub thumb_center: Point,
    pub thumb_diameter: f32,
    pub progress: Rectangle,
}

impl SliderGeometry {
    pub fn compute(frame: Size, value: f32, minimum: f32, maximum: f32, tracking: bool) -> Self {
        let track = track_rect(frame);
        let corner_radius = TRACK_HEIGHT * 0.5;
        let diameter = thumb_diameter(tracking);
        let radius = diameter * 0.5;

        let percentage = percent_along_track(value, minimum, maximum);
        let offset = track.x + percentage * (track.width - diameter) + radius;

        // max then min, so an undersized track settles on the right edge
        let min_x = track.x + radius;
        let max_x = track.x + track.width - radius;
        let thumb_x = offset.max(min_x).min(max_x);

        let progress = Rectangle {
            width: (thumb_x - track.x).max(0.0),
            ..track
        };

        Self {
            track,
            corner_radius,
            thumb_center: Point::new(thumb_x, track.center_y()),
            thumb_diameter: diameter,
            progress,
        }
    }

    /// Square of side `thumb_diameter` around the thumb center
    pub fn thumb_frame(&self) -> Rectangle {
        let radius = self.thumb_diameter * 0.5;
        Rectangle {
            x: self.thumb_center.x - radius,
            y: self.thumb_center.y - radius,
            width: self.thumb_diameter,
            height: self.thumb_diameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Size = Size::new(320.0, 36.0);

    #[test]
    fn test_percent_degenerate_range_is_zero() {
        for value in [-5.0, 0.0, 0.5, 1.0, 100.0] {
            assert_eq!(percent_along_track(value, 1.0, 1.0), 0.0);
            assert_eq!(percent_along_track(value, 2.0, 1.0), 0.0);
        }
    }

    #[test]
    fn test_percent_in_range() {
        assert_eq!(percent_along_track(50.0, 0.0, 100.0), 0.5);
        assert_eq!(percent_along_track(-1.0, -1.0, 1.0), 0.0);
        assert_eq!(percent_along_track(1.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn test_track_is_inset_and_centered() {
        let track = track_rect(FRAME);
        assert_eq!(track, Rectangle::new(Point::new(10.0, 16.0), Size::new(300.0, 4.0)));
    }

    #[test]
    fn test_thumb_at_midpoint() {
        let geometry = SliderGeometry::compute(FRAME, 50.0, 0.0, 100.0, false);
        let d = MINIMUM_THUMB_DIAMETER;
        let w = geometry.track.width;

        let expected = geometry.track.x + 0.5 * (w - d) + d / 2.0;
        assert_eq!(geometry.thumb_center.x, expected);
        assert_eq!(geometry.thumb_center.y, 18.0);
        assert_eq!(geometry.corner_radius, 2.0);
    }

    #[test]
    fn test_thumb_is_clamped_to_track() {
        let below = SliderGeometry::compute(FRAME, -10.0, 0.0, 1.0, true);
        assert_eq!(below.thumb_center.x, 10.0 + MAXIMUM_THUMB_DIAMETER / 2.0);

        let above = SliderGeometry::compute(FRAME, 10.0, 0.0, 1.0, true);
        assert_eq!(above.thumb_center.x, 310.0 - MAXIMUM_THUMB_DIAMETER / 2.0);
    }

    #[test]
    fn test_progress_ends_at_thumb_center() {
        let geometry = SliderGeometry::compute(FRAME, 0.25, 0.0, 1.0, false);
        assert_eq!(geometry.progress.x, geometry.track.x);
        assert_eq!(geometry.progress.y, geometry.track.y);
        assert_eq!(geometry.progress.height, geometry.track.height);
        assert_eq!(geometry.progress.width, geometry.thumb_center.x - geometry.track.x);
    }

    #[test]
    fn test_thumb_grows_while_tracking() {
        let idle = SliderGeometry::compute(FRAME, 0.0, 0.0, 1.0, false);
        let tracking = SliderGeometry::compute(FRAME, 0.0, 0.0, 1.0, true);
        assert_eq!(idle.thumb_frame().width, MINIMUM_THUMB_DIAMETER);
        assert_eq!(tracking.thumb_frame().width, MAXIMUM_THUMB_DIAMETER);
    }

    #[test]
    fn test_tiny_frame_does_not_panic() {
        let geometry = SliderGeometry::compute(Size::new(12.0, 36.0), 0.5, 0.0, 1.0, true);
        assert_eq!(geometry.track.width, 0.0);
        // Right edge wins when the track cannot hold the thumb
        assert_eq!(geometry.thumb_center.x, 10.0 - MAXIMUM_THUMB_DIAMETER / 2.0);
        assert_eq!(geometry.progress.width, 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let first = SliderGeometry::compute(FRAME, 0.3, 0.0, 1.0, false);
        let second = SliderGeometry::compute(FRAME, 0.3, 0.0, 1.0, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_location_to_value() {
        let track = track_rect(FRAME);
        let d = MAXIMUM_THUMB_DIAMETER;

        assert_eq!(location_to_value(track.x + d / 2.0, track, d, 0.0, 1.0), 0.0);
        assert_eq!(location_to_value(track.x + track.width - d / 2.0, track, d, 0.0, 1.0), 1.0);
        assert!(location_to_value(0.0, track, d, 0.0, 1.0) < 0.0);
    }

    #[test]
    fn test_location_to_value_narrow_track() {
        let track = Rectangle::new(Point::new(10.0, 0.0), Size::new(20.0, 4.0));
        assert_eq!(location_to_value(25.0, track, MAXIMUM_THUMB_DIAMETER, 3.0, 9.0), 3.0);
    }
}
