//! Slider state and pointer tracking
//!
//! [`SliderControl`] owns the value, the range, the tracking state machine and
//! the three drawing layers. It knows nothing about iced events; the widget
//! feeds it frame sizes, pointer locations and redraw timestamps.
//!
//! Value changes only mark the layout dirty. Geometry is applied to the layers
//! on the next [`SliderControl::layout_if_needed`] inside a batch with
//! implicit animations disabled, so a layout pass never interpolates.

use std::time::{Duration, Instant};

use iced::{Color, Length, Point, Size};

use super::description::SliderDescription;
use super::geometry::{
    MAXIMUM_THUMB_DIAMETER, MINIMUM_THUMB_DIAMETER, PREFERRED_HEIGHT, SliderGeometry,
    location_to_value, outset, thumb_diameter,
};
use crate::ui::animation::{LayerId, Layers, Transaction};
use crate::ui::theme;

/// Duration of the thumb grow/shrink animation
pub const THUMB_POP_DURATION: Duration = Duration::from_millis(260);
/// Duration of the track tint cross-fade
pub const TINT_DURATION: Duration = Duration::from_millis(500);

/// Pointer tracking state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking,
}

/// Value-changed notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    pub value: f32,
}

/// Slider model: value, range, tracking and layers
#[derive(Debug)]
pub struct SliderControl {
    value: f32,
    minimum_value: f32,
    maximum_value: f32,
    is_continuous: bool,
    tracking: TrackingState,
    minimum_track_tint_color: Option<Color>,
    maximum_track_tint_color: Option<Color>,
    thumb_tint_color: Option<Color>,
    frame: Size,
    needs_layout: bool,
    layers: Layers,
}

impl Default for SliderControl {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl SliderControl {
    pub fn new(frame: Size) -> Self {
        let mut control = Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            is_continuous: false,
            tracking: TrackingState::Idle,
            minimum_track_tint_color: None,
            maximum_track_tint_color: None,
            thumb_tint_color: None,
            frame,
            needs_layout: true,
            layers: Layers::new(theme::SLIDER_TRACK, theme::SLIDER_PROGRESS, theme::SLIDER_THUMB),
        };
        control.setup();
        control
    }

    /// Build a control from its serialized description
    pub fn from_description(description: &SliderDescription, frame: Size) -> Self {
        let mut control = Self::new(frame);
        control.set_minimum_value(description.minimum_value);
        control.set_maximum_value(description.maximum_value);
        control.set_continuous(description.continuous);
        control.set_minimum_track_tint_color(description.minimum_track_tint());
        control.set_maximum_track_tint_color(description.maximum_track_tint());
        control.set_thumb_tint_color(description.thumb_tint());
        if let Some(tint) = description.tint() {
            control = control.with_tint_color(tint);
        }
        control.assign_value(description.value);
        control
    }

    /// Start out with `color` as the ambient tint, without a fade
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.apply_tint(color, Transaction::disabled());
        self
    }

    fn setup(&mut self) {
        self.apply_tint(theme::SLIDER_TINT, Transaction::disabled());

        // The thumb keeps its resting size; growth is a scale transform
        let mut batch = self.layers.begin(Transaction::disabled());
        batch.set_bounds(
            LayerId::Thumb,
            Size::new(MINIMUM_THUMB_DIAMETER, MINIMUM_THUMB_DIAMETER),
        );
        batch.set_corner_radius(LayerId::Thumb, MINIMUM_THUMB_DIAMETER * 0.5);
    }

    // ========================================================================
    // Value and range
    // ========================================================================

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Plain assignment, equivalent to setting the `value` property
    ///
    /// Values below the minimum are raised to it. Values above the maximum
    /// are kept as is.
    pub fn assign_value(&mut self, value: f32) {
        self.store_value(value);
    }

    /// Set the value, capped at the maximum
    ///
    /// With `animated` the layers move right away using implicit animations,
    /// otherwise the change waits for the next layout pass.
    pub fn set_value(&mut self, value: f32, animated: bool) {
        self.store_value(value.min(self.maximum_value));
        if animated {
            self.update_layer_layout();
        } else {
            self.set_needs_layout();
        }
    }

    // Single entry point for every value mutation
    fn store_value(&mut self, value: f32) {
        let value = if value < self.minimum_value {
            self.minimum_value
        } else {
            value
        };
        self.value = value;
        tracing::debug!("Slider value: {}", value);
        self.set_needs_layout();
    }

    pub fn minimum_value(&self) -> f32 {
        self.minimum_value
    }

    pub fn set_minimum_value(&mut self, minimum_value: f32) {
        if self.minimum_value != minimum_value {
            self.minimum_value = minimum_value;
            self.set_needs_layout();
        }
    }

    pub fn maximum_value(&self) -> f32 {
        self.maximum_value
    }

    pub fn set_maximum_value(&mut self, maximum_value: f32) {
        if self.maximum_value != maximum_value {
            self.maximum_value = maximum_value;
            self.set_needs_layout();
        }
    }

    pub fn is_continuous(&self) -> bool {
        self.is_continuous
    }

    pub fn set_continuous(&mut self, is_continuous: bool) {
        self.is_continuous = is_continuous;
    }

    // ========================================================================
    // Colors
    // ========================================================================

    pub fn minimum_track_tint_color(&self) -> Option<Color> {
        self.minimum_track_tint_color
    }

    /// Progress fill color, `None` for the default
    pub fn set_minimum_track_tint_color(&mut self, color: Option<Color>) {
        self.minimum_track_tint_color = color;
        self.layers
            .set_fill(LayerId::Progress, color.unwrap_or(theme::SLIDER_PROGRESS));
    }

    pub fn maximum_track_tint_color(&self) -> Option<Color> {
        self.maximum_track_tint_color
    }

    /// Track fill color, `None` for the default
    pub fn set_maximum_track_tint_color(&mut self, color: Option<Color>) {
        self.maximum_track_tint_color = color;
        self.layers
            .set_fill(LayerId::Track, color.unwrap_or(theme::SLIDER_TRACK));
    }

    pub fn thumb_tint_color(&self) -> Option<Color> {
        self.thumb_tint_color
    }

    /// Thumb color, `None` for the default
    pub fn set_thumb_tint_color(&mut self, color: Option<Color>) {
        self.thumb_tint_color = color;
        self.layers
            .set_fill(LayerId::Thumb, color.unwrap_or(theme::SLIDER_THUMB));
    }

    /// Ambient tint, held as the track layer's background
    pub fn tint_color(&self) -> Color {
        self.layers.track().background()
    }

    /// Change the ambient tint; the track background fades to it
    pub fn set_tint_color(&mut self, color: Color) {
        if self.tint_color() == color {
            return;
        }
        self.apply_tint(color, Transaction::animated(TINT_DURATION));
    }

    fn apply_tint(&mut self, color: Color, transaction: Transaction) {
        let mut batch = self.layers.begin(transaction);
        batch.set_background(LayerId::Track, color);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    pub fn set_frame(&mut self, frame: Size) {
        if self.frame != frame {
            self.frame = frame;
            self.set_needs_layout();
        }
    }

    /// Size the slider asks its host for: any width, fixed height
    pub fn intrinsic_size() -> Size<Length> {
        Size::new(Length::Fill, Length::Fixed(PREFERRED_HEIGHT))
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Run a layout pass if anything changed since the last one
    ///
    /// Returns whether a pass ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if !self.needs_layout {
            return false;
        }
        self.layout_subviews();
        true
    }

    /// Layout pass: apply geometry with implicit animations disabled
    pub fn layout_subviews(&mut self) {
        self.needs_layout = false;
        let geometry = self.geometry();
        let mut batch = self.layers.begin(Transaction::disabled());
        apply_geometry(&mut batch, &geometry);
    }

    // Apply geometry under whatever transaction is active
    fn update_layer_layout(&mut self) {
        let geometry = self.geometry();
        apply_geometry(&mut self.layers, &geometry);
    }

    /// Geometry for the current value, range, frame and tracking state
    pub fn geometry(&self) -> SliderGeometry {
        SliderGeometry::compute(
            self.frame,
            self.value,
            self.minimum_value,
            self.maximum_value,
            self.is_tracking(),
        )
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    // ========================================================================
    // Tracking
    // ========================================================================

    pub fn tracking_state(&self) -> TrackingState {
        self.tracking
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking_state() == TrackingState::Tracking
    }

    fn thumb_diameter(&self) -> f32 {
        thumb_diameter(self.is_tracking())
    }

    /// Pointer went down at `location` (local coordinates)
    ///
    /// Accepted when the location is inside the thumb's frame grown by the
    /// difference between the tracking and resting diameters, so the touch
    /// target is generous even while the thumb is drawn small.
    pub fn begin_tracking(&mut self, location: Point) -> bool {
        if self.is_tracking() {
            return false;
        }

        let touch_zone = outset(
            self.geometry().thumb_frame(),
            MAXIMUM_THUMB_DIAMETER - MINIMUM_THUMB_DIAMETER,
        );
        if !touch_zone.contains(location) {
            tracing::trace!("Slider press at {:?} missed the thumb", location);
            return false;
        }

        self.tracking = TrackingState::Tracking;
        tracing::debug!("Slider tracking began at {:?}", location);
        self.animate_thumb(true);
        self.set_needs_layout();
        true
    }

    /// Pointer moved to `location` while tracking
    ///
    /// Returns a notification when the slider is continuous. Ignored while
    /// idle.
    pub fn continue_tracking(&mut self, location: Point) -> Option<ValueChanged> {
        if !self.is_tracking() {
            return None;
        }

        let value = location_to_value(
            location.x,
            self.layers.track().frame(),
            self.thumb_diameter(),
            self.minimum_value,
            self.maximum_value,
        );
        self.store_value(value.min(self.maximum_value));

        self.is_continuous.then(|| self.value_changed())
    }

    /// Pointer released
    ///
    /// Returns the single notification of a non-continuous slider. Ignored
    /// while idle.
    pub fn end_tracking(&mut self) -> Option<ValueChanged> {
        if !self.is_tracking() {
            return None;
        }

        self.tracking = TrackingState::Idle;
        tracing::debug!("Slider tracking ended at {}", self.value);
        self.animate_thumb(false);
        self.set_needs_layout();

        (!self.is_continuous).then(|| self.value_changed())
    }

    /// Tracking was interrupted by the host; handled like a release
    pub fn cancel_tracking(&mut self) -> Option<ValueChanged> {
        self.end_tracking()
    }

    fn value_changed(&self) -> ValueChanged {
        ValueChanged { value: self.value }
    }

    fn animate_thumb(&mut self, selected: bool) {
        let scale = if selected {
            MAXIMUM_THUMB_DIAMETER / MINIMUM_THUMB_DIAMETER
        } else {
            1.0
        };
        let mut batch = self.layers.begin(Transaction::animated(THUMB_POP_DURATION));
        batch.set_scale(LayerId::Thumb, scale);
    }

    // ========================================================================
    // Animation
    // ========================================================================

    pub fn is_animating(&self) -> bool {
        self.layers.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.layers.tick(now);
    }
}

fn apply_geometry(layers: &mut Layers, geometry: &SliderGeometry) {
    layers.set_frame(LayerId::Track, geometry.track);
    layers.set_corner_radius(LayerId::Track, geometry.corner_radius);

    layers.set_position(LayerId::Thumb, geometry.thumb_center);

    layers.set_frame(LayerId::Progress, geometry.progress);
    layers.set_corner_radius(LayerId::Progress, geometry.corner_radius);
}
