//! Retained drawing layers with implicit animation
//!
//! A [`Layer`] mirrors a retained compositor layer: it has a position, bounds,
//! a scale transform and colors. Every animatable property is a
//! [`Transition`], so changes made while actions are enabled are interpolated
//! on screen and changes made inside [`Layers::begin`] with
//! [`Transaction::disabled`] land in a single frame.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use iced::{Color, Point, Rectangle, Size};

use super::transition::{Transaction, Transition};

/// A single retained layer
#[derive(Debug)]
pub struct Layer {
    position: Transition<Point>,
    bounds: Transition<Size>,
    scale: Transition<f32>,
    background: Transition<Color>,
    fill: Color,
    corner_radius: f32,
}

impl Layer {
    pub fn new(fill: Color) -> Self {
        Self {
            position: Transition::new(Point::ORIGIN),
            bounds: Transition::new(Size::ZERO),
            scale: Transition::new(1.0),
            background: Transition::new(Color::TRANSPARENT),
            fill,
            corner_radius: 0.0,
        }
    }

    /// Center of the layer in its parent's coordinates
    pub fn position(&self) -> Point {
        self.position.target()
    }

    /// Untransformed size
    pub fn bounds(&self) -> Size {
        self.bounds.target()
    }

    pub fn scale(&self) -> f32 {
        self.scale.target()
    }

    pub fn background(&self) -> Color {
        self.background.target()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Model frame, scale transform applied about the center
    pub fn frame(&self) -> Rectangle {
        scaled_rect(self.position(), self.bounds(), self.scale())
    }

    /// Frame as currently shown on screen
    pub fn presented_frame(&self) -> Rectangle {
        scaled_rect(
            self.position.presented(),
            self.bounds.presented(),
            self.scale.presented(),
        )
    }

    pub fn presented_background(&self) -> Color {
        self.background.presented()
    }

    pub fn presented_scale(&self) -> f32 {
        self.scale.presented()
    }

    fn set_frame(&mut self, frame: Rectangle, transaction: &Transaction) {
        self.position.set(frame.center(), transaction);
        self.bounds.set(frame.size(), transaction);
    }

    fn is_animating(&self) -> bool {
        self.position.is_animating()
            || self.bounds.is_animating()
            || self.scale.is_animating()
            || self.background.is_animating()
    }

    fn tick(&mut self, now: Instant) {
        self.position.tick(now);
        self.bounds.tick(now);
        self.scale.tick(now);
        self.background.tick(now);
    }
}

fn scaled_rect(center: Point, bounds: Size, scale: f32) -> Rectangle {
    let width = bounds.width * scale;
    let height = bounds.height * scale;
    Rectangle {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}

/// Identifies one of the slider layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerId {
    Track,
    Progress,
    Thumb,
}

/// The slider's three layers, in back-to-front order
#[derive(Debug)]
pub struct Layers {
    track: Layer,
    progress: Layer,
    thumb: Layer,
    transaction: Transaction,
}

impl Layers {
    pub fn new(track_fill: Color, progress_fill: Color, thumb_fill: Color) -> Self {
        Self {
            track: Layer::new(track_fill),
            progress: Layer::new(progress_fill),
            thumb: Layer::new(thumb_fill),
            transaction: Transaction::implicit(),
        }
    }

    pub fn track(&self) -> &Layer {
        &self.track
    }

    pub fn progress(&self) -> &Layer {
        &self.progress
    }

    pub fn thumb(&self) -> &Layer {
        &self.thumb
    }

    fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        match id {
            LayerId::Track => &mut self.track,
            LayerId::Progress => &mut self.progress,
            LayerId::Thumb => &mut self.thumb,
        }
    }

    /// Transaction that applies to property changes right now
    pub fn transaction(&self) -> Transaction {
        self.transaction
    }

    /// Open a batched update
    ///
    /// Until the returned guard is dropped every property change uses
    /// `transaction`; the previous transaction is restored on drop.
    pub fn begin(&mut self, transaction: Transaction) -> TransactionGuard<'_> {
        let previous = std::mem::replace(&mut self.transaction, transaction);
        TransactionGuard {
            layers: self,
            previous,
        }
    }

    pub fn set_frame(&mut self, id: LayerId, frame: Rectangle) {
        let transaction = self.transaction();
        self.layer_mut(id).set_frame(frame, &transaction);
    }

    pub fn set_position(&mut self, id: LayerId, position: Point) {
        let transaction = self.transaction();
        self.layer_mut(id).position.set(position, &transaction);
    }

    pub fn set_bounds(&mut self, id: LayerId, bounds: Size) {
        let transaction = self.transaction();
        self.layer_mut(id).bounds.set(bounds, &transaction);
    }

    pub fn set_scale(&mut self, id: LayerId, scale: f32) {
        let transaction = self.transaction();
        self.layer_mut(id).scale.set(scale, &transaction);
    }

    pub fn set_background(&mut self, id: LayerId, color: Color) {
        let transaction = self.transaction();
        self.layer_mut(id).background.set(color, &transaction);
    }

    pub fn set_fill(&mut self, id: LayerId, color: Color) {
        self.layer_mut(id).fill = color;
    }

    pub fn set_corner_radius(&mut self, id: LayerId, radius: f32) {
        self.layer_mut(id).corner_radius = radius;
    }

    pub fn is_animating(&self) -> bool {
        self.track.is_animating() || self.progress.is_animating() || self.thumb.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.track.tick(now);
        self.progress.tick(now);
        self.thumb.tick(now);
    }
}

/// Scoped batched update over [`Layers`]
pub struct TransactionGuard<'a> {
    layers: &'a mut Layers,
    previous: Transaction,
}

impl Deref for TransactionGuard<'_> {
    type Target = Layers;

    fn deref(&self) -> &Layers {
        self.layers
    }
}

impl DerefMut for TransactionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Layers {
        self.layers
    }
}

impl Drop for TransactionGuard<'_> {
    fn drop(&mut self) {
        self.layers.transaction = self.previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn layers() -> Layers {
        Layers::new(Color::WHITE, Color::BLACK, Color::WHITE)
    }

    #[test]
    fn test_guard_restores_previous_transaction() {
        let mut layers = layers();

        {
            let mut batch = layers.begin(Transaction::disabled());
            assert!(batch.transaction().actions_disabled());
            batch.set_scale(LayerId::Thumb, 2.0);
        }

        assert_eq!(layers.transaction(), Transaction::implicit());
        assert_eq!(layers.thumb().presented_scale(), 2.0);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let mut layers = layers();
        let tint = Transaction::animated(Duration::from_millis(500));

        {
            let mut outer = layers.begin(tint);
            {
                let inner = outer.begin(Transaction::disabled());
                assert!(inner.transaction().actions_disabled());
            }
            assert_eq!(outer.transaction(), tint);
        }

        assert_eq!(layers.transaction(), Transaction::implicit());
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn update(layers: &mut Layers, bail: bool) -> Option<()> {
            let mut batch = layers.begin(Transaction::disabled());
            batch.set_position(LayerId::Track, Point::new(5.0, 5.0));
            if bail {
                return None;
            }
            batch.set_position(LayerId::Track, Point::new(9.0, 9.0));
            Some(())
        }

        let mut layers = layers();
        assert!(update(&mut layers, true).is_none());
        assert_eq!(layers.transaction(), Transaction::implicit());
        assert_eq!(layers.track().position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_frame_applies_scale_about_center() {
        let mut layers = layers();
        {
            let mut batch = layers.begin(Transaction::disabled());
            batch.set_frame(LayerId::Thumb, Rectangle::new(Point::new(6.0, 14.0), Size::new(8.0, 8.0)));
            batch.set_scale(LayerId::Thumb, 3.5);
        }

        let frame = layers.thumb().frame();
        assert_eq!(frame.center(), Point::new(10.0, 18.0));
        assert_eq!(frame.width, 28.0);
        assert_eq!(frame.height, 28.0);
    }

    #[test]
    fn test_implicit_change_animates() {
        let mut layers = layers();

        layers.set_background(LayerId::Track, Color::BLACK);

        assert_eq!(layers.track().background(), Color::BLACK);
        assert_eq!(layers.track().presented_background(), Color::TRANSPARENT);
    }
}
