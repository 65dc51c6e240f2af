//! PopSlider widget
//!
//! A horizontal slider drawn as three layers: a track, a filled progress
//! segment left of the thumb, and a round thumb that pops to a larger size
//! while it is being dragged.
//!
//! The slider owns its value while a drag is in progress. Values passed to
//! [`PopSlider::new`] are applied whenever they change and no drag is active.
//! Notifications are published either on every drag step
//! ([`PopSlider::continuous`]) or once when the pointer is released.

mod control;
mod description;
mod geometry;

use control::{SliderControl, ValueChanged};
pub use description::SliderDescription;

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};

use crate::ui::animation::Layer;
use crate::ui::theme;

/// Slider with a popping thumb
pub struct PopSlider<'a, Message> {
    value: f32,
    minimum_value: f32,
    maximum_value: f32,
    is_continuous: bool,
    animated: bool,
    minimum_track_tint: Option<Color>,
    maximum_track_tint: Option<Color>,
    thumb_tint: Option<Color>,
    tint: Color,
    background: Color,
    width: Length,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
}

impl<'a, Message> PopSlider<'a, Message>
where
    Message: Clone,
{
    pub fn new<F>(value: f32, on_change: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        Self {
            value,
            minimum_value: 0.0,
            maximum_value: 1.0,
            is_continuous: false,
            animated: false,
            minimum_track_tint: None,
            maximum_track_tint: None,
            thumb_tint: None,
            tint: theme::SLIDER_TINT,
            background: theme::SLIDER_BACKGROUND,
            width: Length::Fill,
            on_change: Box::new(on_change),
        }
    }

    /// Build a slider from a serialized description
    ///
    /// The description goes through [`SliderControl::from_description`], so
    /// its value is assigned directly and only raised to the minimum. The
    /// widget still caps it at the maximum when it is first applied.
    /// Malformed colors in the description fall back to the defaults.
    pub fn from_description<F>(description: &SliderDescription, on_change: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        let control = SliderControl::from_description(description, Size::ZERO);

        let mut slider = Self::new(control.value(), on_change)
            .minimum_value(control.minimum_value())
            .maximum_value(control.maximum_value())
            .continuous(control.is_continuous())
            .tint(control.tint_color());

        if let Some(color) = control.minimum_track_tint_color() {
            slider = slider.minimum_track_tint(color);
        }
        if let Some(color) = control.maximum_track_tint_color() {
            slider = slider.maximum_track_tint(color);
        }
        if let Some(color) = control.thumb_tint_color() {
            slider = slider.thumb_tint(color);
        }

        slider
    }

    pub fn minimum_value(mut self, minimum_value: f32) -> Self {
        self.minimum_value = minimum_value;
        self
    }

    pub fn maximum_value(mut self, maximum_value: f32) -> Self {
        self.maximum_value = maximum_value;
        self
    }

    /// Publish on every drag step instead of once on release
    pub fn continuous(mut self, is_continuous: bool) -> Self {
        self.is_continuous = is_continuous;
        self
    }

    /// Animate the thumb when the value is changed from outside
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Color of the filled segment
    pub fn minimum_track_tint(mut self, color: Color) -> Self {
        self.minimum_track_tint = Some(color);
        self
    }

    /// Color of the track
    pub fn maximum_track_tint(mut self, color: Color) -> Self {
        self.maximum_track_tint = Some(color);
        self
    }

    pub fn thumb_tint(mut self, color: Color) -> Self {
        self.thumb_tint = Some(color);
        self
    }

    /// Ambient tint behind the track; changes fade in
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Push builder properties into the persistent control
    fn sync(&self, state: &mut State) {
        let control = &mut state.control;
        control.set_minimum_value(self.minimum_value);
        control.set_maximum_value(self.maximum_value);
        control.set_continuous(self.is_continuous);
        control.set_minimum_track_tint_color(self.minimum_track_tint);
        control.set_maximum_track_tint_color(self.maximum_track_tint);
        control.set_thumb_tint_color(self.thumb_tint);
        control.set_tint_color(self.tint);

        if state.external_value != self.value && !control.is_tracking() {
            state.external_value = self.value;
            control.set_value(self.value, self.animated);
        }
    }

    fn publish(&self, shell: &mut Shell<'_, Message>, changed: Option<ValueChanged>) {
        if let Some(ValueChanged { value }) = changed {
            shell.publish((self.on_change)(value));
        }
    }
}

struct State {
    control: SliderControl,
    /// Last value received from the builder
    external_value: f32,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for PopSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        // First appearance shows the tint without fading from the default
        let mut state = State {
            control: SliderControl::new(Size::ZERO).with_tint_color(self.tint),
            external_value: f32::NAN,
        };
        self.sync(&mut state);
        tree::State::new(state)
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            ..SliderControl::intrinsic_size()
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let node = layout::atomic(limits, self.width, geometry::PREFERRED_HEIGHT);

        let state = tree.state.downcast_mut::<State>();
        self.sync(state);
        state.control.set_frame(node.size());
        state.control.layout_if_needed();

        node
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        self.sync(state);

        let bounds = layout.bounds();
        let origin = Vector::new(bounds.x, bounds.y);
        let local = |position: Point| position - origin;

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(position) = cursor.position_over(bounds) {
                    if state.control.begin_tracking(local(position)) {
                        shell.capture_event();
                        shell.request_redraw();
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if state.control.is_tracking() {
                    if let Some(position) = cursor.land().position() {
                        let changed = state.control.continue_tracking(local(position));
                        self.publish(shell, changed);
                        shell.request_redraw();
                    }
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if state.control.is_tracking() {
                    let changed = state.control.end_tracking();
                    self.publish(shell, changed);
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.control.is_tracking() {
                    let changed = state.control.cancel_tracking();
                    self.publish(shell, changed);
                    shell.request_redraw();
                }
            }
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.control.tick(*now);
                state.control.set_frame(bounds.size());
                state.control.layout_if_needed();
                if state.control.is_animating() {
                    shell.request_redraw();
                }
            }
            _ => {}
        }

        if state.control.needs_layout() || state.control.is_animating() {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let origin = Vector::new(bounds.x, bounds.y);
        let layers = state.control.layers();

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                ..renderer::Quad::default()
            },
            Background::Color(self.background),
        );

        // Track tint is a plain rectangle behind the rounded track
        let track = layers.track();
        renderer.fill_quad(
            renderer::Quad {
                bounds: track.presented_frame() + origin,
                ..renderer::Quad::default()
            },
            Background::Color(track.presented_background()),
        );

        for layer in [layers.track(), layers.progress(), layers.thumb()] {
            fill_layer(renderer, layer, origin);
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.control.is_tracking() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn fill_layer<Renderer>(renderer: &mut Renderer, layer: &Layer, origin: Vector)
where
    Renderer: iced::advanced::Renderer,
{
    let frame = layer.presented_frame();
    if frame.width <= 0.0 || frame.height <= 0.0 {
        return;
    }

    renderer.fill_quad(
        renderer::Quad {
            bounds: frame + origin,
            border: Border::default().rounded(layer.corner_radius() * layer.presented_scale()),
            ..renderer::Quad::default()
        },
        Background::Color(layer.fill()),
    );
}

impl<'a, Message, Renderer> From<PopSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: PopSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}
