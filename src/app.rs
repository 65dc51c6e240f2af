//! Main application module

mod message;
mod view;

use anyhow::Context;
use iced::{Task, Theme};

use crate::features::Settings;
use crate::ui::primitives::SliderDescription;
use crate::ui::theme;
use crate::utils::to_hex_color;
pub use message::{Message, SliderId};

/// Live state of one demo slider
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    pub description: SliderDescription,
    /// Animate the next externally driven value change
    pub animate: bool,
    /// Notifications received so far
    pub notifications: usize,
}

impl SliderState {
    fn new(description: SliderDescription) -> Self {
        Self {
            description,
            animate: false,
            notifications: 0,
        }
    }

    /// Value the slider settles on for the requested one
    ///
    /// Requests are capped at the maximum, then raised to the minimum.
    pub fn displayed_value(&self) -> f32 {
        let description = &self.description;
        let capped = description.value.min(description.maximum_value);
        if capped < description.minimum_value {
            description.minimum_value
        } else {
            capped
        }
    }
}

/// Demo application state
pub struct App {
    settings: Settings,
    volume: SliderState,
    brightness: SliderState,
    status: Option<String>,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Starting with tint {} and {} theme",
            settings.display.tint_index,
            if settings.display.dark_mode { "dark" } else { "light" }
        );
        (Self::with_settings(settings), Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            volume: SliderState::new(settings.sliders.volume.clone()),
            brightness: SliderState::new(settings.sliders.brightness.clone()),
            settings,
            status: None,
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "PopSlider".to_string()
    }

    /// Current ambient tint
    pub fn tint(&self) -> iced::Color {
        theme::TINT_CYCLE[self.settings.display.tint_index % theme::TINT_CYCLE.len()]
    }

    fn slider_mut(&mut self, id: SliderId) -> &mut SliderState {
        match id {
            SliderId::Volume => &mut self.volume,
            SliderId::Brightness => &mut self.brightness,
        }
    }

    pub fn slider(&self, id: SliderId) -> &SliderState {
        match id {
            SliderId::Volume => &self.volume,
            SliderId::Brightness => &self.brightness,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderChanged(id, value) => {
                let slider = self.slider_mut(id);
                slider.description.value = value;
                slider.animate = false;
                slider.notifications += 1;
                tracing::debug!("{:?} changed to {}", id, value);
            }
            Message::ToggleContinuous(id, continuous) => {
                self.slider_mut(id).description.continuous = continuous;
            }
            Message::SetHalf(id) => {
                let slider = self.slider_mut(id);
                let description = &mut slider.description;
                description.value = (description.minimum_value + description.maximum_value) / 2.0;
                slider.animate = true;
            }
            Message::SetBeyondMaximum(id) => {
                // The slider caps this at its maximum
                let slider = self.slider_mut(id);
                slider.description.value = slider.description.maximum_value * 2.0;
                slider.animate = false;
            }
            Message::CycleTint => {
                let display = &mut self.settings.display;
                let len = theme::TINT_CYCLE.len();
                // Reduce first, the stored index comes from user settings
                display.tint_index = (display.tint_index % len + 1) % len;
                tracing::debug!("Ambient tint {}", to_hex_color(self.tint()));
            }
            Message::UpdateDarkMode(dark_mode) => {
                self.settings.display.dark_mode = dark_mode;
            }
            Message::SaveSettings => {
                self.settings.sliders.volume = self.volume.description.clone();
                self.settings.sliders.brightness = self.brightness.description.clone();
                self.status = Some(match save_settings(&self.settings) {
                    Ok(()) => "Settings saved".to_string(),
                    Err(e) => {
                        tracing::warn!("{:#}", e);
                        format!("Could not save settings: {}", e)
                    }
                });
            }
        }

        Task::none()
    }
}

/// Persist settings to the default location
fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    settings.save().context("failed to save settings")?;
    tracing::info!("Settings saved to {:?}", Settings::file_path());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn slider_notifications_are_counted() {
        let mut app = app();

        let _ = app.update(Message::SliderChanged(SliderId::Volume, 12.0));
        let _ = app.update(Message::SliderChanged(SliderId::Volume, 13.0));

        let volume = app.slider(SliderId::Volume);
        assert_eq!(volume.description.value, 13.0);
        assert_eq!(volume.notifications, 2);
        assert_eq!(app.slider(SliderId::Brightness).notifications, 0);
    }

    #[test]
    fn set_half_animates_to_midpoint() {
        let mut app = app();

        let _ = app.update(Message::SetHalf(SliderId::Volume));

        let volume = app.slider(SliderId::Volume);
        assert_eq!(volume.description.value, 50.0);
        assert!(volume.animate);

        // A drag afterwards is not animated from outside
        let _ = app.update(Message::SliderChanged(SliderId::Volume, 20.0));
        assert!(!app.slider(SliderId::Volume).animate);
    }

    #[test]
    fn tint_cycles_through_palette() {
        let mut app = app();
        let first = app.tint();

        for _ in 0..theme::TINT_CYCLE.len() {
            let _ = app.update(Message::CycleTint);
        }

        assert_eq!(app.tint(), first);
    }

    #[test]
    fn tint_cycles_from_out_of_range_index() {
        let mut settings = Settings::default();
        settings.display.tint_index = usize::MAX;
        let mut app = App::with_settings(settings);

        let _ = app.update(Message::CycleTint);

        let len = theme::TINT_CYCLE.len();
        assert_eq!(app.settings.display.tint_index, (usize::MAX % len + 1) % len);
        assert_eq!(app.tint(), theme::TINT_CYCLE[app.settings.display.tint_index]);
    }

    #[test]
    fn value_past_maximum_is_displayed_capped() {
        let mut app = app();

        let _ = app.update(Message::SetBeyondMaximum(SliderId::Brightness));

        let brightness = app.slider(SliderId::Brightness);
        assert_eq!(brightness.description.value, 2.0);
        assert_eq!(brightness.displayed_value(), 1.0);
    }

    #[test]
    fn value_below_minimum_is_displayed_raised() {
        let mut app = app();
        app.slider_mut(SliderId::Volume).description.value = -5.0;

        assert_eq!(app.slider(SliderId::Volume).displayed_value(), 0.0);
    }

    #[test]
    fn continuous_toggle_updates_description() {
        let mut app = app();

        let _ = app.update(Message::ToggleContinuous(SliderId::Brightness, true));

        assert!(app.slider(SliderId::Brightness).description.continuous);
    }

    #[test]
    fn dark_mode_switches_theme() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::UpdateDarkMode(false));
        assert_eq!(app.theme(), Theme::Light);
    }
}
