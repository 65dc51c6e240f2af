//! View rendering for the demo window

use iced::widget::{Space, button, column, container, row, text, toggler};
use iced::{Alignment, Color, Element, Fill};

use super::{App, Message, SliderId};
use crate::ui::primitives::PopSlider;
use crate::ui::theme;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("PopSlider").size(24),
            Space::new().width(Fill),
            text("Dark").size(14),
            toggler(self.settings.display.dark_mode)
                .on_toggle(Message::UpdateDarkMode)
                .size(20),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let footer = row![
            button(text("Cycle tint").size(14))
                .style(theme::secondary_button)
                .padding([8, 16])
                .on_press(Message::CycleTint),
            button(text("Save").size(14))
                .style(theme::secondary_button)
                .padding([8, 16])
                .on_press(Message::SaveSettings),
            text(self.status().unwrap_or_default().to_string()).size(13),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            header,
            self.slider_card("Volume", SliderId::Volume),
            self.slider_card("Brightness", SliderId::Brightness),
            footer,
        ]
        .spacing(20)
        .padding(24)
        .max_width(640);

        container(content)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .style(theme::main_content)
            .into()
    }

    fn slider_card(&self, label: &str, id: SliderId) -> Element<'_, Message> {
        let state = self.slider(id);
        let description = &state.description;

        let slider = PopSlider::from_description(description, move |value| {
            Message::SliderChanged(id, value)
        })
        .tint(self.tint())
        .background(self.slider_background())
        .width(Fill)
        .animated(state.animate);

        let mode = if description.continuous {
            "every step"
        } else {
            "on release"
        };

        let summary = row![
            text(label.to_string()).size(16),
            Space::new().width(Fill),
            text(format!("{:.2}", state.displayed_value())).size(16),
        ]
        .align_y(Alignment::Center);

        let details = row![
            text(format!("{} notifications, {}", state.notifications, mode)).size(12),
            Space::new().width(Fill),
            text("Continuous").size(12),
            toggler(description.continuous)
                .on_toggle(move |on| Message::ToggleContinuous(id, on))
                .size(16),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let actions = row![
            button(text("Half (animated)").size(12))
                .style(theme::secondary_button)
                .padding([4, 12])
                .on_press(Message::SetHalf(id)),
            button(text("Past maximum").size(12))
                .style(theme::secondary_button)
                .padding([4, 12])
                .on_press(Message::SetBeyondMaximum(id)),
        ]
        .spacing(8);

        container(column![summary, slider, details, actions].spacing(10))
            .padding(16)
            .width(Fill)
            .style(theme::card)
            .into()
    }

    fn slider_background(&self) -> Color {
        if self.settings.display.dark_mode {
            theme::SLIDER_BACKGROUND
        } else {
            Color {
                a: 0.15,
                ..theme::SLIDER_BACKGROUND
            }
        }
    }
}
