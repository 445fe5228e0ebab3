//! Header and calculator tabs
//!
//! Exactly one tab is highlighted; pressing any tab (even the active one)
//! hides the result panel.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use risk_core::selection::SelectionSurface;
use risk_core::Calculator;

use crate::Message;

/// Render the application header with title and theme toggle
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("Heredity").size(28),
        Space::new().width(12),
        text("Genetic risk estimation").size(14).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the tab strip, one button per calculator
pub fn view_tabs(selection: &SelectionSurface) -> Element<'static, Message> {
    let mut tabs = row![].spacing(4);

    for calculator in Calculator::ALL {
        let style = if selection.is_tab_active(calculator) {
            button::primary
        } else {
            button::secondary
        };
        tabs = tabs.push(
            button(text(format!("{} ({})", calculator.display_name(), calculator.inheritance())).size(12))
                .on_press(Message::SwitchTab(calculator))
                .padding(Padding::from([6, 14]))
                .style(style),
        );
    }

    tabs.padding(Padding::from([6, 0])).into()
}
