//! Modal dialog component
//!
//! Blocking notice overlay. The backdrop swallows clicks so nothing behind
//! it can be pressed until the notice is acknowledged.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::DismissNotice)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the notice dialog
pub fn view_notice(notice: &str) -> Element<'_, Message> {
    let content = column![
        text("Something went wrong").size(18),
        Space::new().height(12),
        text(notice).size(12),
        Space::new().height(6),
        text("Check that the calculation service is running, then try again.")
            .size(11)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(20),
        row![
            Space::new().width(Length::Fill),
            button(text("OK").size(11))
                .on_press(Message::DismissNotice)
                .padding(Padding::from([6, 16]))
                .style(button::primary),
        ],
    ]
    .width(Length::Fixed(380.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
