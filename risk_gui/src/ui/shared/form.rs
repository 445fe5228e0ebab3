//! Form helpers shared by the calculator editors

use iced::widget::{button, pick_list, row, text};
use iced::{Alignment, Element, Length, Padding};

use risk_core::options::FormOption;
use risk_core::Calculator;

use crate::{App, Message};

/// Helper to create a labeled pick list over one option catalog.
///
/// `current` is the raw form value; an id outside the catalog shows as no selection.
pub fn labeled_pick_list<'a, T>(
    label: &'a str,
    current: &str,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: FormOption + std::fmt::Display,
{
    row![
        text(label).size(11).width(Length::Fixed(140.0)),
        pick_list(T::all(), T::from_str_flexible(current), on_select)
            .width(Length::Fill)
            .text_size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Submit button; shows the busy label while this calculator's call is in flight
pub fn submit_button(app: &App, calculator: Calculator) -> Element<'_, Message> {
    button(text(app.session.submit_label(calculator)).size(12))
        .on_press(Message::Submit(calculator))
        .padding(Padding::from([8, 20]))
        .width(Length::Fill)
        .style(button::primary)
        .into()
}
