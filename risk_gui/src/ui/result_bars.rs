//! Percentage bars (legacy response contract)
//!
//! One bar per value; label and value text on top, fill below, both tinted
//! by the bar's risk tier.

use iced::widget::{column, progress_bar, row, text, Column, Space};
use iced::{Background, Border, Color, Length, Theme};

use risk_core::render::Bar;

use crate::Message;

/// Render all bars, headed by the service's risk level when it sent one
pub fn view<'a>(bars: &'a [Bar], risk_level: Option<&'a str>) -> Column<'a, Message> {
    let mut list = column![].spacing(14);
    if let Some(level) = risk_level {
        list = list.push(text(format!("Risk level: {}", level)).size(13));
    }
    for bar in bars {
        list = list.push(view_bar(bar));
    }
    list
}

fn view_bar(bar: &Bar) -> Column<'_, Message> {
    let [r, g, b] = bar.tier.rgb();
    let color = Color::from_rgb(r, g, b);

    column![
        row![
            text(bar.label.as_str()).size(12),
            Space::new().width(Length::Fill),
            text(bar.value_text()).size(12).color(color),
        ],
        progress_bar(0.0..=1.0, bar.fill_fraction()).style(move |theme: &Theme| progress_bar::Style {
            background: Background::Color(theme.extended_palette().background.weak.color),
            bar: Background::Color(color),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
        }),
    ]
    .spacing(4)
}
