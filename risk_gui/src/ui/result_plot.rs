//! Probability plot (current response contract)

use iced::widget::{container, image, text};
use iced::{Element, Length};

use risk_core::render::PlotSize;

use crate::Message;

/// Render the plot image at its size variant
pub fn view(handle: Option<&image::Handle>, size: PlotSize) -> Element<'static, Message> {
    match handle {
        Some(handle) => container(image(handle.clone()).width(Length::Fixed(size.width_px())))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .into(),
        None => text("Plot unavailable").size(11).color([0.8, 0.2, 0.2]).into(),
    }
}
