//! Input Panel (Left)
//!
//! Dispatches to the form of the active tab:
//! - Thalassemia -> input_thalassemia
//! - Hemophilia -> input_hemophilia

use iced::widget::{container, scrollable, Column};
use iced::{Element, Length};

use risk_core::Calculator;

use super::{input_hemophilia, input_thalassemia};
use crate::{App, Message};

/// Render the input panel for the active calculator
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let panel: Column<'_, Message> = match app.session.selection().active_tab() {
        Calculator::Thalassemia => input_thalassemia::view(app),
        Calculator::Hemophilia => input_hemophilia::view(app),
    };

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(45))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
