//! Results Panel (Right Side)
//!
//! Only mounted while the result view is visible. Dispatches on what the
//! view holds:
//! - Bars -> result_bars
//! - Plot -> result_plot

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use risk_core::render::Visualization;

use super::{result_bars, result_plot};
use crate::{App, Message};

/// Render the results panel for the last applied result
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let results = app.session.results();

    let title = match results.calculator() {
        Some(calculator) => format!("{} Risk", calculator.display_name()),
        None => "Results".to_string(),
    };

    let body: Element<'_, Message> = match results.visualization() {
        Visualization::Bars { bars, risk_level } => result_bars::view(bars, risk_level.as_deref()).into(),
        Visualization::Plot { size, .. } => result_plot::view(app.plot_handle.as_ref(), *size),
        Visualization::Empty => text("No result").size(11).color([0.5, 0.5, 0.5]).into(),
    };

    let footer = match results.rendered_at() {
        Some(at) => format!("Computed at {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
        None => String::new(),
    };

    let content: Column<'_, Message> = column![
        text(title).size(16),
        Space::new().height(10),
        body,
        Space::new().height(10),
        text(footer).size(10).color([0.5, 0.5, 0.5]),
    ];

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(55))
        .style(container::bordered_box)
        .padding(5)
        .into()
}
