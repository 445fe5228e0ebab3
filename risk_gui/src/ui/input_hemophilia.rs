//! Input view for the hemophilia calculator
//!
//! All four fields go to the service as independent inputs; there is no
//! pedigree-derived history for this model.

use iced::widget::{column, text, Column, Space};

use risk_core::options::{FatherStatus, MotherCarrier, MotherHistory, Population};
use risk_core::Calculator;

use super::shared::form::{labeled_pick_list, submit_button};
use crate::{App, Message};

/// Render the hemophilia form
pub fn view(app: &App) -> Column<'_, Message> {
    let form = &app.session.hemophilia_form;

    column![
        text("Hemophilia").size(16),
        text("X-linked recessive: sons inherit from the mother only.")
            .size(11)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(10),
        text("Mother").size(14),
        labeled_pick_list::<MotherCarrier>("Carrier status:", &form.mother_carrier, Message::MotherCarrierSelected),
        labeled_pick_list::<MotherHistory>("Family history:", &form.mother_history, Message::MotherHistorySelected),
        labeled_pick_list::<Population>(
            "Population:",
            &form.mother_population,
            Message::HemoMotherPopulationSelected,
        ),
        Space::new().height(10),
        text("Father").size(14),
        labeled_pick_list::<FatherStatus>("Hemophilia:", &form.father_affected, Message::FatherStatusSelected),
        Space::new().height(16),
        submit_button(app, Calculator::Hemophilia),
    ]
    .spacing(6)
}
