//! Input view for the thalassemia calculator
//!
//! Displays:
//! - Mother and father population
//! - Relation between the parents
//! - Pedigree (parent toggles, ancestor trees, derived history)
//! - Submit button

use iced::widget::{column, text, Column, Space};

use risk_core::options::{Population, Relation};
use risk_core::Calculator;

use super::pedigree_panel;
use super::shared::form::{labeled_pick_list, submit_button};
use crate::{App, Message};

/// Render the thalassemia form
pub fn view(app: &App) -> Column<'_, Message> {
    let form = &app.session.thalassemia_form;

    column![
        text("Thalassemia").size(16),
        text("Autosomal recessive: both parents must pass on an affected allele.")
            .size(11)
            .color([0.5, 0.5, 0.5]),
        Space::new().height(10),
        text("Parents").size(14),
        labeled_pick_list::<Population>(
            "Mother's population:",
            &form.mother_population,
            Message::ThalMotherPopulationSelected,
        ),
        labeled_pick_list::<Population>(
            "Father's population:",
            &form.father_population,
            Message::ThalFatherPopulationSelected,
        ),
        labeled_pick_list::<Relation>("Relation:", &form.relation, Message::RelationSelected),
        Space::new().height(12),
        pedigree_panel::view(app),
        Space::new().height(16),
        submit_button(app, Calculator::Thalassemia),
    ]
    .spacing(6)
}
