//! Pedigree editor
//!
//! One block per parent:
//! - Affected / Unaffected toggle group (exactly one highlighted)
//! - Ancestor tree with that parent's own parents, hidden while the parent
//!   is marked affected
//!
//! Below the blocks, the history category a submission would carry.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use risk_core::selection::{AncestorNode, DiseaseOption, SelectionSurface};
use risk_core::ParentSide;

use crate::{App, Message};

/// Render both parents' toggles and trees plus the derived history
pub fn view(app: &App) -> Column<'_, Message> {
    let selection = app.session.selection();
    let history = app.session.current_history();

    column![
        text("Family History").size(14),
        row![view_parent(selection, ParentSide::Female), view_parent(selection, ParentSide::Male)].spacing(10),
        row![
            text("History signal:").size(11),
            Space::new().width(6),
            text(history.display_name()).size(11),
            text(format!(" ({})", history.id())).size(10).color([0.5, 0.5, 0.5]),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8)
}

fn view_parent(selection: &SelectionSurface, side: ParentSide) -> Element<'static, Message> {
    let current = selection.selected_option(side);

    let mut toggles = row![].spacing(4);
    for option in DiseaseOption::ALL {
        let style = if option == current {
            button::primary
        } else {
            button::secondary
        };
        toggles = toggles.push(
            button(text(option.display_name()).size(11))
                .on_press(Message::ToggleDisease(side, option.is_affected()))
                .padding(Padding::from([4, 10]))
                .style(style),
        );
    }

    let mut block = column![text(side.display_name()).size(12), toggles].spacing(6);

    if selection.is_tree_visible(side) {
        block = block.push(view_tree(selection, side));
    } else {
        block = block.push(
            text("Ancestors not needed: affected parent")
                .size(10)
                .color([0.5, 0.5, 0.5]),
        );
    }

    container(block)
        .padding(8)
        .width(Length::FillPortion(1))
        .style(container::bordered_box)
        .into()
}

fn view_tree(selection: &SelectionSurface, side: ParentSide) -> Element<'static, Message> {
    let mut nodes = column![text("Affected ancestors").size(10).color([0.5, 0.5, 0.5])].spacing(3);

    for node in AncestorNode::ALL {
        let selected = selection.is_node_selected(side, node);
        let marker = if selected { "●" } else { "○" };
        let style = if selected { button::primary } else { button::text };
        nodes = nodes.push(
            button(
                row![text(marker).size(10), Space::new().width(6), text(node.display_name(side)).size(10)]
                    .align_y(Alignment::Center),
            )
            .on_press(Message::ToggleNode(side, node))
            .padding(Padding::from([3, 8]))
            .width(Length::Fill)
            .style(style),
        );
    }

    nodes.into()
}
