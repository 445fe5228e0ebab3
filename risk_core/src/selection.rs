//! # Selection Surface
//!
//! Keeps UI interaction state in sync with [`PedigreeState`] and with the
//! visibility of dependent regions. Knows nothing about the network or about
//! how results are drawn.
//!
//! - **Tabs** are mutually exclusive; switching always hides the result panel.
//! - **Disease toggles** are a two-button group per parent side.
//! - **Ancestor nodes** are independent on/off markers, one tree per side. A
//!   side's tree is hidden while that parent is marked affected.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pedigree::{ParentSide, PedigreeState};
use crate::render::ResultView;
use crate::request::Calculator;

/// The two options of a parent's disease toggle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseOption {
    #[default]
    Unaffected,
    Affected,
}

impl DiseaseOption {
    pub const ALL: [DiseaseOption; 2] = [DiseaseOption::Unaffected, DiseaseOption::Affected];

    pub fn from_affected(affected: bool) -> DiseaseOption {
        if affected {
            DiseaseOption::Affected
        } else {
            DiseaseOption::Unaffected
        }
    }

    pub fn is_affected(&self) -> bool {
        matches!(self, DiseaseOption::Affected)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiseaseOption::Unaffected => "Unaffected",
            DiseaseOption::Affected => "Affected",
        }
    }
}

/// A node in one parent's ancestor tree (that parent's own parents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AncestorNode {
    Grandfather,
    Grandmother,
}

impl AncestorNode {
    pub const ALL: [AncestorNode; 2] = [AncestorNode::Grandfather, AncestorNode::Grandmother];

    /// Label relative to the given parent side
    pub fn display_name(&self, side: ParentSide) -> &'static str {
        match (side, self) {
            (ParentSide::Male, AncestorNode::Grandfather) => "Paternal grandfather",
            (ParentSide::Male, AncestorNode::Grandmother) => "Paternal grandmother",
            (ParentSide::Female, AncestorNode::Grandfather) => "Maternal grandfather",
            (ParentSide::Female, AncestorNode::Grandmother) => "Maternal grandmother",
        }
    }
}

/// UI selection state: active tab, toggle groups and ancestor trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSurface {
    active_tab: Calculator,
    male_option: DiseaseOption,
    female_option: DiseaseOption,
    selected_nodes: BTreeSet<(ParentSide, AncestorNode)>,
}

impl SelectionSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Calculator {
        self.active_tab
    }

    /// Whether `tab` is the one highlighted (exactly one is at any time)
    pub fn is_tab_active(&self, tab: Calculator) -> bool {
        self.active_tab == tab
    }

    /// Activate `tab`, the control that triggered the switch.
    ///
    /// The result panel is always hidden and its content discarded, even
    /// when `tab` was already active.
    pub fn switch_tab(&mut self, tab: Calculator, results: &mut ResultView) {
        tracing::debug!(from = %self.active_tab, to = %tab, "switching tab");
        self.active_tab = tab;
        results.reset();
    }

    /// Currently selected option in a side's toggle group
    pub fn selected_option(&self, side: ParentSide) -> DiseaseOption {
        match side {
            ParentSide::Male => self.male_option,
            ParentSide::Female => self.female_option,
        }
    }

    /// Select an option in a side's toggle group and mirror it into the pedigree.
    ///
    /// Only `side` is touched; the other side's group and status stay as they were.
    pub fn toggle_disease(&mut self, side: ParentSide, affected: bool, pedigree: &mut PedigreeState) {
        let option = DiseaseOption::from_affected(affected);
        match side {
            ParentSide::Male => self.male_option = option,
            ParentSide::Female => self.female_option = option,
        }
        pedigree.set_parent_status(side, affected);
        pedigree.derive_history(self.selected_ancestor_count());
    }

    /// Whether a side's ancestor tree is shown (hidden while that parent is affected)
    pub fn is_tree_visible(&self, side: ParentSide) -> bool {
        !self.selected_option(side).is_affected()
    }

    /// Flip one ancestor node's selected marker and return its new state
    pub fn toggle_node(&mut self, side: ParentSide, node: AncestorNode) -> bool {
        let key = (side, node);
        if self.selected_nodes.remove(&key) {
            false
        } else {
            self.selected_nodes.insert(key);
            true
        }
    }

    /// Whether one ancestor node is selected
    pub fn is_node_selected(&self, side: ParentSide, node: AncestorNode) -> bool {
        self.selected_nodes.contains(&(side, node))
    }

    /// Number of selected ancestor nodes across both trees.
    ///
    /// Nodes in a hidden tree keep their marker and still count; the count is
    /// only consulted when neither parent is affected, i.e. when both trees
    /// are visible.
    pub fn selected_ancestor_count(&self) -> usize {
        self.selected_nodes.len()
    }
}
