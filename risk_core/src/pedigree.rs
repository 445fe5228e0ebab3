//! # Pedigree State
//!
//! Per-parent affected status and the family-history category derived from it.
//!
//! The category is never set directly. It is recomputed from the two parent
//! flags, falling back to the number of selected ancestor nodes only when
//! neither parent is marked affected:
//!
//! | male | female | ancestors | category       |
//! |------|--------|-----------|----------------|
//! | yes  | yes    | any       | `both_parents` |
//! | yes  | no     | any       | `one_parent`   |
//! | no   | yes    | any       | `one_parent`   |
//! | no   | no     | ≥ 2       | `both_parents` |
//! | no   | no     | 1         | `one_parent`   |
//! | no   | no     | 0         | `none`         |
//!
//! ## Example
//!
//! ```rust
//! use risk_core::pedigree::{HistoryCategory, ParentSide, PedigreeState};
//!
//! let mut pedigree = PedigreeState::new();
//! assert_eq!(pedigree.set_parent_status(ParentSide::Male, true), HistoryCategory::OneParent);
//! assert_eq!(pedigree.set_parent_status(ParentSide::Female, true), HistoryCategory::BothParents);
//! ```

use serde::{Deserialize, Serialize};

/// Which parent a toggle or ancestor tree belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentSide {
    Male,
    Female,
}

impl ParentSide {
    /// Both sides, father first
    pub const ALL: [ParentSide; 2] = [ParentSide::Male, ParentSide::Female];

    /// Identifier used in element ids and wire formats
    pub fn id(&self) -> &'static str {
        match self {
            ParentSide::Male => "male",
            ParentSide::Female => "female",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ParentSide::Male => "Father",
            ParentSide::Female => "Mother",
        }
    }
}

impl std::fmt::Display for ParentSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Affected status of one parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParentStatus {
    pub affected: bool,
}

/// Categorical family-history signal sent with thalassemia requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryCategory {
    #[default]
    None,
    OneParent,
    BothParents,
}

impl HistoryCategory {
    /// Wire identifier (`none`, `one_parent`, `both_parents`)
    pub fn id(&self) -> &'static str {
        match self {
            HistoryCategory::None => "none",
            HistoryCategory::OneParent => "one_parent",
            HistoryCategory::BothParents => "both_parents",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HistoryCategory::None => "No known history",
            HistoryCategory::OneParent => "One parent line",
            HistoryCategory::BothParents => "Both parent lines",
        }
    }

    /// Classify from the number of selected ancestor nodes
    pub fn from_ancestor_count(count: usize) -> HistoryCategory {
        match count {
            0 => HistoryCategory::None,
            1 => HistoryCategory::OneParent,
            _ => HistoryCategory::BothParents,
        }
    }
}

impl std::fmt::Display for HistoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Parent statuses plus the last derived history category.
///
/// Owned by the session and handed explicitly to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeState {
    male: ParentStatus,
    female: ParentStatus,
    history: HistoryCategory,
}

impl PedigreeState {
    /// Both parents unaffected, history `none`
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of one parent
    pub fn status(&self, side: ParentSide) -> ParentStatus {
        match side {
            ParentSide::Male => self.male,
            ParentSide::Female => self.female,
        }
    }

    /// Last derived history category
    pub fn history(&self) -> HistoryCategory {
        self.history
    }

    /// Set one parent's status and return the recomputed category.
    ///
    /// No ancestor information is available here, so with both parents
    /// unaffected the result is `none` until [`derive_history`] supplies a count.
    ///
    /// [`derive_history`]: PedigreeState::derive_history
    pub fn set_parent_status(&mut self, side: ParentSide, affected: bool) -> HistoryCategory {
        match side {
            ParentSide::Male => self.male.affected = affected,
            ParentSide::Female => self.female.affected = affected,
        }
        self.derive_history(0)
    }

    /// Recompute the category, consulting `ancestor_selected_count` only
    /// when neither parent is affected.
    pub fn derive_history(&mut self, ancestor_selected_count: usize) -> HistoryCategory {
        self.history = match (self.male.affected, self.female.affected) {
            (true, true) => HistoryCategory::BothParents,
            (true, false) | (false, true) => HistoryCategory::OneParent,
            (false, false) => HistoryCategory::from_ancestor_count(ancestor_selected_count),
        };
        self.history
    }
}
