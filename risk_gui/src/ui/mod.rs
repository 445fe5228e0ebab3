//! UI module for Heredity GUI
//!
//! # Panel Structure
//! - `tabs` - Header (title, theme toggle) and the calculator tab strip
//! - `input_panel` - Left panel: dispatches to input_* child modules by active tab
//! - `results_panel` - Right panel: dispatches to result_* child modules (only shown when visible)
//! - `status_bar` - Service URL and status messages
//! - `modal` - Blocking notice overlay (connection failures)
//!
//! # Input Panel Children
//! - `input_thalassemia` - Populations, relation, pedigree, submit
//! - `input_hemophilia` - Carrier status, family history, population, father status, submit
//! - `pedigree_panel` - Parent disease toggles and ancestor trees
//!
//! # Results Panel Children
//! - `result_bars` - Legacy percentage bars with risk tier colours
//! - `result_plot` - Probability plot image at its size variant
//!
//! # Shared Components
//! - `shared/form` - Labeled pick lists and the submit button

// Top-level panels
pub mod tabs;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod modal;

// Input panel children
pub mod input_thalassemia;
pub mod input_hemophilia;
pub mod pedigree_panel;

// Results panel children
pub mod result_bars;
pub mod result_plot;

// Shared components
pub mod shared;
