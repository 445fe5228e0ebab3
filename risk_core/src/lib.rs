//! # risk_core - Heredity Risk Calculator Client
//!
//! `risk_core` is the controller behind the Heredity front ends. It turns
//! pedigree selections into a bounded family-history signal, builds requests
//! for the two calculators (thalassemia, autosomal recessive; hemophilia,
//! X-linked recessive), posts them to the external calculation service and
//! maps the answers onto the result panel.
//!
//! The probability math itself lives in the service; this crate only speaks
//! its JSON/image contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use risk_core::pedigree::ParentSide;
//! use risk_core::request::Calculator;
//! use risk_core::session::Session;
//!
//! let mut session = Session::default();
//! session.toggle_disease(ParentSide::Female, true);
//!
//! let submission = session.begin_submit(Calculator::Thalassemia);
//! let body = serde_json::to_string(&submission.request).unwrap();
//! assert!(body.contains("\"history\":\"one_parent\""));
//! ```
//!
//! ## Modules
//!
//! - [`pedigree`] - Parent statuses and the derived history category
//! - [`selection`] - Tabs, disease toggles and ancestor trees
//! - [`options`] - Fixed option sets offered by the forms
//! - [`request`] - Request bodies per calculator
//! - [`client`] - HTTP client for the calculation service
//! - [`response`] - Legacy/current response contracts as one tagged type
//! - [`render`] - Result panel state (bars or plot image)
//! - [`session`] - Owns all of the above for one window
//! - [`config`] - Service URL, timeout, busy label
//! - [`errors`] - Structured error types

pub mod client;
pub mod config;
pub mod errors;
pub mod options;
pub mod pedigree;
pub mod render;
pub mod request;
pub mod response;
pub mod selection;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use client::CalculationClient;
pub use config::ClientConfig;
pub use errors::{RiskError, RiskResult};
pub use pedigree::{HistoryCategory, ParentSide, PedigreeState};
pub use request::{Calculator, CalculatorRequest};
pub use response::CalculatorResponse;
pub use session::{Session, SubmitOutcome};
