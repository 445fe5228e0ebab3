//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `form` - Labeled pick list rows and the calculator submit button

pub mod form;
