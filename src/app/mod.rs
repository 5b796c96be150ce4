//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (selection, dialogs)
//! - The gallery controller and viewer from the library
//! - Services (background host I/O and image decoding)
//! - Logic (pure functions in photodeck::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod file_ops;
pub(crate) mod navigation;
pub(crate) mod preview;
