//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and toast text
//! - file: Image type detection by extension
//! - formatting: Human-readable metadata, sizes and titles
//! - layout: Pagination bar window
//! - navigation: Selection movement (wrapping and clamped)
//! - pagination: Page slicing
//! - path: Sandbox path resolution and file name decoding
//! - ui: UI timing

pub mod errors;
pub mod file;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod path;
pub mod ui;
