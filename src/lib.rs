//! photodeck library
//!
//! Folder/image gallery core shared by the terminal browser and the HTTP
//! server. Exposes modules for testing.

pub mod config;
pub mod gallery;
pub mod host;
pub mod logic;
pub mod metadata;
pub mod model;
pub mod server;
pub mod viewer;
