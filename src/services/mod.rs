//! Background Services
//!
//! Spawners for work that must not block the UI loop:
//! - gallery: root picking, page renders and deletes against the folder host
//! - images: terminal display builds and capture metadata extraction
//!
//! Each spawner takes a channel sender and reports one `AppMessage` when done.
//! Host I/O is never cancelled; stale results are discarded by generation on arrival.

pub mod gallery;
pub mod images;

pub use gallery::{spawn_delete, spawn_pick_root, spawn_render};
pub use images::{spawn_display_build, spawn_metadata};
