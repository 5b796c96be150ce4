//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - events: Results of background work (renders, display builds, deletes)
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and dispatch to the orchestration methods in app/.

pub mod events;
pub mod keyboard;

// Re-export for convenience
pub use events::handle_message;
pub use keyboard::handle_key;
