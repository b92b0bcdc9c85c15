//! Snake Arcade - classic walled-grid snake for the terminal
//!
//! Crate layout:
//! - Core game logic with no I/O dependencies (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Optional sound cues (audio module)
//! - The frame loop tying them together (app module)

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod render;
pub mod stats;
