//! Core game logic module
//!
//! Everything here is pure state manipulation with no I/O or rendering
//! dependencies, so it can be driven from the frame loop or from tests alike.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepOutcome};
pub use food::Food;
pub use snake::{segment_shape, SegmentShape, Snake};
pub use state::{CollisionKind, GameState, Phase, Position};
