//! Game module - Core game logic and state management

mod state;
mod steps;
mod time;
pub mod camera;
pub mod event;
pub mod intent;
pub mod message;

pub use state::Game;
pub use steps::{FrameContext, StepOutcome, PIPELINE};
pub use time::FrameLimiter;
pub use camera::Camera;
pub use event::GameEvent;
pub use intent::{Direction, FrameIntent};
pub use message::{GameMessage, MessageCategory, MessageLog};
