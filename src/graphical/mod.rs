//! Graphical frontend using macroquad
//!
//! Window, input sampling, sprite blitting and the main loop.

mod app;
mod renderer;
mod input;
mod colors;

pub use app::{run_graphical, window_conf};
