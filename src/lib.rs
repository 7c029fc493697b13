#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod path;
pub mod renderer;
pub mod surface;

pub use action::{ActionQueue, CanvasAction};
pub use app::SketchApp;
pub use board::Board;
pub use config::ToolConfig;
pub use error::BoardError;
pub use history::History;
pub use input::{InputController, InputState};
pub use path::{Path, Tool};
pub use surface::{Blend, Surface};
