//! Grid-based Snake: a tick-driven game core with terminal collaborators.

pub mod collision;
pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
