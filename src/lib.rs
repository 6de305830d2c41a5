//! Fixed-tick grid Snake.
//!
//! The library half hosts the whole simulation — grid model, snake body,
//! food placement, and the [`game::GameSession`] state machine — so tests
//! and alternative frontends can drive sessions without a terminal. The
//! binary wires it to a ratatui/crossterm runtime.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
