//! Toroidal Snake: a tick-driven simulation of a snake on a wrap-around grid
//! with growth food, shrink food and static obstacles.
//!
//! The simulation core ([`grid`], [`snake`], [`food`], [`placement`],
//! [`settings`], [`game`]) is deterministic given a seed. The terminal
//! front end lives in [`renderer`], [`input`] and [`terminal_runtime`].

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod placement;
pub mod renderer;
pub mod score;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
