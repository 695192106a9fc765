//! # Life Term
//!
//! Conway's Game of Life in the terminal. A board is populated randomly,
//! loaded from a file, or drawn by hand, then animated continuously or one
//! generation at a time, and saved on exit.
//!
//! ## Modules
//!
//! - [`game`] — Simulation kernel: board buffer, step engine, board editor
//! - [`persistence`] — Fixed binary board file format
//! - [`session`] — Session state machine and its input/render/pacing seams
//! - [`ui`] — Terminal UI: setup prompts, key decoding, board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod persistence;
pub mod session;
pub mod ui;
