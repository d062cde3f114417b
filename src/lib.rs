//! Paper fortune teller library - the testable part of the simulator.
//!
//! Pages, the wizard state machine, both renderers and the widgets they draw
//! with live here. The binary (`main.rs`) only owns the SDL window, the
//! frame loop and the mapping from window events to [`input::InputEvent`]s.
//!
//! # Testing
//!
//! Everything draws onto generic `DrawTarget`s, so tests render into an
//! off-screen `SimulatorDisplay` and sample pixels:
//! ```bash
//! cargo test --lib
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration and look
pub mod colors;
pub mod config;
pub mod styles;

// Pure logic
pub mod geometry;
pub mod oscillator;
pub mod pages;
pub mod profiling;
pub mod wizard;

// Drawing
pub mod animations;
pub mod renderers;
pub mod widgets;

// Application
pub mod app;
pub mod assets;
pub mod input;
pub mod screens;
