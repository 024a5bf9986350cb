//! Dasher - a minimal side-scrolling runner.
//!
//! This module exposes the simulation logic for testing and external use.
//! The simulation core (`sprite`, `physics`, `obstacles`, `collision`,
//! `parallax`, `world`) depends only on plain-data math types and is
//! driven with an explicit delta-time, so it runs without a window.

pub mod assets;
pub mod collision;
pub mod constants;
pub mod obstacles;
pub mod parallax;
pub mod physics;
pub mod render;
pub mod sprite;
pub mod world;
