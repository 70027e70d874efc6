//! Depth-buffered parallel rasterizer for a rotating shaded torus.
//!
//! The [`render`] module holds the frame pipeline; [`app`] drives it
//! headlessly from the command line.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod render_log;
