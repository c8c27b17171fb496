//! cmp-plot: building blocks for plot widgets embedded in desktop apps.
//!
//! The crate covers the toolkit-independent part of a plot component: the
//! shared data model (limits, scaling, markers, graph attributes, input
//! vocabulary), marker geometry, and the label component. Drawing goes
//! through backend-agnostic `RenderFrame`s so hosts pick their renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PlotLabel, PlotLookAndFeel, PlotTheme};
pub use error::{PlotError, PlotResult};
