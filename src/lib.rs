// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Eased pointer, wheel and pinch orientation controller for 3D viewers.
//!
//! Tumble turns pointer drags into yaw/pitch, and wheel or two-finger pinch
//! gestures into a clamped camera distance. Every frame the displayed values
//! ease toward their targets, giving a smooth, slightly lagging response.
//!
//! # Key entry points
//!
//! - [`controller::OrientationController`] - input handlers and per-frame
//!   `tick`
//! - [`input::InputEvent`] - host-neutral pointer, wheel and touch events
//! - [`options::Options`] - sensitivities, smoothing, zoom range, camera and
//!   scene settings, loadable from TOML
//! - [`camera::Camera`] - projection built from a frame's
//!   [`controller::FrameTransform`]
//!
//! With the `viewer` feature, `viewer::Viewer` opens a winit window that
//! renders a lit box through wgpu. With the `web` feature, `web` binds the
//! controller to a browser canvas.

pub mod camera;
pub mod controller;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use controller::{FrameTransform, OrientationController};
pub use error::TumbleError;
pub use options::Options;
