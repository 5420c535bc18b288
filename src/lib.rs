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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! First-person navigation core for a 3D viewer.
//!
//! Converts raw pointer and keyboard input into a smooth camera orientation
//! and position, and reports when the camera's view ray meets scene
//! geometry.
//!
//! # Key entry points
//!
//! - [`input::InputAggregator`] - per-frame input state and pointer deltas
//! - [`camera::FirstPersonNavigator`] - yaw/pitch look and key-driven walking
//! - [`proximity::ProximityDetector`] - nearest-hit ray tests against
//!   colliding volumes
//! - [`session::NavigationSession`] - owned context wiring all three with a
//!   fixed per-tick order
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Tick order
//!
//! Input events are applied as they arrive. Each frame the host calls
//! [`session::NavigationSession::tick`], which integrates the navigator
//! (consuming that frame's pointer delta), publishes the pose into the
//! host camera, then probes the view ray. A hit comes back as a value; the
//! host decides on the next tick what to do with it.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod proximity;
pub mod session;
pub mod util;

pub use error::NavError;
