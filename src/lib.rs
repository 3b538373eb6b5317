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

//! Interactive 3D plasma-cell visualization core.
//!
//! Plasmacyte builds the complete anatomy of an antibody-secreting plasma
//! cell — membrane, nucleus with chromatin, Golgi stack, rough ER sheets,
//! and the rest of the organelle cast — as procedural mesh data, and
//! animates the secretion pathway (Golgi → vesicle → membrane fusion →
//! antibody release) as a pure function of elapsed time.
//!
//! The crate does not draw. A rendering consumer composes a
//! [`scene::Cell`], forwards pointer events to it, and uploads the
//! per-frame [`scene::FrameState`] snapshots into whatever scene-graph API
//! it wraps.
//!
//! # Key entry points
//!
//! - [`scene::Cell`] - the assembled cell (composition, events, frames)
//! - [`options::Options`] - runtime configuration (display, colors,
//!   camera, animation)
//! - [`organelle`] - the selectable organelle components
//! - [`animation::secretion`] - the pure secretion-cycle particle math
//!
//! # Determinism
//!
//! Every procedurally generated shape and placement derives from a single
//! seeded RNG, and every animated transform is a pure function of the
//! elapsed-seconds clock. The same seed and clock value always reproduce
//! the same scene, which is what makes seeking, pausing, and testing
//! straightforward.

pub mod animation;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod organelle;
pub mod picking;
pub mod scene;
pub mod util;
