//! Circular coded targets for close-range photogrammetry.
//!
//! Each target is a solid centre dot inside a ring of `bits` equal segments.
//! The filled segments spell a code that is chosen to be the smallest of its
//! cyclic rotations, so a camera can decode the identity without knowing how
//! the target is rotated in the image plane.
//!
//! This crate re-exports the workspace:
//! - `coded_targets::codes`: rotate/canonicalise codes and list the available ones;
//! - `coded_targets::core`: marker and calibration geometry as neutral shapes;
//! - `coded_targets::print`: validation, page layout, SVG/PDF/PNG output.
//!
//! The `coded-targets` binary (feature `cli`, on by default) wraps
//! [`print::generate`].
//!
//! ## Quickstart
//!
//! ```no_run
//! use coded_targets::{generate, TargetConfig};
//!
//! # fn main() -> Result<(), coded_targets::PrintError> {
//! let cfg = TargetConfig {
//!     bits: 8,
//!     markers_total: 24,
//!     columns: 6,
//!     marker_padding_mm: 20.0,
//!     ..TargetConfig::default()
//! };
//! let report = generate(&cfg)?;
//! for m in &report.markers {
//!     println!("{:>3}: {} ({})", m.index, m.code, m.bit_pattern);
//! }
//! # Ok(())
//! # }
//! ```

pub use coded_targets_codes as codes;
pub use coded_targets_core as core;
pub use coded_targets_print as print;

pub use coded_targets_codes::{canonical_code, generate_codes, is_canonical, rotate_code, RingCode};
pub use coded_targets_print::{generate, GenerationReport, PrintError, TargetConfig};
