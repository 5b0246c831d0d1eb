//! Deployment layout core.
//!
//! This module owns the geometry that shapes a two-tier scenario:
//! - `geometry`: axis-aligned rectangle predicates
//! - `hex_grid`: macro-site grid sizing and site positions
//! - `allocator`: rejection-sampling placement of apartment blocks
//! - `types`: shared primitives, block/building descriptors, constants
//!
//! Everything here is pure geometry over injected randomness; parsing inputs
//! and formatting outputs live with the binary, not in this module.

pub mod allocator;
pub mod geometry;
pub mod hex_grid;
pub mod types;

pub use allocator::{BlockAllocator, LayoutError, RngSource, UniformSource};
pub use hex_grid::MacroGrid;
pub use types::{Bounds, Building, CoverageArea, PlacedBlock, Point};
