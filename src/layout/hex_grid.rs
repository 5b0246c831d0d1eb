//! Macro-site hex grid sizing.
//!
//! Macro sites are laid out in a staggered "brick" pattern: rows alternate
//! between `grid_width` slots and `grid_width + 1` slots shifted by half the
//! inter-site distance, so consecutive row pairs cycle through
//! `2 * grid_width + 1` slots. The row count derived from that cycle drives
//! the bounding box that must contain all outdoor mobile stations.
//!
//! The row-count decomposition is kept exactly as the scenario family defines
//! it. It is an approximation of the underlying hex-tiling identity, but the
//! produced bounding box is part of the scenario's sizing contract, so a
//! "more correct" derivation must not be substituted here.

use super::types::{Bounds, CoverageArea, Point, UE_ELEVATION};

/// Vertical distance between consecutive rows, as a fraction of the
/// inter-site distance.
const ROW_SPACING_FACTOR: f64 = 0.75;

/// Sizing parameters of the macro deployment.
///
/// Preconditions (enforced by configuration validation before any geometry
/// runs): `site_count >= 1`, `grid_width >= 1`, `inter_site_distance > 0`,
/// `margin_factor >= 0`. A zero site count means the grid is not built at
/// all and the caller uses [`super::types::FALLBACK_COVERAGE`] instead.
#[derive(Debug, Clone, Copy)]
pub struct MacroGrid {
    site_count: u32,
    grid_width: u32,
    inter_site_distance: f64,
    margin_factor: f64,
}

impl MacroGrid {
    pub fn new(site_count: u32, grid_width: u32, inter_site_distance: f64, margin_factor: f64) -> Self {
        Self {
            site_count,
            grid_width,
            inter_site_distance,
            margin_factor,
        }
    }

    /// Number of slots a row pair cycles through.
    fn row_pair_period(&self) -> u32 {
        2 * self.grid_width + 1
    }

    /// Decompose a site index into its row index and the X slot offset within
    /// that row. Even rows hold `grid_width` slots; odd rows are shifted left
    /// by half the inter-site distance and hold `grid_width + 1` slots.
    fn row_and_slot(&self, site_index: u32) -> (u32, u32) {
        let bi_row_index = site_index / self.row_pair_period();
        let bi_row_remainder = site_index % self.row_pair_period();
        if bi_row_remainder < self.grid_width {
            (bi_row_index * 2, bi_row_remainder)
        } else {
            (bi_row_index * 2 + 1, bi_row_remainder - self.grid_width)
        }
    }

    /// Number of rows occupied by the deployment.
    pub fn row_count(&self) -> u32 {
        let last_index = self.site_count - 1;
        let bi_row_index = last_index / self.row_pair_period();
        let bi_row_remainder = last_index % self.row_pair_period();
        let mut row_index = bi_row_index * 2 + 1;
        if bi_row_remainder >= self.grid_width {
            row_index += 1;
        }
        row_index
    }

    /// Bounding region for all outdoor mobile stations: the grid footprint
    /// padded by `margin_factor` times the inter-site distance on every side,
    /// with the fixed mobile-station elevation attached.
    pub fn coverage_area(&self) -> CoverageArea {
        let isd = self.inter_site_distance;
        let margin = self.margin_factor * isd;
        let rows = self.row_count();
        CoverageArea {
            bounds: Bounds::new(
                -margin,
                f64::from(self.grid_width) * isd + margin,
                -margin,
                f64::from(rows - 1) * isd * ROW_SPACING_FACTOR.sqrt() + margin,
            ),
            z_min: UE_ELEVATION,
            z_max: UE_ELEVATION,
        }
    }

    /// Position of every site, in deployment order.
    ///
    /// Uses the same row decomposition as [`row_count`](Self::row_count), so
    /// the emitted positions can never disagree with the derived bounding
    /// box. The first even-row site sits at half the inter-site distance from
    /// the origin; odd rows start half a distance further left.
    pub fn site_positions(&self) -> Vec<Point> {
        let isd = self.inter_site_distance;
        let x_first = isd / 2.0;
        (0..self.site_count)
            .map(|site| {
                let (row, slot) = self.row_and_slot(site);
                let x_start = if row % 2 == 0 { x_first } else { x_first - isd / 2.0 };
                Point {
                    x: x_start + f64::from(slot) * isd,
                    y: f64::from(row) * isd * ROW_SPACING_FACTOR.sqrt(),
                }
            })
            .collect()
    }
}
