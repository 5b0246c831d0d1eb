//! Data model for the deployment layout.
//!
//! Contains the geometric primitives shared by the grid sizer and the block
//! allocator, the descriptors emitted for every accepted apartment block, and
//! the fixed layout constants of the scenario family.

use serde::Serialize;

/// Side length of a single apartment along either axis, in scenario units.
pub const APARTMENT_SIDE: f64 = 10.0;

/// Clearance kept between a block edge and the buildings inside it.
pub const BLOCK_EDGE_INSET: f64 = 10.0;

/// Depth (Y extent) of one building: two apartment rows back to back.
pub const BUILDING_DEPTH: f64 = 2.0 * APARTMENT_SIDE;

/// Gap between the two buildings of a block.
pub const BUILDING_SPACING: f64 = 10.0;

/// Number of buildings emitted per accepted block. The scenario family always
/// pairs two buildings in a column, so this is a policy constant rather than a
/// derived value.
pub const BUILDINGS_PER_BLOCK: u32 = 2;

/// Height of one floor, in scenario units.
pub const FLOOR_HEIGHT: f64 = 3.0;

/// Depth (Y extent) of an apartment block: two buildings, their spacing, and
/// the edge clearance on both sides.
pub const BLOCK_DEPTH: f64 = 2.0 * BLOCK_EDGE_INSET + 2.0 * BUILDING_DEPTH + BUILDING_SPACING;

/// Elevation at which outdoor mobile stations are assumed to operate.
pub const UE_ELEVATION: f64 = 1.5;

/// Coverage area used when the scenario deploys no macro sites at all. The
/// block allocator still needs a region to scatter blocks into, so this fixed
/// default stands in for the grid-derived box.
pub const FALLBACK_COVERAGE: CoverageArea = CoverageArea {
    bounds: Bounds {
        x_min: 0.0,
        x_max: 150.0,
        y_min: 0.0,
        y_max: 150.0,
    },
    z_min: UE_ELEVATION,
    z_max: UE_ELEVATION,
};

/// Simple 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle given by its extreme coordinates.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`. Instances are immutable
/// and compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Bounding region for all outdoor mobile stations: a rectangle plus the
/// fixed elevation interval passed through to the consuming framework.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageArea {
    pub bounds: Bounds,
    pub z_min: f64,
    pub z_max: f64,
}

/// An apartment block accepted by the allocator.
///
/// Created once when a non-overlapping position is found and never mutated
/// afterwards; the layout is a single generation pass, not a dynamic
/// simulation of block churn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedBlock {
    pub bounds: Bounds,
    /// Apartments along the X axis of each building in the block.
    pub apartments_x: u32,
    /// Stacked floors per building.
    pub floors: u32,
}

impl PlacedBlock {
    /// Footprint of a block with `apartments_x` apartments per building row:
    /// the building width plus the edge clearance on both sides, by the fixed
    /// block depth.
    pub fn footprint(apartments_x: u32) -> (f64, f64) {
        (
            f64::from(apartments_x) * APARTMENT_SIDE + 2.0 * BLOCK_EDGE_INSET,
            BLOCK_DEPTH,
        )
    }

    /// Descriptor of the building sub-grid inside this block.
    pub fn building_grid(&self) -> BuildingGrid {
        BuildingGrid {
            min_x: self.bounds.x_min + BLOCK_EDGE_INSET,
            min_y: self.bounds.y_min + BLOCK_EDGE_INSET,
            length_x: f64::from(self.apartments_x) * APARTMENT_SIDE,
            length_y: BUILDING_DEPTH,
            delta_y: BUILDING_SPACING,
            height: f64::from(self.floors) * FLOOR_HEIGHT,
            rooms_x: self.apartments_x,
            rooms_y: 2,
            floors: self.floors,
            count: BUILDINGS_PER_BLOCK,
        }
    }
}

/// Fixed-shape sub-grid of buildings emitted for an accepted block.
///
/// The grid is a single column: `count` buildings of `length_x` by `length_y`
/// stacked along Y with `delta_y` spacing, starting at `(min_x, min_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingGrid {
    pub min_x: f64,
    pub min_y: f64,
    pub length_x: f64,
    pub length_y: f64,
    pub delta_y: f64,
    pub height: f64,
    pub rooms_x: u32,
    pub rooms_y: u32,
    pub floors: u32,
    pub count: u32,
}

impl BuildingGrid {
    /// Expand the descriptor into concrete building footprints.
    pub fn buildings(&self) -> Vec<Building> {
        (0..self.count)
            .map(|i| {
                let y_min = self.min_y + f64::from(i) * (self.length_y + self.delta_y);
                Building {
                    footprint: Bounds::new(
                        self.min_x,
                        self.min_x + self.length_x,
                        y_min,
                        y_min + self.length_y,
                    ),
                    height: self.height,
                    rooms_x: self.rooms_x,
                    rooms_y: self.rooms_y,
                    floors: self.floors,
                }
            })
            .collect()
    }
}

/// One indoor-site building: a footprint, an extruded height, and the room
/// grid the consuming framework instantiates placement points from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Building {
    pub footprint: Bounds,
    pub height: f64,
    pub rooms_x: u32,
    pub rooms_y: u32,
    pub floors: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_footprint_matches_fixed_sizes() {
        let (width, depth) = PlacedBlock::footprint(10);
        assert_eq!(width, 120.0);
        assert_eq!(depth, 70.0);

        let (width, _) = PlacedBlock::footprint(1);
        assert_eq!(width, 30.0);
    }

    #[test]
    fn building_grid_expands_to_two_inset_buildings() {
        let block = PlacedBlock {
            bounds: Bounds::new(100.0, 220.0, 50.0, 120.0),
            apartments_x: 10,
            floors: 2,
        };
        let grid = block.building_grid();
        assert_eq!(grid.rooms_x, 10);
        assert_eq!(grid.rooms_y, 2);
        assert_eq!(grid.floors, 2);
        assert_eq!(grid.height, 6.0);
        assert_eq!(grid.count, BUILDINGS_PER_BLOCK);

        let buildings = grid.buildings();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].footprint, Bounds::new(110.0, 210.0, 60.0, 80.0));
        assert_eq!(buildings[1].footprint, Bounds::new(110.0, 210.0, 90.0, 110.0));
        // The second building ends one inset short of the block edge.
        assert_eq!(buildings[1].footprint.y_max + BLOCK_EDGE_INSET, block.bounds.y_max);
    }
}
