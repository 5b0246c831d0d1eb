//! Scenario assembly: one generation pass from configuration to a scene
//! document.
//!
//! The pass sizes the macro grid (or falls back to the fixed default area),
//! scatters the requested apartment blocks inside it, expands each accepted
//! block into its building sub-grid, and attaches the derived small-cell
//! population and power metadata the consuming simulator expects.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::config::ScenarioConfig;
use crate::layout::types::FALLBACK_COVERAGE;
use crate::layout::{BlockAllocator, Bounds, Building, CoverageArea, LayoutError, MacroGrid, Point, UniformSource};

/// A macro transmission site on the hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSite {
    pub site_id: u32,
    pub position: Point,
    pub tx_power_dbm: f64,
}

/// An accepted apartment block together with its expanded buildings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRecord {
    pub bounds: Bounds,
    pub buildings: Vec<Building>,
}

/// The generated deployment scenario.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub generated_at: DateTime<Utc>,
    /// Region containing all outdoor mobile stations.
    pub coverage: CoverageArea,
    pub macro_sites: Vec<MacroSite>,
    pub blocks: Vec<BlockRecord>,
    /// Number of active indoor home sites across all blocks, derived from
    /// the deployment and activation ratios.
    pub home_site_count: u32,
    pub home_tx_power_dbm: f64,
}

/// Active home sites implied by the block population: four apartments per
/// block-floor-column times the deployment and activation ratios.
pub fn home_site_count(config: &ScenarioConfig) -> u32 {
    let deployed = 4.0
        * f64::from(config.n_apartments_x)
        * f64::from(config.n_blocks)
        * f64::from(config.n_floors)
        * config.home_deployment_ratio
        * config.home_activation_ratio;
    deployed.round() as u32
}

/// Run the generation pass. The configuration must already be validated;
/// the random source is owned by this pass for its whole duration.
pub fn build_scenario<S: UniformSource>(config: &ScenarioConfig, source: S) -> Result<Scenario, LayoutError> {
    let (coverage, macro_sites) = if config.n_macro_sites > 0 {
        let grid = MacroGrid::new(
            config.n_macro_sites,
            config.n_macro_sites_x,
            config.inter_site_distance,
            config.area_margin_factor,
        );
        info!(
            "macro grid: {} sites over {} rows",
            config.n_macro_sites,
            grid.row_count()
        );
        let sites = grid
            .site_positions()
            .into_iter()
            .enumerate()
            .map(|(i, position)| MacroSite {
                site_id: i as u32 + 1,
                position,
                tx_power_dbm: config.macro_tx_power_dbm,
            })
            .collect();
        (grid.coverage_area(), sites)
    } else {
        // No macro tier; the blocks still need an area to land in.
        info!("no macro sites requested, using the fallback coverage area");
        (FALLBACK_COVERAGE, Vec::new())
    };

    let mut allocator = BlockAllocator::new(coverage.bounds, config.n_apartments_x, config.n_floors, source)?;
    let placed = allocator.place_many(config.n_blocks)?;
    info!("accepted {} apartment block(s)", allocator.blocks().len());

    let blocks = placed
        .iter()
        .map(|block| BlockRecord {
            bounds: block.bounds,
            buildings: block.building_grid().buildings(),
        })
        .collect();

    Ok(Scenario {
        generated_at: Utc::now(),
        coverage,
        macro_sites,
        blocks,
        home_site_count: home_site_count(config),
        home_tx_power_dbm: config.home_tx_power_dbm,
    })
}
