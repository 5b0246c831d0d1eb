//! Peripheral output formatting.
//!
//! Writes the generated scenario as a JSON scene document plus gnuplot
//! overlay scripts (building rectangles and macro-site labels) for quick
//! visual inspection. The layout core never formats anything; this module is
//! the only place output shapes are decided.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::layout::Building;
use crate::scene::{MacroSite, Scenario};

/// Gnuplot objects for building footprints, one `set object` per building.
pub fn gnuplot_buildings(buildings: &[Building]) -> String {
    let mut out = String::new();
    for (index, building) in buildings.iter().enumerate() {
        let b = &building.footprint;
        let _ = writeln!(
            out,
            "set object {} rect from {},{} to {},{} front fs empty ",
            index + 1,
            b.x_min,
            b.y_min,
            b.x_max,
            b.y_max
        );
    }
    out
}

/// Gnuplot labels marking macro-site positions.
pub fn gnuplot_macro_sites(sites: &[MacroSite]) -> String {
    let mut out = String::new();
    for site in sites {
        let _ = writeln!(
            out,
            "set label \"{}\" at {},{} left font \"Helvetica,4\" textcolor rgb \"white\" front  point pt 2 ps 0.3 lc rgb \"white\" offset 0,0",
            site.site_id, site.position.x, site.position.y
        );
    }
    out
}

/// Write the scene document and the plot overlays into `dir`.
pub fn write_outputs(dir: &Path, scenario: &Scenario) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating output directory {}", dir.display()))?;

    let json = serde_json::to_string_pretty(scenario).context("serializing the scenario document")?;
    let scene_path = dir.join("scenario.json");
    fs::write(&scene_path, json).with_context(|| format!("writing {}", scene_path.display()))?;

    let buildings: Vec<Building> = scenario
        .blocks
        .iter()
        .flat_map(|block| block.buildings.iter().copied())
        .collect();
    let buildings_path = dir.join("buildings.txt");
    fs::write(&buildings_path, gnuplot_buildings(&buildings))
        .with_context(|| format!("writing {}", buildings_path.display()))?;

    let sites_path = dir.join("macro-sites.txt");
    fs::write(&sites_path, gnuplot_macro_sites(&scenario.macro_sites))
        .with_context(|| format!("writing {}", sites_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Bounds, Point};

    #[test]
    fn building_objects_follow_the_plot_script_format() {
        let buildings = vec![
            Building {
                footprint: Bounds::new(110.0, 210.0, 60.0, 80.0),
                height: 3.0,
                rooms_x: 10,
                rooms_y: 2,
                floors: 1,
            },
            Building {
                footprint: Bounds::new(110.0, 210.0, 90.0, 110.0),
                height: 3.0,
                rooms_x: 10,
                rooms_y: 2,
                floors: 1,
            },
        ];
        let script = gnuplot_buildings(&buildings);
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "set object 1 rect from 110,60 to 210,80 front fs empty ");
        assert_eq!(lines[1], "set object 2 rect from 110,90 to 210,110 front fs empty ");
    }

    #[test]
    fn site_labels_carry_id_and_position() {
        let sites = vec![MacroSite {
            site_id: 1,
            position: Point { x: 250.0, y: 0.0 },
            tx_power_dbm: 46.0,
        }];
        let script = gnuplot_macro_sites(&sites);
        assert!(script.starts_with("set label \"1\" at 250,0 "));
        assert!(script.contains("point pt 2 ps 0.3"));
    }
}
