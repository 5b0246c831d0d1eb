//! Scenario configuration loading and validation.

use serde::Deserialize;
use std::path::Path;

/// Parameters of a generated deployment scenario.
///
/// Every field has a default, so an empty file (or no file) produces the
/// reference scenario: three macro sites in a single-column grid and one
/// apartment block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScenarioConfig {
    /// Number of apartment blocks to scatter inside the coverage area.
    pub n_blocks: u32,
    /// Apartments along the X axis in each building of a block.
    pub n_apartments_x: u32,
    /// Floors per building.
    pub n_floors: u32,
    /// Total number of macro sites. Zero disables the macro grid and falls
    /// back to the fixed default coverage area.
    pub n_macro_sites: u32,
    /// (Minimum) number of macro sites along the X axis of the grid.
    pub n_macro_sites_x: u32,
    /// Distance between two nearby macro sites.
    pub inter_site_distance: f64,
    /// How far the mobile-station area extends outside the macro grid,
    /// expressed as a fraction of the inter-site distance.
    pub area_margin_factor: f64,
    /// TX power of macro sites, dBm.
    pub macro_tx_power_dbm: f64,
    /// TX power of indoor home sites, dBm.
    pub home_tx_power_dbm: f64,
    /// Fraction of apartments with a home site deployed.
    pub home_deployment_ratio: f64,
    /// Fraction of deployed home sites that are active.
    pub home_activation_ratio: f64,
    /// Seed for the placement random stream. Unset means a fresh entropy
    /// seed per run.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            n_blocks: 1,
            n_apartments_x: 10,
            n_floors: 1,
            n_macro_sites: 3,
            n_macro_sites_x: 1,
            inter_site_distance: 500.0,
            area_margin_factor: 0.5,
            macro_tx_power_dbm: 46.0,
            home_tx_power_dbm: 20.0,
            home_deployment_ratio: 0.2,
            home_activation_ratio: 0.5,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Load a configuration from a TOML file.
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Reject degenerate inputs before any geometry or sampling runs.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_macro_sites_x == 0 {
            return Err("n-macro-sites-x must be at least 1".to_string());
        }
        if !(self.inter_site_distance > 0.0) {
            return Err(format!(
                "inter-site-distance must be positive, got {}",
                self.inter_site_distance
            ));
        }
        if !(self.area_margin_factor >= 0.0) {
            return Err(format!(
                "area-margin-factor must be non-negative, got {}",
                self.area_margin_factor
            ));
        }
        if self.n_apartments_x == 0 {
            return Err("n-apartments-x must be at least 1".to_string());
        }
        if self.n_floors == 0 {
            return Err("n-floors must be at least 1".to_string());
        }
        for (name, ratio) in [
            ("home-deployment-ratio", self.home_deployment_ratio),
            ("home-activation-ratio", self.home_activation_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(format!("{} must be within 0-1, got {}", name, ratio));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_reference_scenario() {
        let config = ScenarioConfig::default();
        assert_eq!(config.n_blocks, 1);
        assert_eq!(config.n_apartments_x, 10);
        assert_eq!(config.n_macro_sites, 3);
        assert_eq!(config.inter_site_distance, 500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            n-blocks = 4
            n-macro-sites = 7
            inter-site-distance = 250.0
            seed = 99
            "#,
        )
        .unwrap();
        assert_eq!(config.n_blocks, 4);
        assert_eq!(config.n_macro_sites, 7);
        assert_eq!(config.inter_site_distance, 250.0);
        assert_eq!(config.seed, Some(99));
        // Untouched fields keep their defaults.
        assert_eq!(config.n_apartments_x, 10);
        assert_eq!(config.area_margin_factor, 0.5);
    }

    #[test]
    fn degenerate_inputs_fail_validation() {
        let mut config = ScenarioConfig::default();
        config.n_macro_sites_x = 0;
        assert!(config.validate().unwrap_err().contains("n-macro-sites-x"));

        let mut config = ScenarioConfig::default();
        config.inter_site_distance = 0.0;
        assert!(config.validate().unwrap_err().contains("inter-site-distance"));

        let mut config = ScenarioConfig::default();
        config.area_margin_factor = -0.1;
        assert!(config.validate().unwrap_err().contains("area-margin-factor"));

        let mut config = ScenarioConfig::default();
        config.n_apartments_x = 0;
        assert!(config.validate().is_err());

        let mut config = ScenarioConfig::default();
        config.home_activation_ratio = 1.5;
        assert!(config.validate().unwrap_err().contains("home-activation-ratio"));
    }
}
