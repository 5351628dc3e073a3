use std::path::Path;

use serde::Deserialize;

/// Application configuration loaded from an optional YAML file.
///
/// Both fields have CLI flag equivalents which take precedence; the
/// config file only supplies defaults for flags the user omits.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Channel grid spacing used when no `--step` is passed
    #[serde(default = "default_quantization_step")]
    pub quantization_step: u16,

    /// Pixels grouped per motif when no `--pixels-per-motif` is passed
    #[serde(default = "default_pixels_per_motif")]
    pub pixels_per_motif: usize,
}

fn default_quantization_step() -> u16 {
    64
}

fn default_pixels_per_motif() -> usize {
    1
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or unparsable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        step = config.quantization_step,
                        pixels_per_motif = config.pixels_per_motif,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(%e, "No config file, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quantization_step: default_quantization_step(),
            pixels_per_motif: default_pixels_per_motif(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = AppConfig::default();
        assert_eq!(config.quantization_step, 64);
        assert_eq!(config.pixels_per_motif, 1);
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig =
            serde_yaml::from_str("quantization_step: 32\npixels_per_motif: 2\n").unwrap();
        assert_eq!(config.quantization_step, 32);
        assert_eq!(config.pixels_per_motif, 2);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("quantization_step: 8\n").unwrap();
        assert_eq!(config.quantization_step, 8);
        assert_eq!(config.pixels_per_motif, 1);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load(Path::new("definitely-not-here.yaml"));
        assert_eq!(config, AppConfig::default());
    }
}
