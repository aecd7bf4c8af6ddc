use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fractals::mandelbrot::colour_index::ColourIndexKind;
use crate::core::fractals::mandelbrot::colour_selection::ColourSelection;
use crate::core::fractals::mandelbrot::colouring::ColouringKind;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::params::{
    MandelbrotParams, DEFAULT_BAILOUT, DEFAULT_MAX_ITERATIONS, DEFAULT_POWER,
};
use crate::core::tiles::tile_cache::{
    DEFAULT_CACHE_CAPACITY_BYTES, DEFAULT_ENCODED_CACHE_CAPACITY_BYTES,
};
use crate::core::tiles::tile_params::TileParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid render defaults: {0}")]
    Render(#[from] MandelbrotError),
    #[error("auto iterations range {min}..={max} is empty or starts at zero")]
    AutoIterationsRange { min: u32, max: u32 },
    #[error("auto iterations base {base} and growth {growth} must be finite and positive")]
    AutoIterationsCurve { base: f64, growth: f64 },
}

/// Explorer settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub render: RenderDefaults,
    pub tiles: TileConfig,
}

impl ExplorerConfig {
    /// Parses and validates a JSON config. Unknown algorithm identifiers are errors.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        config.render.tile_params()?;
        config.tiles.auto_iterations.validate()?;

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    pub max_iterations: u32,
    pub bailout: f64,
    pub power: u32,
    pub colouring: ColouringKind,
    pub colour_index: ColourIndexKind,
    pub palette: PaletteKind,
}

impl RenderDefaults {
    pub fn tile_params(&self) -> Result<TileParams, MandelbrotError> {
        Ok(TileParams::new(
            MandelbrotParams::new(self.max_iterations, self.bailout, self.power)?,
            ColourSelection {
                colouring: self.colouring,
                colour_index: self.colour_index,
                palette: self.palette,
            },
        ))
    }
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout: DEFAULT_BAILOUT,
            power: DEFAULT_POWER,
            colouring: ColouringKind::default(),
            colour_index: ColourIndexKind::default(),
            palette: PaletteKind::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub cache_capacity_bytes: usize,
    pub encoded_cache_capacity_bytes: usize,
    pub auto_iterations: AutoIterations,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            cache_capacity_bytes: DEFAULT_CACHE_CAPACITY_BYTES,
            encoded_cache_capacity_bytes: DEFAULT_ENCODED_CACHE_CAPACITY_BYTES,
            auto_iterations: AutoIterations::default(),
        }
    }
}

/// Iteration budget that grows geometrically with tile zoom.
///
/// Disabled by default: tiles then render with the `max_iterations` of the
/// request, and a config has to opt in with `"enabled": true`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoIterations {
    pub enabled: bool,
    pub base: f64,
    pub growth: f64,
    pub min: u32,
    pub max: u32,
}

impl AutoIterations {
    /// `floor(base * growth^zoom)` raised to `min`, then capped at `max`.
    ///
    /// When `min > max` the cap wins, so an unvalidated config still yields a
    /// budget instead of panicking.
    #[must_use]
    pub fn max_iterations_for_zoom(&self, zoom: u32) -> u32 {
        let exponent = i32::try_from(zoom).unwrap_or(i32::MAX);
        let budget = (self.base * self.growth.powi(exponent)).floor();

        if budget.is_nan() {
            return self.min.min(self.max);
        }

        // Saturating cast.
        (budget as u32).max(self.min).min(self.max)
    }

    /// `params` with the zoom-dependent budget applied, or unchanged when disabled.
    pub fn apply(&self, params: TileParams, zoom: u32) -> Result<TileParams, MandelbrotError> {
        if !self.enabled {
            return Ok(params);
        }

        let mandelbrot = MandelbrotParams::new(
            self.max_iterations_for_zoom(zoom),
            params.params.bailout(),
            params.params.power(),
        )?;

        Ok(TileParams::new(mandelbrot, params.selection))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::AutoIterationsRange {
                min: self.min,
                max: self.max,
            });
        }

        let curve_ok = self.base.is_finite()
            && self.base > 0.0
            && self.growth.is_finite()
            && self.growth > 0.0;

        if !curve_ok {
            return Err(ConfigError::AutoIterationsCurve {
                base: self.base,
                growth: self.growth,
            });
        }

        Ok(())
    }
}

impl Default for AutoIterations {
    fn default() -> Self {
        Self {
            enabled: false,
            base: 100.0,
            growth: 1.3,
            min: 50,
            max: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = ExplorerConfig::from_json_str("{}").unwrap();

        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.render.max_iterations, 256);
        assert_eq!(config.render.palette, PaletteKind::Hot);
        assert_eq!(config.tiles.cache_capacity_bytes, 64 * 1024 * 1024);
        assert_eq!(config.tiles.encoded_cache_capacity_bytes, 16 * 1024 * 1024);
        assert!(!config.tiles.auto_iterations.enabled);
    }

    #[test]
    fn test_partial_json_overrides_fields() {
        let config = ExplorerConfig::from_json_str(
            r#"{
                "render": { "max_iterations": 1000, "palette": "cool-palette" },
                "tiles": { "auto_iterations": { "enabled": true, "max": 2000 } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.render.max_iterations, 1000);
        assert_eq!(config.render.palette, PaletteKind::Cool);
        assert_eq!(config.render.colouring, ColouringKind::SmoothIterationCount);
        assert!(config.tiles.auto_iterations.enabled);
        assert_eq!(config.tiles.auto_iterations.max, 2000);
        assert_eq!(config.tiles.auto_iterations.min, 50);
    }

    #[test]
    fn test_unknown_palette_is_rejected() {
        let result = ExplorerConfig::from_json_str(r#"{ "render": { "palette": "sepia" } }"#);

        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_invalid_render_defaults_are_rejected() {
        let result = ExplorerConfig::from_json_str(r#"{ "render": { "max_iterations": 0 } }"#);

        assert!(matches!(
            result,
            Err(ConfigError::Render(MandelbrotError::ZeroMaxIterations))
        ));
    }

    #[test]
    fn test_empty_auto_iterations_range_is_rejected() {
        let result = ExplorerConfig::from_json_str(
            r#"{ "tiles": { "auto_iterations": { "min": 500, "max": 100 } } }"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::AutoIterationsRange { min: 500, max: 100 })
        ));
    }

    #[test]
    fn test_max_iterations_for_zoom() {
        let auto = AutoIterations::default();

        assert_eq!(auto.max_iterations_for_zoom(0), 100);
        assert_eq!(auto.max_iterations_for_zoom(1), 130);
        assert_eq!(auto.max_iterations_for_zoom(10), 1378);
        assert_eq!(auto.max_iterations_for_zoom(40), 5000);
        assert_eq!(auto.max_iterations_for_zoom(u32::MAX), 5000);
    }

    #[test]
    fn test_max_iterations_for_zoom_respects_minimum() {
        let auto = AutoIterations {
            base: 10.0,
            ..AutoIterations::default()
        };

        assert_eq!(auto.max_iterations_for_zoom(0), 50);
    }

    #[test]
    fn test_max_iterations_for_zoom_with_inverted_range_uses_maximum() {
        let auto = AutoIterations {
            enabled: true,
            min: 500,
            max: 100,
            ..AutoIterations::default()
        };

        assert_eq!(auto.max_iterations_for_zoom(0), 100);
        assert_eq!(auto.max_iterations_for_zoom(30), 100);
        assert_eq!(
            auto.apply(TileParams::default(), 3).unwrap().params.max_iterations(),
            100
        );
    }

    #[test]
    fn test_apply_with_zero_maximum_is_an_error() {
        let auto = AutoIterations {
            enabled: true,
            min: 0,
            max: 0,
            ..AutoIterations::default()
        };

        assert_eq!(
            auto.apply(TileParams::default(), 5),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_apply_only_when_enabled() {
        let params = TileParams::default();
        let disabled = AutoIterations::default();
        let enabled = AutoIterations {
            enabled: true,
            ..AutoIterations::default()
        };

        assert_eq!(disabled.apply(params, 10).unwrap(), params);

        let applied = enabled.apply(params, 10).unwrap();
        assert_eq!(applied.params.max_iterations(), 1378);
        assert_eq!(applied.selection, params.selection);
    }

    #[test]
    fn test_render_defaults_round_trip_through_json() {
        let config = ExplorerConfig::default();
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(ExplorerConfig::from_json_str(&json).unwrap(), config);
    }
}
