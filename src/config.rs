//! Runtime configuration of the experiment.
//!
//! [`ExperimentConfig`] mirrors every constant in [`crate::constants`].
//! Missing keys in a TOML document fall back to those defaults, so a file can
//! override only the values it cares about:
//!
//! ```toml
//! dip_duration_ms = 1000
//! click_threshold_px = 6.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{
    AUTO_ROTATION_PER_FRAME, BLOW_DURATION_MS, CLICK_THRESHOLD_PX, DEDUP_PRECISION,
    DIP_DURATION_MS, DRAG_ROTATION_SCALE, EDGE_THRESHOLD_DEG, FAN_OPACITY, MARKER_OPACITY,
    RADIATING_LINE_OPACITY, REST_HEIGHT, SUBMERGED_HEIGHT, SURFACE_OPACITY,
};
use crate::error::{ConfigError, Result};

/// Highest supported deduplication precision; `10^9` still fits comfortably in an `i64` key.
const MAX_DEDUP_PRECISION: u32 = 9;

/// Tunable parameters of the experiment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    // ── Animation ────────────────────────────────────────────────────────────
    pub dip_duration_ms: u64,
    pub blow_duration_ms: u64,
    pub rest_height: f64,
    pub submerged_height: f64,
    pub auto_rotation_per_frame: f64,

    // ── Interaction ──────────────────────────────────────────────────────────
    pub click_threshold_px: f64,
    pub drag_rotation_scale: f64,

    // ── Geometry ─────────────────────────────────────────────────────────────
    /// Decimal places used as the vertex identity key. An intentional
    /// approximation: distinct points closer than `10^-precision` merge.
    pub dedup_precision: u32,
    pub edge_threshold_deg: f64,

    // ── Film appearance ──────────────────────────────────────────────────────
    pub fan_opacity: f64,
    pub radiating_line_opacity: f64,
    pub marker_opacity: f64,
    pub surface_opacity: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dip_duration_ms: DIP_DURATION_MS,
            blow_duration_ms: BLOW_DURATION_MS,
            rest_height: REST_HEIGHT,
            submerged_height: SUBMERGED_HEIGHT,
            auto_rotation_per_frame: AUTO_ROTATION_PER_FRAME,
            click_threshold_px: CLICK_THRESHOLD_PX,
            drag_rotation_scale: DRAG_ROTATION_SCALE,
            dedup_precision: DEDUP_PRECISION,
            edge_threshold_deg: EDGE_THRESHOLD_DEG,
            fan_opacity: FAN_OPACITY,
            radiating_line_opacity: RADIATING_LINE_OPACITY,
            marker_opacity: MARKER_OPACITY,
            surface_opacity: SURFACE_OPACITY,
        }
    }
}

impl ExperimentConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded experiment config");
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("rest_height", self.rest_height),
            ("submerged_height", self.submerged_height),
            ("auto_rotation_per_frame", self.auto_rotation_per_frame),
            ("click_threshold_px", self.click_threshold_px),
            ("drag_rotation_scale", self.drag_rotation_scale),
            ("edge_threshold_deg", self.edge_threshold_deg),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }
        if self.dip_duration_ms == 0 {
            return Err(invalid("dip_duration_ms", "must be positive"));
        }
        if self.blow_duration_ms == 0 {
            return Err(invalid("blow_duration_ms", "must be positive"));
        }
        if self.click_threshold_px <= 0.0 {
            return Err(invalid("click_threshold_px", "must be positive"));
        }
        if self.dedup_precision > MAX_DEDUP_PRECISION {
            return Err(invalid(
                "dedup_precision",
                format!("must be at most {MAX_DEDUP_PRECISION}"),
            ));
        }
        if !(0.0..180.0).contains(&self.edge_threshold_deg) {
            return Err(invalid("edge_threshold_deg", "must lie in [0, 180)"));
        }
        if self.submerged_height >= self.rest_height {
            return Err(invalid("submerged_height", "must be below rest_height"));
        }
        for (field, value) in [
            ("fan_opacity", self.fan_opacity),
            ("radiating_line_opacity", self.radiating_line_opacity),
            ("marker_opacity", self.marker_opacity),
            ("surface_opacity", self.surface_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "opacity must lie in [0, 1]"));
            }
        }
        Ok(())
    }

    /// Dip animation length.
    #[must_use]
    pub fn dip_duration(&self) -> Duration {
        Duration::from_millis(self.dip_duration_ms)
    }

    /// Blow fade length.
    #[must_use]
    pub fn blow_duration(&self) -> Duration {
        Duration::from_millis(self.blow_duration_ms)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::SoapFilmError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
    .into()
}
