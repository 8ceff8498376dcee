use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{DEFAULT_CLIP_LIMIT, Vec2, validate_finite_vec2, validate_n_rows};
use crate::foundation::error::{GridError, GridResult};
use crate::grid::transform::GridTransform;

/// JSON-facing description of a subplot grid.
///
/// ```json
/// { "n_rows": 3, "zoom": [1.0, 1.0], "pan": [0.0, 0.0], "clip_limit": 0.95 }
/// ```
///
/// Only `n_rows` is required.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    pub n_rows: f64,
    #[serde(default = "default_zoom")]
    pub zoom: [f64; 2],
    #[serde(default)]
    pub pan: [f64; 2],
    #[serde(default = "default_clip_limit")]
    pub clip_limit: f64,
}

fn default_zoom() -> [f64; 2] {
    [1.0, 1.0]
}

fn default_clip_limit() -> f64 {
    DEFAULT_CLIP_LIMIT
}

impl GridConfig {
    /// A config for `n_rows` with identity pan/zoom and the default clip limit.
    pub fn new(n_rows: f64) -> Self {
        Self {
            n_rows,
            zoom: default_zoom(),
            pan: [0.0, 0.0],
            clip_limit: default_clip_limit(),
        }
    }

    /// Parse a grid config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GridResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GridError::config(format!("parse grid config JSON: {e}")))
    }

    /// Parse a grid config from a JSON file on disk.
    #[tracing::instrument(skip_all)]
    pub fn from_path(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GridError::config(format!("open grid config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(path = %path.display(), n_rows = cfg.n_rows, "loaded grid config");
        Ok(cfg)
    }

    pub fn validate(&self) -> GridResult<()> {
        validate_n_rows(self.n_rows)?;
        if !self.clip_limit.is_finite() || self.clip_limit < 0.0 {
            return Err(GridError::validation("clip_limit must be finite and >= 0"));
        }
        validate_finite_vec2("zoom", self.zoom_vec())?;
        validate_finite_vec2("pan", self.pan_vec())?;
        Ok(())
    }

    pub fn zoom_vec(&self) -> Vec2 {
        Vec2::new(self.zoom[0], self.zoom[1])
    }

    pub fn pan_vec(&self) -> Vec2 {
        Vec2::new(self.pan[0], self.pan[1])
    }

    /// Validate and build the transform this config describes.
    pub fn to_transform(&self) -> GridResult<GridTransform> {
        self.validate()?;
        GridTransform::new(self.n_rows)?
            .with_zoom(self.zoom_vec())?
            .with_pan(self.pan_vec())
    }

    /// [`crate::grid_clip_with`] at this config's limit.
    pub fn clip(&self, position: Vec2) -> bool {
        crate::grid::transform::grid_clip_with(position, self.clip_limit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
