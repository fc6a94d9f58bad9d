//! Configuration types for tree building and radial layout.
//!
//! All types implement [`serde::Deserialize`] and fall back to their defaults
//! for any missing field, so a partial TOML file such as
//!
//! ```toml
//! [layout]
//! level_spacing = 150.0
//! ```
//!
//! is a complete configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining tree and layout settings.
//! - [`TreeConfig`] - Root preference, collapse depth and recursion limit of the tree builder.
//! - [`LayoutConfig`] - Ring radii and recursion limit of the radial layout.
//!
//! # Example
//!
//! ```
//! # use linkmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.tree().root_id(), "1");
//! assert_eq!(config.layout().base_radius(), 300.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use crate::error::LinkMapError;

/// Recursion limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Top-level configuration combining tree and layout settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tree builder configuration section.
    #[serde(default)]
    tree: TreeConfig,

    /// Radial layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    pub fn new(tree: TreeConfig, layout: LayoutConfig) -> Self {
        Self { tree, layout }
    }

    /// Returns the tree builder configuration.
    pub fn tree(&self) -> &TreeConfig {
        &self.tree
    }

    /// Returns the radial layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Checks values that deserialize fine but cannot produce a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LinkMapError::Config`] for non-finite or negative radii and
    /// for an empty preferred root id.
    pub fn validate(&self) -> Result<(), LinkMapError> {
        if self.tree.root_id.is_empty() {
            return Err(LinkMapError::Config(
                "tree.root_id must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("layout.base_radius", self.layout.base_radius),
            ("layout.level_spacing", self.layout.level_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LinkMapError::Config(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Tree builder configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Id of the node preferred as tree root.
    root_id: String,

    /// The single tree depth whose nodes start collapsed.
    collapse_depth: usize,

    /// Deepest tree depth the builder may reach.
    max_depth: usize,
}

impl TreeConfig {
    pub fn new(root_id: impl Into<String>, collapse_depth: usize, max_depth: usize) -> Self {
        Self {
            root_id: root_id.into(),
            collapse_depth,
            max_depth,
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn collapse_depth(&self) -> usize {
        self.collapse_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_id: "1".to_string(),
            collapse_depth: 1,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Radial layout configuration.
///
/// Children of a node at level `l` are placed at distance
/// `base_radius + l * level_spacing` from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    base_radius: f64,
    level_spacing: f64,

    /// Deepest level the layout may reach.
    max_depth: usize,
}

impl LayoutConfig {
    pub fn new(base_radius: f64, level_spacing: f64, max_depth: usize) -> Self {
        Self {
            base_radius,
            level_spacing,
            max_depth,
        }
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn level_spacing(&self) -> f64 {
        self.level_spacing
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 300.0,
            level_spacing: 200.0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"layout": {"level_spacing": 150.0}}"#).unwrap();

        assert_eq!(config.layout().level_spacing(), 150.0);
        assert_eq!(config.layout().base_radius(), 300.0);
        assert_eq!(config.tree().collapse_depth(), 1);
        assert_eq!(config.tree().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let config = AppConfig::new(
            TreeConfig::default(),
            LayoutConfig::new(-1.0, 200.0, 10),
        );

        let err = config.validate().unwrap_err();
        assert!(matches!(err, LinkMapError::Config(_)));
        assert!(err.to_string().contains("layout.base_radius"));
    }

    #[test]
    fn test_validate_rejects_nan_spacing() {
        let config = AppConfig::new(
            TreeConfig::default(),
            LayoutConfig::new(300.0, f64::NAN, 10),
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_root_id() {
        let config = AppConfig::new(TreeConfig::new("", 1, 10), LayoutConfig::default());
        assert!(config.validate().is_err());
    }
}
