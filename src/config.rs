//! Layered configuration.
//!
//! A configuration file is a partial JSON object. Each layer is deep-merged
//! over the defaults (and over earlier layers) with [`merge`], so a file only
//! has to name the keys it changes:
//!
//! ```json
//! { "dialect": "markdown", "cover": { "rect": { "radius": { "pt": 2.0 } } } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::{CoverStrategy, HideCover, LayoutCtx, Oracle, RectCover, Region};
use crate::markup::Dialect;
use crate::model::{Dict, merge};
use crate::reveal::RevealContext;
use crate::style::{Align, Color, Paint};

/// How hidden content is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverKind {
    #[default]
    Rect,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    pub strategy: CoverKind,
    pub fill: Paint,
    pub inline: bool,
    /// Extra rectangle attributes for the `rect` strategy.
    pub rect: Dict,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            strategy: CoverKind::Rect,
            fill: Paint::Color(Color::WHITE),
            inline: true,
            rect: Dict::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dialect: Dialect,
    pub indent: usize,
    pub region: Region,
    pub cover: CoverConfig,
    /// Alignment of alternatives inside their shared footprint.
    pub position: Align,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            indent: 0,
            region: Region::default(),
            cover: CoverConfig::default(),
            position: Align::BOTTOM_LEFT,
        }
    }
}

impl Config {
    /// Parse one JSON layer over the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let layer: Dict = serde_json::from_str(json)?;
        Self::from_layers([layer])
    }

    /// Load one configuration file over the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::layered([path])
    }

    /// Load configuration files in order; later files win.
    pub fn layered<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let layers = paths
            .into_iter()
            .map(|path| -> Result<Dict> {
                let path = path.as_ref();
                debug!(path = %path.display(), "loading config layer");
                let text = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str::<Dict>(&text)?)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_layers(layers)
    }

    fn from_layers(layers: impl IntoIterator<Item = Dict>) -> Result<Self> {
        let defaults: Dict = serde_json::from_value(serde_json::to_value(Self::default())?)?;
        let layers: Vec<Dict> = layers.into_iter().collect();
        let merged = merge(&defaults, &layers);
        let config: Config = serde_json::from_value(serde_json::to_value(&merged)?)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.cover.strategy == CoverKind::Rect && self.cover.fill == Paint::Auto {
            return Err(Error::AutoFill);
        }
        Ok(())
    }

    /// The configured cover strategy.
    pub fn cover_strategy(&self) -> Box<dyn CoverStrategy> {
        match self.cover.strategy {
            CoverKind::Rect => Box::new(
                RectCover::new(self.cover.fill)
                    .inline(self.cover.inline)
                    .with_rect_args(self.cover.rect.clone()),
            ),
            CoverKind::Hide => Box::new(HideCover),
        }
    }

    /// A layout context over the configured region.
    pub fn layout<'a>(&self, oracle: &'a dyn Oracle) -> LayoutCtx<'a> {
        LayoutCtx::new(oracle, self.region)
    }

    /// A reveal context for `subslide` with the configured region, cover,
    /// and alternatives position.
    pub fn reveal<'a>(&self, subslide: u32, oracle: &'a dyn Oracle) -> RevealContext<'a> {
        RevealContext::new(subslide, self.layout(oracle))
            .with_boxed_cover(self.cover_strategy())
            .with_position(self.position)
    }
}
