use serde::{Deserialize, Serialize};

use crate::core::{ColorScheme, Dataset, ViewMode, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Name of the dataset created at startup.
pub const DEFAULT_DATASET_NAME: &str = "default";

/// Sample series loaded into the startup dataset.
pub const DEFAULT_SAMPLE_VALUES: [f64; 33] = [
    4.8, 5.6, 1.5, 1.9, 0.2, 2.1, 1.6, 1.6, 1.0, 1.7, 2.7, 2.5, 2.3, 2.8, 1.9, 2.2, 2.0, 2.1, 2.4,
    0.3, 1.8, 2.9, 1.5, 0.9, 1.9, 1.1, 1.4, 1.6, 2.3, 1.9, 0.7, 3.4, 6.8,
];

/// Dataset created (and selected) when the engine starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDataset {
    pub name: String,
    pub values: Vec<f64>,
}

impl Default for SeedDataset {
    fn default() -> Self {
        Self {
            name: DEFAULT_DATASET_NAME.to_owned(),
            values: DEFAULT_SAMPLE_VALUES.to_vec(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "default_seed_dataset")]
    pub seed_dataset: Option<SeedDataset>,
    /// Fixed seed for the `Random` color scheme; entropy when absent.
    #[serde(default)]
    pub color_seed: Option<u64>,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for PlotEngineConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            view_mode: ViewMode::Line,
            color_scheme: ColorScheme::Random,
            seed_dataset: default_seed_dataset(),
            color_seed: None,
            style: RenderStyle::default(),
        }
    }
}

impl PlotEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Replaces the startup dataset.
    #[must_use]
    pub fn with_seed_dataset(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.seed_dataset = Some(SeedDataset {
            name: name.into(),
            values,
        });
        self
    }

    /// Starts with an empty registry and no selection.
    #[must_use]
    pub fn without_seed_dataset(mut self) -> Self {
        self.seed_dataset = None;
        self
    }

    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(seed) = &self.seed_dataset {
            Dataset::with_values(seed.name.clone(), seed.values.clone())?;
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(360, 550)
}

fn default_seed_dataset() -> Option<SeedDataset> {
    Some(SeedDataset::default())
}
