use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Chart type used to draw the selected dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Line,
    Bar,
    HBar,
    Sem,
    Pie,
}

impl ViewMode {
    /// Display order used by view selectors.
    pub const ALL: [ViewMode; 5] = [Self::Line, Self::Bar, Self::HBar, Self::Sem, Self::Pie];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
            Self::HBar => "HBar",
            Self::Sem => "Bar(SEM)",
            Self::Pie => "Pie",
        }
    }

    /// SEM and pie charts are only defined for non-negative data.
    #[must_use]
    pub const fn requires_non_negative(self) -> bool {
        matches!(self, Self::Sem | Self::Pie)
    }

    /// Returns whether this mode can draw `values` without falling back to `Line`.
    #[must_use]
    pub fn is_available_for(self, values: &[f64]) -> bool {
        !self.requires_non_negative() || !has_negative(values)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown view mode `{s}`")))
    }
}

/// Palette strategy applied across the elements of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Random,
    Red,
    Green,
    Blue,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [Self::Random, Self::Red, Self::Green, Self::Blue];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorScheme {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.label() == s)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown color scheme `{s}`")))
    }
}

#[must_use]
pub fn has_negative(values: &[f64]) -> bool {
    values.iter().any(|value| *value < 0.0)
}
